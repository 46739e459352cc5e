use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::router::Route;
use crate::session::SessionContext;

/// Dashboard for signed-in users; everyone else is sent to the login page.
#[function_component(Home)]
pub fn home() -> Html {
    let authenticated = use_context::<SessionContext>()
        .map(|s| s.is_authenticated())
        .unwrap_or(false);

    if !authenticated {
        log::debug!("No session, redirecting to login");
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! { <Dashboard /> }
}
