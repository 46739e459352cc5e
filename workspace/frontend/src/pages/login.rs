use common::Session;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth::LoginForm;
use crate::router::Route;
use crate::session::SessionContext;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();

    let Some(session) = session else {
        log::error!("Login page rendered outside SessionProvider");
        return html! {};
    };

    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let on_login_success = {
        let sign_in = session.sign_in.clone();
        Callback::from(move |new_session: Session| {
            sign_in.emit(new_session);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! { <LoginForm on_login_success={on_login_success} /> }
}
