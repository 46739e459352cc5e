use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::Home;
use crate::pages::login::Login;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <Login /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}
