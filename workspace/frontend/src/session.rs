use std::rc::Rc;

use common::{Session, SessionStore, UserProfile};
use yew::prelude::*;

use crate::api_client::{self, ApiClient};
use crate::ui::toast::ToastContext;

/// `SessionStore` backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::error!("Failed to write {} to localStorage: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log::error!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}

/// Session shared with the whole UI. `session` mirrors what is persisted.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Option<Rc<Session>>,
    pub sign_in: Callback<Session>,
    pub sign_out: Callback<()>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.session.as_ref().and_then(|s| s.profile().cloned())
    }

    /// API client carrying this session's token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.session.as_deref())
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| Session::load(&BrowserStore).map(Rc::new));

    let sign_in = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            log::info!("Session started");
            new_session.persist(&BrowserStore);
            session.set(Some(Rc::new(new_session)));
        })
    };

    let toast = use_context::<ToastContext>();

    let sign_out = {
        let session = session.clone();
        Callback::from(move |_| {
            // The client is built before clearing so the logout call still carries the token.
            let client = ApiClient::new((*session).as_deref());
            Session::clear(&BrowserStore);
            session.set(None);
            log::info!("Signed out locally");
            if let Some(toast) = &toast {
                toast.show_info("You have been signed out");
            }

            wasm_bindgen_futures::spawn_local(async move {
                api_client::auth::logout(&client).await;
            });
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
