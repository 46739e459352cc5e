pub mod auth;
pub mod export;
pub mod metrics;
pub mod orders;
pub mod upload;

use common::session;
use common::{ApiError, Session};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::session::BrowserStore;
use crate::settings;

pub const LOGIN_PATH: &str = "/login";

type QueryParams = [(&'static str, String)];

/// HTTP client for the analytics API. Carries the `Authorization` header of
/// the current session, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    authorization: Option<String>,
}

impl ApiClient {
    pub fn new(session: Option<&Session>) -> Self {
        Self {
            base_url: settings::get_settings().api_base_url(),
            authorization: session.map(Session::bearer),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.authorization {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }

    fn with_query(builder: RequestBuilder, query: &QueryParams) -> RequestBuilder {
        builder.query(query.iter().map(|(key, value)| (*key, value.as_str())))
    }

    /// GET returning a JSON body
    pub async fn get_json<T>(&self, endpoint: &str, query: &QueryParams) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET request to: {}", self.url(endpoint));
        let builder = Self::with_query(self.authorize(Request::get(&self.url(endpoint))), query);
        let response = check(endpoint, "GET", builder.send().await).await?;
        decode(endpoint, "GET", response).await
    }

    /// GET returning the raw body bytes
    pub async fn get_bytes(&self, endpoint: &str, query: &QueryParams) -> Result<Vec<u8>, ApiError> {
        log::debug!("GET (binary) request to: {}", self.url(endpoint));
        let builder = Self::with_query(self.authorize(Request::get(&self.url(endpoint))), query);
        let response = check(endpoint, "GET", builder.send().await).await?;

        response.binary().await.map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })
    }

    /// POST with a JSON body
    pub async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        log::debug!("POST request to: {}", self.url(endpoint));
        let request = self
            .authorize(Request::post(&self.url(endpoint)))
            .json(body)
            .map_err(|e| {
                let err = ApiError::Encode(e.to_string());
                log::error!("POST {} - {}", endpoint, err);
                err
            })?;
        let response = check(endpoint, "POST", request.send().await).await?;
        decode(endpoint, "POST", response).await
    }

    /// POST without a body whose response is not needed
    pub async fn post_empty(&self, endpoint: &str) -> Result<(), ApiError> {
        log::debug!("POST request to: {}", self.url(endpoint));
        let builder = self
            .authorize(Request::post(&self.url(endpoint)))
            .header("Content-Type", "application/json");
        check(endpoint, "POST", builder.send().await).await?;
        Ok(())
    }

    /// POST a multipart form. The browser picks the boundary, so no
    /// Content-Type header is set here.
    pub async fn post_form<T>(&self, endpoint: &str, form: FormData) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("POST (multipart) request to: {}", self.url(endpoint));
        let request = self
            .authorize(Request::post(&self.url(endpoint)))
            .body(JsValue::from(form))
            .map_err(|e| {
                let err = ApiError::Encode(e.to_string());
                log::error!("POST {} - {}", endpoint, err);
                err
            })?;
        let response = check(endpoint, "POST", request.send().await).await?;
        decode(endpoint, "POST", response).await
    }
}

/// Shared response handling: transport errors, the global 401 policy and
/// non-2xx statuses.
async fn check(
    endpoint: &str,
    method: &str,
    result: Result<Response, gloo_net::Error>,
) -> Result<Response, ApiError> {
    let response = result.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    let status = response.status();
    if session::revoke_on_unauthorized(&BrowserStore, status) {
        log::warn!("{} {} - 401, redirecting to login", method, endpoint);
        redirect_to_login();
        return Err(ApiError::Unauthorized);
    }

    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let body = response.json::<serde_json::Value>().await.ok();
        let err = ApiError::from_status(status, body);
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    Ok(response)
}

async fn decode<T>(endpoint: &str, method: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

/// Hard navigation so every in-memory state is dropped with the session.
pub fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(LOGIN_PATH) {
        log::error!("Failed to navigate to {}: {:?}", LOGIN_PATH, e);
    }
}

pub(crate) fn browser_error(context: &str, err: JsValue) -> ApiError {
    let err = ApiError::Browser(format!("{}: {:?}", context, err));
    log::error!("{}", err);
    err
}
