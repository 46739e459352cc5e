use common::{ApiError, LoginRequest, LoginResponse};

use super::ApiClient;

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    log::trace!("Logging in as {}", request.email);
    let result = client
        .post_json::<LoginResponse, _>("/api/auth/login", request)
        .await;

    match &result {
        Ok(_) => log::info!("Login succeeded for {}", request.email),
        Err(e) => log::error!("Login failed: {}", e),
    }

    result
}

/// Best-effort server-side logout. Failures are logged and swallowed so
/// they never hold up the local sign-out.
pub async fn logout(client: &ApiClient) {
    if let Err(e) = client.post_empty("/api/auth/logout").await {
        log::error!("Logout API call failed: {}", e);
    } else {
        log::info!("Server session closed");
    }
}
