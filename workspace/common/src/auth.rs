use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Session;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter your password")]
    MissingPassword,
}

impl LoginRequest {
    /// Builds a request from raw form input. The email is trimmed; the
    /// password is sent exactly as typed.
    pub fn from_form(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialsError::MissingEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Profile returned at login and cached next to the token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl UserProfile {
    /// Name shown in the user menu; falls back to the email when the
    /// backend sent no full name.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session::new(self.access_token, self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_trims_email() {
        let request = LoginRequest::from_form("  admin@example.com ", " secret ").unwrap();
        assert_eq!(request.email, "admin@example.com");
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn test_from_form_rejects_blank_fields() {
        assert_eq!(
            LoginRequest::from_form("   ", "pw"),
            Err(CredentialsError::MissingEmail)
        );
        assert_eq!(
            LoginRequest::from_form("a@b.c", ""),
            Err(CredentialsError::MissingPassword)
        );
    }

    #[test]
    fn test_login_response_into_session() {
        let body = r#"{
            "access_token": "abc.def.ghi",
            "token_type": "bearer",
            "user": {"email": "viewer@example.com", "full_name": "Vera Viewer", "role": "viewer"}
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session();

        assert_eq!(session.bearer(), "Bearer abc.def.ghi");
        let profile = session.profile().unwrap();
        assert_eq!(profile.display_name(), "Vera Viewer");
        assert_eq!(profile.role, "viewer");
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"access_token": "t"}"#).unwrap();
        assert_eq!(response.token_type, "bearer");
        assert!(response.into_session().profile().is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = UserProfile {
            email: "ops@example.com".to_string(),
            full_name: String::new(),
            role: "admin".to_string(),
        };
        assert_eq!(profile.display_name(), "ops@example.com");
    }
}
