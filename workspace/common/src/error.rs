use serde_json::Value;
use thiserror::Error;

/// Error kinds surfaced by every call to the analytics API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("HTTP error: {status}")]
    Http { status: u16, body: Option<Value> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Encode(String),
    #[error("Browser API error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Classifies a non-2xx status, keeping the parsed error payload if there was one.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Http { status, body }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Human readable message for the UI, taken from the server payload when
    /// it has a recognised shape.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Http { body: Some(body), .. } => {
                extract_error_message(body).unwrap_or_else(|| fallback.to_string())
            }
            _ => fallback.to_string(),
        }
    }
}

/// Looks for `detail`, then `message`. A string is used as is; an object
/// contributes its own `message` field. Anything else is unrecognised.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let candidate = ["detail", "message"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|value| is_present(value))?;

    match candidate {
        Value::String(message) => Some(message.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_status_maps_401_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert!(ApiError::from_status(401, Some(json!({"detail": "x"}))).is_unauthorized());
        assert!(!ApiError::from_status(500, None).is_unauthorized());
    }

    #[test]
    fn test_extract_detail_string() {
        let body = json!({"detail": "Only CSV files are allowed"});
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Only CSV files are allowed")
        );
    }

    #[test]
    fn test_extract_falls_back_to_message() {
        let body = json!({"detail": null, "message": "Multiple errors occurred"});
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Multiple errors occurred")
        );

        let body = json!({"detail": "", "message": "Second choice"});
        assert_eq!(extract_error_message(&body).as_deref(), Some("Second choice"));
    }

    #[test]
    fn test_extract_nested_message_object() {
        let body = json!({"detail": {"message": "Row 3 is missing order_id"}});
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Row 3 is missing order_id")
        );
    }

    #[test]
    fn test_unrecognised_shapes_use_fallback() {
        let validation = ApiError::Http {
            status: 422,
            body: Some(json!({"detail": [{"loc": ["body", "file"], "msg": "field required"}]})),
        };
        assert_eq!(validation.user_message("Failed to upload file"), "Failed to upload file");

        let empty = ApiError::Http { status: 500, body: None };
        assert_eq!(empty.user_message("Failed to upload file"), "Failed to upload file");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.user_message("Failed to upload file"), "Failed to upload file");
    }

    #[test]
    fn test_user_message_reads_http_body() {
        let err = ApiError::from_status(413, Some(json!({"detail": "File size exceeds 5.0MB limit"})));
        assert_eq!(err.user_message("Failed to upload file"), "File size exceeds 5.0MB limit");
    }
}
