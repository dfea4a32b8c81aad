use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// `message` (or `error`) field of the response body, if any.
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The operation needs the signed-in user's id and there is none.
    #[error("User ID not found. Please log in again.")]
    NotSignedIn,
}

impl ApiError {
    /// Build a status error from the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(key)?.as_str().map(str::to_string))
            })
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    /// The text a slice should show, or `None` to fall back to its default message.
    pub fn reason(&self) -> Option<String> {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NotSignedIn => Some(self.to_string()),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_prefers_server_message() {
        let err = ApiError::from_status(409, r#"{"message": "Email already registered"}"#);
        assert_eq!(err.reason().as_deref(), Some("Email already registered"));

        let err = ApiError::from_status(400, r#"{"error": "Bad breed"}"#);
        assert_eq!(err.reason().as_deref(), Some("Bad breed"));
    }

    #[test]
    fn test_reason_falls_back_to_default() {
        assert_eq!(ApiError::from_status(500, "<html>oops</html>").reason(), None);
        assert_eq!(ApiError::from_status(500, r#"{"message": ""}"#).reason(), None);
        assert_eq!(ApiError::Network("refused".into()).reason(), None);
        assert_eq!(
            ApiError::NotSignedIn.reason().as_deref(),
            Some("User ID not found. Please log in again.")
        );
    }
}
