use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Not authenticated: no access token found")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Record not found")]
    NotFound,

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Build the error for a non-2xx response, picking up an optional
    /// `message` field from a JSON body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty());
        GatewayError::Status { status, message }
    }

    /// Text shown to the user in a notification
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Status {
                message: Some(m), ..
            } => m.clone(),
            other => other.to_string(),
        }
    }
}
