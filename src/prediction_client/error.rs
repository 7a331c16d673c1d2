use std::fmt;

pub const FALLBACK_TRANSPORT_MESSAGE: &str = "Failed to get prediction. Is the backend running?";

pub const SCHEMA_MISMATCH_MESSAGE: &str = "Backend returned an unexpected format. Please make sure you have restarted the backend server to apply the latest changes.";

#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The request never produced a response.
    Transport(String),
    /// Response status outside 2xx. The body is not interpreted.
    HttpStatus(u16),
    /// 2xx response whose body is not JSON.
    InvalidBody(String),
    /// JSON body without the expected `actions` and `caption` fields.
    SchemaMismatch { detail: String, body: String },
}

impl PredictError {
    /// Text shown to the user in the alert window.
    pub fn alert_message(&self) -> String {
        match self {
            PredictError::Transport(message) if message.trim().is_empty() => {
                FALLBACK_TRANSPORT_MESSAGE.to_string()
            }
            PredictError::SchemaMismatch { .. } => SCHEMA_MISMATCH_MESSAGE.to_string(),
            error => error.to_string(),
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Transport(message) => write!(f, "{}", message),
            PredictError::HttpStatus(status) => write!(f, "HTTP error! status: {}", status),
            PredictError::InvalidBody(message) => {
                write!(f, "Response body is not valid JSON: {}", message)
            }
            PredictError::SchemaMismatch { detail, body } => {
                write!(f, "Unexpected response format ({}): {}", detail, body)
            }
        }
    }
}

impl std::error::Error for PredictError {}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => PredictError::HttpStatus(status.as_u16()),
            None => PredictError::Transport(err.to_string()),
        }
    }
}
