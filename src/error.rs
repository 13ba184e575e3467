use thiserror::Error;

/// Errors raised by the client while talking to the backend or touching disk.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid year: {0:?}")]
    InvalidYear(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build a status error from a non-success response.
    pub fn status(status: reqwest::StatusCode, url: &reqwest::Url) -> Self {
        ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }
    }

    /// Whether the failure happened on the wire rather than in local state.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Status { .. } | ClientError::Http(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { status, .. } => format!("Server returned HTTP {}", status),
            ClientError::Http(e) if e.is_decode() => "Malformed response from server".to_string(),
            ClientError::Http(e) => format!("Network error: {}", e),
            ClientError::Url(e) => format!("Invalid address: {}", e),
            ClientError::InvalidYear(raw) => format!("Year must be a number, got \"{}\"", raw),
            ClientError::Config(msg) => format!("Configuration error: {}", msg),
            ClientError::Io(e) => format!("File system error: {}", e),
            ClientError::Serialization(e) => format!("Data format error: {}", e),
        }
    }
}
