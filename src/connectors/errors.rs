use thiserror::Error;

/// Errors that can occur while talking to the payment processor.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The processor rejected the charge (declined card, bad token).
    #[error("{0}")]
    Declined(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
