/*
[INPUT]:  Error sources (validation, transport, remote rejection, decoding, config)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the currency.com adapter
#[derive(Error, Debug)]
pub enum CurrencyComError {
    /// A required request field was missing, empty or out of range.
    /// Raised before any network call.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The HTTP call could not be completed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange answered with HTTP status >= 400.
    /// `body` is the raw response text, reject reason included.
    #[error("Remote rejected request ({status} {status_text}): {body}")]
    RemoteRejected {
        status: u16,
        status_text: String,
        body: String,
    },

    /// HTTP status < 400 but the body did not match the expected shape
    #[error("Malformed response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// A signed endpoint was called on a client without credentials
    #[error("Signed endpoint requires API credentials")]
    MissingCredentials,

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HMAC key could not be initialised
    #[error("Signing failed: {0}")]
    Signing(#[from] hmac::digest::InvalidLength),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CurrencyComError {
    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            CurrencyComError::Transport(_) => true,
            CurrencyComError::RemoteRejected { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// HTTP status of a remote rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CurrencyComError::RemoteRejected { status, .. } => StatusCode::from_u16(*status).ok(),
            CurrencyComError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the failure was caused by the request itself (4xx or local validation)
    pub fn is_client_error(&self) -> bool {
        match self {
            CurrencyComError::InvalidParameters(_) | CurrencyComError::MissingCredentials => true,
            CurrencyComError::RemoteRejected { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Create a remote rejection from a status code and raw body
    pub fn remote_rejected(status: StatusCode, body: impl Into<String>) -> Self {
        CurrencyComError::RemoteRejected {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CurrencyComError::InvalidParameters(message.into())
    }
}

/// Result type alias for currency.com operations
pub type Result<T> = std::result::Result<T, CurrencyComError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let throttled = CurrencyComError::remote_rejected(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(throttled.is_retryable());

        let server = CurrencyComError::remote_rejected(StatusCode::BAD_GATEWAY, "");
        assert!(server.is_retryable());

        let not_found = CurrencyComError::remote_rejected(StatusCode::NOT_FOUND, "{}");
        assert!(!not_found.is_retryable());
        assert!(!CurrencyComError::invalid("symbol").is_retryable());
    }

    #[test]
    fn test_error_is_client_error() {
        assert!(CurrencyComError::MissingCredentials.is_client_error());
        assert!(CurrencyComError::invalid("symbol").is_client_error());
        assert!(CurrencyComError::remote_rejected(StatusCode::BAD_REQUEST, "").is_client_error());
        assert!(!CurrencyComError::remote_rejected(StatusCode::SERVICE_UNAVAILABLE, "").is_client_error());
    }

    #[test]
    fn test_remote_rejected_creation() {
        let err = CurrencyComError::remote_rejected(
            StatusCode::NOT_FOUND,
            r#"{"code":"ORDER_NOT_FOUND"}"#,
        );
        match &err {
            CurrencyComError::RemoteRejected {
                status,
                status_text,
                body,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(status_text, "Not Found");
                assert_eq!(body, r#"{"code":"ORDER_NOT_FOUND"}"#);
            }
            _ => panic!("Expected RemoteRejected error variant"),
        }
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
