//! # Transport Error Taxonomy
//!
//! A single structured error type for everything that can go wrong between
//! the client and the backend. Callers branch on the variant, never on
//! message substrings; the user-facing strings live in the `Display`
//! implementations and match what the screens show.
//!
//! ## Error Categories
//!
//! - **Timeout**: the 30-second request deadline elapsed
//! - **Network**: connection-level failure (DNS, refused, dropped)
//! - **Api**: the backend answered with a non-success status; carries the
//!   HTTP status and the message extracted from the response body
//! - **Parse**: the response body could not be decoded into the expected shape
//! - **Unexpected**: anything the transport layer could not classify

use thiserror::Error;

/// Errors produced by the HTTP transport and surfaced to every caller of
/// the API façade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request hit the fixed 30-second deadline.
    #[error("Request timeout. Please check your internet connection and try again.")]
    Timeout,

    /// Connection-level failure before any HTTP response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the request. `message` is the body's
    /// `message` field, else its `error` field, else a generic string.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response arrived but did not decode into the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Anything the transport could not classify.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// True when the backend answered 401; screens route this to the
    /// force-logout remediation path instead of showing a plain alert.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }

    /// The HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the façade and orchestrator.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Api {
            status: 401,
            message: "Token expired".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));

        assert!(!ApiError::Timeout.is_unauthorized());
        assert_eq!(ApiError::Timeout.status(), None);
    }

    #[test]
    fn test_api_error_displays_backend_message() {
        let err = ApiError::Api {
            status: 400,
            message: "Invalid referral code".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid referral code");
    }
}
