//! Client error taxonomy.
//!
//! Four distinct failure families, surfaced as one enum: validation (local,
//! pre-flight), transport (the request never completed), protocol status
//! (the service answered non-2xx), and decode/malformed-response (the
//! service answered 2xx but the body violated the contract).

use thiserror::Error;

use sema_protocol::{DecodeError, ValidationFailure};

/// Non-2xx statuses the service is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    RateLimited,
    Internal,
    Other,
}

impl StatusKind {
    /// Map an HTTP status code to its kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            429 => Self::RateLimited,
            500 => Self::Internal,
            _ => Self::Other,
        }
    }
}

/// Errors surfaced by the client facade.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request rejected locally; no network call was made.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationFailure),

    /// The request never completed (connect failure, timeout, DNS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The body was valid JSON but violated the result schema.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The service returned a non-2xx status.
    #[error("service returned {status}: {message}")]
    Status {
        kind: StatusKind,
        status: u16,
        message: String,
    },

    /// Client constructed without an API key.
    #[error("an API key is required")]
    MissingApiKey,
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_kind_mapping() {
        assert_eq!(StatusKind::from_status(400), StatusKind::BadRequest);
        assert_eq!(StatusKind::from_status(401), StatusKind::Unauthorized);
        assert_eq!(StatusKind::from_status(402), StatusKind::PaymentRequired);
        assert_eq!(StatusKind::from_status(429), StatusKind::RateLimited);
        assert_eq!(StatusKind::from_status(500), StatusKind::Internal);
        assert_eq!(StatusKind::from_status(503), StatusKind::Other);
    }

    #[test]
    fn validation_failure_converts() {
        let failure = ValidationFailure::new("query", "too long");
        let err: ClientError = failure.into();
        assert!(err.to_string().contains("query: too long"));
    }

    #[test]
    fn status_error_display() {
        let err = ClientError::Status {
            kind: StatusKind::RateLimited,
            status: 429,
            message: "rate limit exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "service returned 429: rate limit exceeded"
        );
    }
}
