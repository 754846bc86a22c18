//! Validation and decode error types.

use thiserror::Error;

/// A request rejected before any network call.
///
/// Carries the path of the offending element (e.g. `routes[2].utterances[5]`)
/// and a human-readable reason. Validation reports the first violation under
/// a fixed traversal order and stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field_path}: {reason}")]
pub struct ValidationFailure {
    /// Path locating the offending element within the request.
    pub field_path: String,
    /// Why that element was rejected.
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while decoding a service response that was valid JSON but
/// violated the expected result schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{path}: route index {index} out of range (request has {route_count} routes)")]
    IndexOutOfRange {
        path: String,
        index: u64,
        route_count: usize,
    },

    #[error("{path}: unknown filter type {found:?} (expected \"Filter\" or \"ConjunctedFilter\")")]
    UnknownFilterType { path: String, found: String },

    #[error("{path}: unknown operator {found:?}")]
    UnknownOperator { path: String, found: String },

    #[error("{path}: unknown conjunction {found:?} (expected \"AND\" or \"OR\")")]
    UnknownConjunction { path: String, found: String },

    #[error("{path}: missing required key {key:?}")]
    MissingKey { path: String, key: &'static str },

    #[error("{path}: expected {expected}")]
    WrongShape { path: String, expected: &'static str },

    #[error("filter tree exceeds maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("result string is not valid JSON: {detail}")]
    BadEmbeddedJson { detail: String },
}

/// Convenience alias for decode results.
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_display() {
        let f = ValidationFailure::new("routes[2].name", "too long (70 chars > 65 chars)");
        assert_eq!(
            f.to_string(),
            "routes[2].name: too long (70 chars > 65 chars)"
        );
    }

    #[test]
    fn index_out_of_range_display() {
        let e = DecodeError::IndexOutOfRange {
            path: "result[1]".into(),
            index: 5,
            route_count: 3,
        };
        assert!(e.to_string().contains("index 5"));
        assert!(e.to_string().contains("3 routes"));
    }

    #[test]
    fn unknown_filter_type_display() {
        let e = DecodeError::UnknownFilterType {
            path: "result".into(),
            found: "Bogus".into(),
        };
        assert!(e.to_string().contains("\"Bogus\""));
    }
}
