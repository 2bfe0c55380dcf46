//! Fetch error taxonomy
//!
//! Every failure a fetch can encounter is converted into a `FetchError`
//! carried inside a `TypedValue::Error`. Nothing in the fetch path ever
//! propagates an `Err` or panics across the boundary to display code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchErrorKind {
    /// Upstream webserver unreachable
    ConnectionRefused,
    /// Upstream did not respond within the request timeout
    Timeout,
    /// Other network-layer failure (DNS, reset, protocol error)
    Transport,
    /// Upstream has no value for the requested variable name
    NotFound,
    /// Upstream returned a blank body
    EmptyResponse,
    /// Body parsed as a number but the number was NaN
    InvalidNumeric,
    /// Caller supplied an unusable variable name
    InvalidInput,
}

/// A failed fetch, as data.
///
/// The message text per kind is distinguishable so that callers (and
/// tests) can tell failure causes apart without matching on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connection_refused() -> Self {
        Self::new(FetchErrorKind::ConnectionRefused, "Connection refused.")
    }

    pub fn timeout() -> Self {
        Self::new(FetchErrorKind::Timeout, "Timeout.")
    }

    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::new(FetchErrorKind::Transport, format!("Transport error: {cause}"))
    }

    pub fn not_found(variable: &str) -> Self {
        Self::new(
            FetchErrorKind::NotFound,
            format!("Var '{variable}' not found"),
        )
    }

    pub fn empty_response() -> Self {
        Self::new(FetchErrorKind::EmptyResponse, "Empty value received")
    }

    pub fn invalid_numeric() -> Self {
        Self::new(FetchErrorKind::InvalidNumeric, "Received NaN")
    }

    pub fn invalid_input(variable: &str) -> Self {
        Self::new(
            FetchErrorKind::InvalidInput,
            format!("Invalid variable name '{variable}'"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_network_causes() {
        let refused = FetchError::connection_refused();
        let timeout = FetchError::timeout();
        let transport = FetchError::transport("connection reset by peer");

        assert_ne!(refused.message, timeout.message);
        assert_ne!(refused.message, transport.message);
        assert_ne!(timeout.message, transport.message);
        assert!(transport.message.contains("connection reset by peer"));
    }

    #[test]
    fn test_not_found_names_the_variable() {
        let err = FetchError::not_found("CORE_TEMP");
        assert_eq!(err.kind, FetchErrorKind::NotFound);
        assert!(err.message.contains("CORE_TEMP"));
    }

    #[test]
    fn test_display_uses_message() {
        let err = FetchError::timeout();
        assert_eq!(err.to_string(), "Timeout.");
    }
}
