//! Errors raised while performing a call.
//!
//! Generated operations never return these directly; [`Client::call`]
//! renders them into the `error` field of a failed envelope.
//!
//! [`Client::call`]: crate::Client::call

use thiserror::Error;

use crate::Method;

/// A failure inside a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    /// Raised by mock transports when no handler matches.
    #[error("no handler registered for {method} {path}")]
    Unmatched { method: Method, path: String },
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Why a call produced a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// A placeholder had no value. Raised before the transport is used.
    #[error("missing path parameter '{param}' for {uri}")]
    MissingPathParam { param: String, uri: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl CallError {
    pub fn is_missing_path_param(&self) -> bool {
        matches!(self, CallError::MissingPathParam { .. })
    }

    /// Returns true if a mock transport had no handler for the request.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, CallError::Transport(TransportError::Unmatched { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = CallError::Status {
            status: 404,
            detail: Some("{\"message\":\"not found\"}".into()),
        };
        assert_eq!(err.to_string(), "HTTP 404: {\"message\":\"not found\"}");

        let bare = CallError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "HTTP 500");
    }

    #[test]
    fn test_unmatched_is_distinct() {
        let err = CallError::from(TransportError::Unmatched {
            method: Method::Get,
            path: "/phones".into(),
        });
        assert!(err.is_unmatched());
        assert!(!err.is_missing_path_param());
        assert_eq!(err.to_string(), "no handler registered for GET /phones");
    }
}
