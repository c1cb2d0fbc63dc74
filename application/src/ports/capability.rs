//! Capability fault type shared by the collaborator ports.

use thiserror::Error;

/// A fault raised by a capability collaborator during invocation.
///
/// The display text ends up verbatim in the user-visible error event, so
/// every variant carries a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityFault {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_keeps_message() {
        let fault = CapabilityFault::Connection("timeout".to_string());
        assert_eq!(fault.to_string(), "Connection error: timeout");
    }

    #[test]
    fn test_other_is_bare_message() {
        let fault = CapabilityFault::Other("boom".to_string());
        assert_eq!(fault.to_string(), "boom");
    }
}
