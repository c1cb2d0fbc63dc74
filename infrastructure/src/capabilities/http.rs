//! Shared HTTP client construction and error mapping

use router_application::CapabilityFault;
use std::time::Duration;

/// User-Agent sent with every capability request
pub const USER_AGENT: &str = concat!("QueryRouter/", env!("CARGO_PKG_VERSION"));

/// Build a `reqwest::Client` with the given request timeout.
///
/// Clients are built once at startup and reused for every request.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Map a transport-level `reqwest` error onto a capability fault
pub(crate) fn transport_fault(error: reqwest::Error) -> CapabilityFault {
    if error.is_timeout() {
        CapabilityFault::Timeout(error.to_string())
    } else if error.is_connect() {
        CapabilityFault::Connection(error.to_string())
    } else if error.is_decode() {
        CapabilityFault::InvalidResponse(error.to_string())
    } else {
        CapabilityFault::RequestFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_user_agent_names_product() {
        assert!(USER_AGENT.starts_with("QueryRouter/"));
    }
}
