//! Signalled failure: a request that always fails with a named error case.

use thiserror::Error;

/// Failure cases for the simulated network request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("not connected")]
    NotConnected,
    #[error("request timed out")]
    Timeout,
}

impl NetworkError {
    /// The case name as shown in the tour output (`notConnected`, `timeout`).
    pub fn name(self) -> &'static str {
        match self {
            NetworkError::NotConnected => "notConnected",
            NetworkError::Timeout      => "timeout",
        }
    }
}

/// Always fails with [`NetworkError::NotConnected`].
pub fn perform_network_request() -> Result<(), NetworkError> {
    Err(NetworkError::NotConnected)
}

/// Body of the "Error Handling" section.
pub fn error_lines() -> Vec<String> {
    match perform_network_request() {
        Ok(()) => Vec::new(),
        Err(error) => {
            tracing::debug!(%error, "network request failed");
            vec![format!("Error occurred: {}", error.name())]
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
