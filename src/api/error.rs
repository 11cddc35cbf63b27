//! Fetch error types

use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the connection failed
    #[error("network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    /// Server answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Body was not the JSON shape we expected
    #[error("malformed response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl FetchError {
    pub fn network(endpoint: &str, message: impl Into<String>) -> Self {
        Self::Network {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Parse { endpoint, .. } => endpoint,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
