use std::fmt;

use thiserror::Error;

/// Boxed cause carried by a failed SRV lookup.
pub type LookupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Rejected command-line input. Raised before any network I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Empty address specified.")]
    EmptyAddress,
    #[error("Invalid port specified.")]
    InvalidPort,
    #[error("Invalid timeout specified.")]
    InvalidTimeout,
    #[error("Invalid lookup timeout specified.")]
    InvalidLookupTimeout,
}

/// A single SRV target that did not accept a connection.
#[derive(Debug, Clone)]
pub struct ProbeFailure {
    pub target: String,
    pub reason: String,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.reason)
    }
}

/// Terminal failure of one resolution attempt. Every variant keeps the
/// originally requested host.
#[derive(Debug, Error)]
pub enum ResolveError {
    // `cause` is rendered in the message and is not exposed as `source`.
    #[error("Failed to lookup '{host}'. Error: {cause}.")]
    LookupFailed { host: String, cause: LookupError },
    #[error("Failed to lookup '{host}'. No SRV records returned.")]
    NoRecordsFound { host: String },
    #[error("Failed to resolve '{host}'. No alternatives found.")]
    NoReachableAlternative {
        host: String,
        attempts: Vec<ProbeFailure>,
    },
}

impl ResolveError {
    pub fn host(&self) -> &str {
        match self {
            ResolveError::LookupFailed { host, .. }
            | ResolveError::NoRecordsFound { host }
            | ResolveError::NoReachableAlternative { host, .. } => host,
        }
    }
}
