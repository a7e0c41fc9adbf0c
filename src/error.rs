use std::fmt;

use crate::idmc::ReconcilePhase;

/// Custom error type for IDMC operations
#[derive(Debug)]
pub enum IdmcError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a status other than the one the call expects
    Api { status: u16, message: String },
    /// Response body is missing a required field or value
    MalformedResponse(String),
    /// Login host, username or password not found in any source
    CredentialsNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// A role privilege update failed part way through
    Reconciliation {
        phase: ReconcilePhase,
        source: Box<IdmcError>,
    },
}

impl IdmcError {
    /// HTTP status carried by this error, looking through reconciliation wrappers
    pub fn status(&self) -> Option<u16> {
        match self {
            IdmcError::Api { status, .. } => Some(*status),
            IdmcError::Reconciliation { source, .. } => source.status(),
            _ => None,
        }
    }
}

impl fmt::Display for IdmcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdmcError::Http(e) => write!(f, "HTTP request failed: {}", e),
            IdmcError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            IdmcError::MalformedResponse(msg) => write!(f, "Malformed API response: {}", msg),
            IdmcError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            IdmcError::Json(msg) => write!(f, "JSON error: {}", msg),
            IdmcError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IdmcError::Reconciliation { phase, source } => match phase {
                ReconcilePhase::Add => {
                    write!(f, "Failed to add privileges to role: {}", source)
                }
                ReconcilePhase::Remove => write!(
                    f,
                    "Failed to remove privileges from role (additions were already applied): {}",
                    source
                ),
            },
        }
    }
}

impl std::error::Error for IdmcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdmcError::Http(e) => Some(e),
            IdmcError::Reconciliation { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IdmcError {
    fn from(err: reqwest::Error) -> Self {
        IdmcError::Http(err)
    }
}

impl From<serde_json::Error> for IdmcError {
    fn from(err: serde_json::Error) -> Self {
        IdmcError::Json(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for IdmcError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        IdmcError::Config(format!("invalid header value: {}", err))
    }
}

/// Result type alias for IDMC operations
pub type Result<T> = std::result::Result<T, IdmcError>;
