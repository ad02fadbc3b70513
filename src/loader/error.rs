//! Error types for remote component loading.

use thiserror::Error;

use crate::federation::FederationError;

/// No export of a loaded module was an invocable component.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No valid component found in module. Expected a function, got: {observed}")]
pub struct ExtractionError {
    /// Runtime type actually observed.
    pub observed: String,
}

/// Why a single load attempt failed.
///
/// Every kind is retried until attempts run out; the display text of the
/// last one becomes the terminal error message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// No federation runtime instance could be located.
    #[error("No federation runtime instance found")]
    NoRuntimeFound,

    /// The runtime's load call failed.
    #[error("{reason}")]
    RequestFailed { reason: String },

    /// The timeout won the race against the load call.
    #[error("{message}")]
    TimedOut { message: String },

    /// The module loaded but exposes no usable component.
    #[error(transparent)]
    InvalidExport(#[from] ExtractionError),
}

impl LoadError {
    /// Stable name of the failure kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::NoRuntimeFound => "no_runtime_found",
            LoadError::RequestFailed { .. } => "request_failed",
            LoadError::TimedOut { .. } => "timed_out",
            LoadError::InvalidExport(_) => "invalid_export",
        }
    }
}

impl From<FederationError> for LoadError {
    fn from(err: FederationError) -> Self {
        LoadError::RequestFailed {
            reason: err.to_string(),
        }
    }
}
