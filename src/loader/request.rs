//! Parameters of one load sequence.

use std::time::Duration;

use thiserror::Error;

/// Module path of the remote toast.
pub const TOAST_MODULE_PATH: &str = "remoteToast/Toast";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RETRY_COUNT: u32 = 2;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Module path must not be empty")]
    EmptyModulePath,

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}

/// Immutable parameters of a load sequence.
///
/// Any change (path, timeout, retry count, retry delay, export name) means
/// a new request and a sequence restarted from attempt 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    module_path: String,
    timeout: Duration,
    retry_count: u32,
    retry_delay: Duration,
    export_name: Option<String>,
}

impl LoadRequest {
    pub fn new(
        module_path: impl Into<String>,
        timeout: Duration,
        retry_count: u32,
        retry_delay: Duration,
    ) -> Result<Self, RequestError> {
        let module_path = module_path.into();
        if module_path.trim().is_empty() {
            return Err(RequestError::EmptyModulePath);
        }
        if timeout.is_zero() {
            return Err(RequestError::ZeroTimeout);
        }

        Ok(Self {
            module_path,
            timeout,
            retry_count,
            retry_delay,
            export_name: None,
        })
    }

    /// Request with the default timeout and retry policy.
    pub fn with_defaults(module_path: impl Into<String>) -> Result<Self, RequestError> {
        Self::new(
            module_path,
            Duration::from_millis(DEFAULT_TIMEOUT_MS),
            DEFAULT_RETRY_COUNT,
            Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        )
    }

    /// Name the export to try before the conventional ones.
    pub fn with_export(mut self, name: impl Into<String>) -> Self {
        self.export_name = Some(name.into());
        self
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Bound on a single attempt.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Additional attempts after the first.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn export_name(&self) -> Option<&str> {
        self.export_name.as_deref()
    }

    /// Total attempts the sequence may make.
    pub fn max_attempts(&self) -> u32 {
        self.retry_count.saturating_add(1)
    }
}
