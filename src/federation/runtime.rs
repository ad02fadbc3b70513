//! Federation runtime trait, locators and the process-global registry.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use super::module::RemoteModule;

/// Errors a federation runtime reports when a remote module can't be loaded.
#[derive(Debug, Error)]
pub enum FederationError {
    /// The module path names a remote the runtime doesn't know.
    #[error("Unknown remote '{remote}'")]
    UnknownRemote { remote: String },

    /// The module path isn't of the form `<remote>/<expose>`.
    #[error("Invalid module path '{path}': expected '<remote>/<expose>'")]
    InvalidPath { path: String },

    /// The remote's manifest has no entry for the requested expose.
    #[error("Remote '{remote}' does not expose '{expose}'")]
    ExposeNotFound { remote: String, expose: String },

    /// The manifest could not be fetched.
    #[error("Failed to fetch manifest from '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status.
    #[error("Manifest request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The manifest body could not be decoded or converted.
    #[error("Invalid manifest from '{url}': {message}")]
    Manifest { url: String, message: String },

    /// Any other runtime failure.
    #[error("{0}")]
    Other(String),
}

/// A registry capable of fetching modules exposed by remotes.
#[async_trait]
pub trait FederationRuntime: Send + Sync {
    /// Name of this runtime instance, for logging.
    fn name(&self) -> &str;

    /// Fetch the module exposed at `module_path` (e.g. `remoteToast/Toast`).
    async fn load_remote(&self, module_path: &str) -> Result<RemoteModule, FederationError>;
}

/// Provider that discovers a federation runtime instance.
///
/// Returning `None` means no runtime is available; the loader treats that
/// as a failed attempt.
pub trait RuntimeLocator: Send + Sync {
    fn locate(&self) -> Option<Arc<dyn FederationRuntime>>;
}

impl<F> RuntimeLocator for F
where
    F: Fn() -> Option<Arc<dyn FederationRuntime>> + Send + Sync,
{
    fn locate(&self) -> Option<Arc<dyn FederationRuntime>> {
        self()
    }
}

static INSTANCES: RwLock<Vec<Arc<dyn FederationRuntime>>> = parking_lot::const_rwlock(Vec::new());

/// Register a runtime in the process-global instance list.
///
/// The host does this once at startup; [`GlobalLocator`] hands out the
/// first registered instance.
pub fn register_instance(runtime: Arc<dyn FederationRuntime>) {
    tracing::debug!(runtime = runtime.name(), "Registered federation runtime instance");
    INSTANCES.write().push(runtime);
}

/// Remove every registered runtime.
pub fn clear_instances() {
    INSTANCES.write().clear();
}

/// Number of registered runtimes.
pub fn instance_count() -> usize {
    INSTANCES.read().len()
}

/// Locator backed by the process-global instance list.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLocator;

impl RuntimeLocator for GlobalLocator {
    fn locate(&self) -> Option<Arc<dyn FederationRuntime>> {
        INSTANCES.read().first().cloned()
    }
}

/// Locator that always returns the same instance (or none).
#[derive(Clone, Default)]
pub struct FixedLocator {
    runtime: Option<Arc<dyn FederationRuntime>>,
}

impl FixedLocator {
    pub fn new(runtime: Arc<dyn FederationRuntime>) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }

    /// A locator that never finds a runtime.
    pub fn none() -> Self {
        Self { runtime: None }
    }
}

impl RuntimeLocator for FixedLocator {
    fn locate(&self) -> Option<Arc<dyn FederationRuntime>> {
        self.runtime.clone()
    }
}
