use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::federation::RemoteEndpoint;
use crate::loader::{
    LoadRequest, RequestError, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_remotes")]
    pub remotes: Vec<RemoteEndpoint>,
}

/// Retry and timeout policy for remote component loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Per-attempt timeout in milliseconds (default: 10000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Additional attempts after the first (default: 2).
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    /// Delay between attempts in milliseconds (default: 1000).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

/// How the host presents the remote toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastConfig {
    /// How long a loaded toast stays visible, in milliseconds (default: 5000).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Show a loading indicator instead of nothing while loading (default: false).
    #[serde(default)]
    pub show_loading_state: bool,
    /// Text of the loading indicator.
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
}

/// Remote-side server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address for `remote-toast serve` (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_retry_count() -> u32 {
    DEFAULT_RETRY_COUNT
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

fn default_duration_ms() -> u64 {
    5000
}

fn default_loading_message() -> String {
    "Loading toast...".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_remotes() -> Vec<RemoteEndpoint> {
    vec![RemoteEndpoint {
        name: "remoteToast".to_string(),
        manifest_url: "http://127.0.0.1:3001/mf-manifest.json".to_string(),
    }]
}

impl LoaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Build a request for `module_path` under this policy.
    pub fn request_for(&self, module_path: &str) -> Result<LoadRequest, RequestError> {
        LoadRequest::new(
            module_path,
            self.timeout(),
            self.retry_count,
            self.retry_delay(),
        )
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            show_loading_state: false,
            loading_message: default_loading_message(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            toast: ToastConfig::default(),
            server: ServerConfig::default(),
            remotes: default_remotes(),
        }
    }
}
