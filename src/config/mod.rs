//! Configuration loading.
//!
//! Settings live in `~/.config/remote-toast/config.toml`; a missing file
//! means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoaderConfig, ServerConfig, ToastConfig};
