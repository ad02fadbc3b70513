//! Shared test utilities and fake federation runtimes.

#![allow(dead_code, unused_imports)]

pub mod fake_runtime;

use std::path::PathBuf;
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use remote_toast::federation::{ComponentRef, RemoteComponent, ToastProps};
use remote_toast::loader::LoadRequest;
use tempfile::TempDir;

/// Component that draws nothing; identified by name.
pub struct NamedComponent(pub &'static str);

impl RemoteComponent for NamedComponent {
    fn name(&self) -> &str {
        self.0
    }

    fn render(&self, _props: &ToastProps, _area: Rect, _buf: &mut Buffer) {}
}

pub fn component(name: &'static str) -> ComponentRef {
    ComponentRef::new(NamedComponent(name))
}

/// Request with millisecond parameters.
pub fn request(module_path: &str, timeout_ms: u64, retry_count: u32, retry_delay_ms: u64) -> LoadRequest {
    LoadRequest::new(
        module_path,
        Duration::from_millis(timeout_ms),
        retry_count,
        Duration::from_millis(retry_delay_ms),
    )
    .expect("valid request")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
