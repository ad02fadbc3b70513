//! The remote side: a server publishing the toast manifest.

pub mod server;

use std::collections::BTreeMap;

use crate::federation::{ComponentDescriptor, ExportDescriptor, ExposedModule, RemoteManifest};

/// Name of the toast remote.
pub const TOAST_REMOTE_NAME: &str = "remoteToast";

/// Manifest published by `remote-toast serve`: `./Toast` with a default
/// component export and a version string.
pub fn toast_manifest() -> RemoteManifest {
    let mut exports = BTreeMap::new();
    exports.insert(
        "default".to_string(),
        ExportDescriptor::Component(ComponentDescriptor {
            title: "Toast".to_string(),
            accent: None,
        }),
    );
    exports.insert(
        "version".to_string(),
        ExportDescriptor::Value {
            value: serde_json::Value::String(env!("CARGO_PKG_VERSION").to_string()),
        },
    );

    let mut exposes = BTreeMap::new();
    exposes.insert(
        "./Toast".to_string(),
        ExposedModule {
            callable: None,
            exports,
        },
    );

    RemoteManifest {
        name: TOAST_REMOTE_NAME.to_string(),
        exposes,
    }
}
