//! Manifest a remote publishes to describe what it exposes.
//!
//! ```json
//! {
//!   "name": "remoteToast",
//!   "exposes": {
//!     "./Toast": {
//!       "exports": {
//!         "default": { "kind": "component", "title": "Toast", "accent": "green" },
//!         "version": { "kind": "value", "value": "1.0.0" }
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::module::{ComponentRef, Export, RemoteModule};
use super::template::TemplateToast;

/// Errors converting a manifest entry into a module.
#[derive(Debug, Error, PartialEq)]
pub enum ManifestError {
    #[error("Invalid accent color '{value}' for component '{component}'")]
    InvalidAccent { component: String, value: String },
}

/// Root of a remote's manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteManifest {
    /// Remote name (the prefix of module paths, e.g. `remoteToast`).
    pub name: String,
    /// Exposed modules keyed by expose path (e.g. `./Toast`).
    #[serde(default)]
    pub exposes: BTreeMap<String, ExposedModule>,
}

impl RemoteManifest {
    pub fn expose(&self, key: &str) -> Option<&ExposedModule> {
        self.exposes.get(key)
    }
}

/// One exposed module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExposedModule {
    /// Set when the module itself is invocable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callable: Option<ComponentDescriptor>,
    /// Named exports.
    #[serde(default)]
    pub exports: BTreeMap<String, ExportDescriptor>,
}

impl ExposedModule {
    /// Materialize the module the loader will extract a component from.
    pub fn to_module(&self) -> Result<RemoteModule, ManifestError> {
        let mut module = match &self.callable {
            Some(descriptor) => RemoteModule::callable(descriptor.to_component()?),
            None => RemoteModule::new(),
        };

        for (name, export) in &self.exports {
            let export = match export {
                ExportDescriptor::Component(descriptor) => {
                    Export::Component(descriptor.to_component()?)
                }
                ExportDescriptor::Value { value } => Export::Value(value.clone()),
            };
            module = module.with_export(name.clone(), export);
        }

        Ok(module)
    }
}

/// A single export as described in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportDescriptor {
    Component(ComponentDescriptor),
    Value { value: serde_json::Value },
}

/// Declarative description of a toast component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDescriptor {
    /// Title drawn in the toast border.
    pub title: String,
    /// Border color, by name (`green`) or hex (`#22c55e`). Defaults to the
    /// toast kind's color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ComponentDescriptor {
    pub fn to_component(&self) -> Result<ComponentRef, ManifestError> {
        let accent = match &self.accent {
            Some(value) => Some(Color::from_str(value).map_err(|_| {
                ManifestError::InvalidAccent {
                    component: self.title.clone(),
                    value: value.clone(),
                }
            })?),
            None => None,
        };
        Ok(ComponentRef::new(TemplateToast::new(self.title.clone(), accent)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "name": "remoteToast",
        "exposes": {
            "./Toast": {
                "exports": {
                    "default": { "kind": "component", "title": "Toast", "accent": "green" },
                    "version": { "kind": "value", "value": "1.0.0" }
                }
            },
            "./Bare": {
                "callable": { "title": "Bare" }
            }
        }
    }"#;

    #[test]
    fn parses_exports_and_callables() {
        let manifest: RemoteManifest = serde_json::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.name, "remoteToast");

        let toast = manifest.expose("./Toast").unwrap().to_module().unwrap();
        assert_eq!(toast.export("default").unwrap().type_name(), "function");
        assert_eq!(toast.export("version").unwrap().type_name(), "string");
        assert!(toast.as_callable().is_none());

        let bare = manifest.expose("./Bare").unwrap().to_module().unwrap();
        assert_eq!(bare.as_callable().unwrap().name(), "Bare");
        assert_eq!(bare.export_names().count(), 0);
    }

    #[test]
    fn missing_expose_is_none() {
        let manifest: RemoteManifest = serde_json::from_str(MANIFEST).unwrap();
        assert!(manifest.expose("./Missing").is_none());
    }

    #[test]
    fn invalid_accent_is_rejected() {
        let descriptor = ComponentDescriptor {
            title: "Toast".into(),
            accent: Some("not-a-color".into()),
        };
        let err = descriptor.to_component().unwrap_err();
        assert_eq!(
            err,
            ManifestError::InvalidAccent {
                component: "Toast".into(),
                value: "not-a-color".into(),
            }
        );
    }

    #[test]
    fn hex_accent_is_accepted() {
        let descriptor = ComponentDescriptor {
            title: "Toast".into(),
            accent: Some("#22c55e".into()),
        };
        assert!(descriptor.to_component().is_ok());
    }
}
