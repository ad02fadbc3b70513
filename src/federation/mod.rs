//! Module federation abstractions.
//!
//! A federation runtime fetches modules exposed by an independently
//! deployed remote. The loader only ever talks to the [`FederationRuntime`]
//! trait and finds an instance through a [`RuntimeLocator`], so tests can
//! substitute a fake runtime without touching the global registry.
//!
//! - `module.rs` - Remote modules, exports and the component contract
//! - `props.rs` - The fixed prop set handed to a loaded toast
//! - `runtime.rs` - Runtime trait, locators and the global instance registry
//! - `manifest.rs` - JSON manifest a remote publishes
//! - `template.rs` - Declarative toast component built from a manifest
//! - `http.rs` - Runtime that resolves remotes over HTTP

mod http;
mod manifest;
mod module;
mod props;
mod runtime;
mod template;

pub use http::{split_module_path, HttpFederation, RemoteEndpoint};
pub use manifest::{ComponentDescriptor, ExportDescriptor, ExposedModule, ManifestError, RemoteManifest};
pub use module::{ComponentRef, Export, RemoteComponent, RemoteModule};
pub use props::{CloseCallback, ToastKind, ToastProps, DEFAULT_TOAST_DURATION};
pub use runtime::{
    clear_instances, instance_count, register_instance, FederationError, FederationRuntime,
    FixedLocator, GlobalLocator, RuntimeLocator,
};
pub use template::TemplateToast;
