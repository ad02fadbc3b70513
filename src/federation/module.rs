//! Remote modules and the component contract.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::props::ToastProps;

/// An invocable UI component delivered by a remote.
///
/// Components draw themselves into the area the presentational shell
/// allocates for them, using the props the host passes in.
pub trait RemoteComponent: Send + Sync {
    /// Name used in logs and debug output.
    fn name(&self) -> &str;

    /// Rows the component wants for the given props.
    fn height(&self, _props: &ToastProps) -> u16 {
        3
    }

    /// Draw the component.
    fn render(&self, props: &ToastProps, area: Rect, buf: &mut Buffer);
}

/// Shared handle to a loaded component.
///
/// Equality is identity: two handles are equal only when they point at
/// the same component instance.
#[derive(Clone)]
pub struct ComponentRef(Arc<dyn RemoteComponent>);

impl ComponentRef {
    pub fn new<C: RemoteComponent + 'static>(component: C) -> Self {
        Self(Arc::new(component))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn height(&self, props: &ToastProps) -> u16 {
        self.0.height(props)
    }

    pub fn render(&self, props: &ToastProps, area: Rect, buf: &mut Buffer) {
        self.0.render(props, area, buf);
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.name()).finish()
    }
}

/// A single named export of a remote module.
#[derive(Debug, Clone)]
pub enum Export {
    /// Invocable component.
    Component(ComponentRef),
    /// Plain data (version strings, metadata, ...).
    Value(serde_json::Value),
}

impl Export {
    pub fn as_component(&self) -> Option<&ComponentRef> {
        match self {
            Export::Component(component) => Some(component),
            Export::Value(_) => None,
        }
    }

    /// Runtime type of the export, as reported in extraction errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Export::Component(_) => "function",
            Export::Value(serde_json::Value::Null) => "null",
            Export::Value(serde_json::Value::Bool(_)) => "boolean",
            Export::Value(serde_json::Value::Number(_)) => "number",
            Export::Value(serde_json::Value::String(_)) => "string",
            Export::Value(serde_json::Value::Array(_)) => "array",
            Export::Value(serde_json::Value::Object(_)) => "object",
        }
    }
}

/// Opaque result of a federation runtime's load operation.
///
/// Holds named exports and, for bare-callable modules, the component the
/// module itself evaluates to. Modules are fetched fresh per load and never
/// cached here.
#[derive(Debug, Clone, Default)]
pub struct RemoteModule {
    exports: BTreeMap<String, Export>,
    callable: Option<ComponentRef>,
}

impl RemoteModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// A module that is itself invocable.
    pub fn callable(component: ComponentRef) -> Self {
        Self {
            exports: BTreeMap::new(),
            callable: Some(component),
        }
    }

    pub fn with_export(mut self, name: impl Into<String>, export: Export) -> Self {
        self.exports.insert(name.into(), export);
        self
    }

    pub fn with_component(self, name: impl Into<String>, component: ComponentRef) -> Self {
        self.with_export(name, Export::Component(component))
    }

    pub fn with_value(self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.with_export(name, Export::Value(value))
    }

    pub fn export(&self, name: &str) -> Option<&Export> {
        self.exports.get(name)
    }

    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    /// The component the module itself evaluates to, if it is callable.
    pub fn as_callable(&self) -> Option<&ComponentRef> {
        self.callable.as_ref()
    }

    /// Runtime type of the module value.
    pub fn type_name(&self) -> &'static str {
        if self.callable.is_some() {
            "function"
        } else {
            "object"
        }
    }
}
