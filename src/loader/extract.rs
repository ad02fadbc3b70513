//! Picks an invocable component out of a remote module.

use crate::federation::{ComponentRef, RemoteModule};

use super::error::ExtractionError;

/// Export names tried after the caller's preferred name, in order.
pub const LEGACY_EXPORT_NAMES: [&str; 3] = ["default", "Toast", "Component"];

/// Return the first invocable candidate of `module`.
///
/// Candidates, in priority order: `preferred` (if given), `default`,
/// `Toast`, `Component`, then the module itself. Modules built under
/// different export conventions can match several candidates, so the order
/// must not change.
pub fn extract_component(
    module: &RemoteModule,
    preferred: Option<&str>,
) -> Result<ComponentRef, ExtractionError> {
    let named = preferred
        .into_iter()
        .chain(LEGACY_EXPORT_NAMES)
        .filter_map(|name| module.export(name))
        .find_map(|export| export.as_component());

    if let Some(component) = named.or_else(|| module.as_callable()) {
        return Ok(component.clone());
    }

    // Report what `default` held when it was exported as plain data.
    let observed = module
        .export("default")
        .map(|export| export.type_name())
        .unwrap_or_else(|| module.type_name());

    Err(ExtractionError {
        observed: observed.to_string(),
    })
}
