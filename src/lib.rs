//! Load a toast component from a separately deployed remote at runtime.
//!
//! The [`loader`] finds a federation runtime, requests a named remote
//! module with a per-attempt timeout and bounded retries, and extracts an
//! invocable component from it. The [`ui`] shell renders the outcome.

pub mod config;
pub mod federation;
pub mod loader;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod ui;
