//! Remote component loader.
//!
//! Loads a component from a federation runtime with a per-attempt timeout
//! and a bounded number of retries, exposing a three-state result
//! (loading / failed / succeeded) to the presentational layer.
//!
//! # Architecture
//!
//! The sequence logic is an MVI reducer; the runner performs the side
//! effects and feeds attempt outcomes back in:
//! - `request.rs` - Immutable load parameters
//! - `state.rs` - `LoadState` and the reducer model `LoadSequence`
//! - `intent.rs` - Sequence events (Begin, AttemptSucceeded, AttemptFailed)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `timeout.rs` - Deferred failure used as a race partner
//! - `extract.rs` - Picks a component out of a module's exports
//! - `runner.rs` - Async driver and the `LoadHandle` stream

mod error;
mod extract;
mod intent;
mod reducer;
mod request;
mod runner;
mod state;
pub mod timeout;

pub use error::{ExtractionError, LoadError};
pub use extract::{extract_component, LEGACY_EXPORT_NAMES};
pub use intent::LoadIntent;
pub use reducer::LoadReducer;
pub use request::{
    LoadRequest, RequestError, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
    TOAST_MODULE_PATH,
};
pub use runner::{attempt_load, LoadHandle, RemoteLoader};
pub use state::{LoadSequence, LoadState};
