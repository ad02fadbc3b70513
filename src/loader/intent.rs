//! Events that drive a load sequence.

use crate::federation::ComponentRef;
use crate::mvi::Intent;

/// Intents dispatched to [`LoadReducer`](super::LoadReducer).
///
/// Every intent carries the generation of the sequence that produced it.
#[derive(Debug, Clone)]
pub enum LoadIntent {
    /// A new sequence starts at attempt 0.
    Begin { generation: u64, retry_count: u32 },

    /// An attempt produced a component.
    AttemptSucceeded {
        generation: u64,
        component: ComponentRef,
    },

    /// An attempt failed for any reason.
    AttemptFailed { generation: u64, error: String },
}

impl Intent for LoadIntent {}

impl LoadIntent {
    pub fn generation(&self) -> u64 {
        match self {
            LoadIntent::Begin { generation, .. }
            | LoadIntent::AttemptSucceeded { generation, .. }
            | LoadIntent::AttemptFailed { generation, .. } => *generation,
        }
    }
}
