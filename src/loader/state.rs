//! Load state and the reducer model.

use crate::federation::ComponentRef;
use crate::mvi::UiState;

/// Result of a load sequence as seen by the presentational layer.
///
/// Exactly one variant holds at a time, so a component and an error are
/// never both present.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Initial state, and the state during and between attempts.
    #[default]
    Loading,

    /// Terminal: the component was loaded.
    Succeeded { component: ComponentRef },

    /// Terminal: attempts exhausted. Holds the last attempt's message.
    Failed { error: String },
}

impl UiState for LoadState {}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether no further transitions can happen.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn component(&self) -> Option<&ComponentRef> {
        match self {
            Self::Succeeded { component } => Some(component),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Reducer model for one logical consumer.
///
/// `generation` identifies the sequence currently in charge; events from
/// older sequences are ignored so a stale attempt can't overwrite a newer
/// sequence's state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadSequence {
    pub(super) generation: u64,
    pub(super) attempt: u32,
    pub(super) retry_count: u32,
    pub(super) state: LoadState,
}

impl UiState for LoadSequence {}

impl LoadSequence {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Zero-based index of the attempt in progress (or the last one made).
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a failure of the current attempt would be retried.
    pub fn can_retry(&self) -> bool {
        self.state.is_loading() && self.attempt < self.retry_count
    }
}
