//! Reducer for load sequences.

use crate::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::{LoadSequence, LoadState};

/// Reducer for load sequence transitions.
///
/// Pure function; the runner performs attempts, timers and retry delays
/// around the dispatch calls.
pub struct LoadReducer;

impl Reducer for LoadReducer {
    type State = LoadSequence;
    type Intent = LoadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Begin {
                generation,
                retry_count,
            } => {
                if generation < state.generation {
                    return state;
                }
                LoadSequence {
                    generation,
                    attempt: 0,
                    retry_count,
                    state: LoadState::Loading,
                }
            }

            LoadIntent::AttemptSucceeded {
                generation,
                component,
            } => {
                if generation != state.generation || state.state.is_terminal() {
                    return state;
                }
                LoadSequence {
                    state: LoadState::Succeeded { component },
                    ..state
                }
            }

            LoadIntent::AttemptFailed { generation, error } => {
                if generation != state.generation || state.state.is_terminal() {
                    return state;
                }
                if state.attempt < state.retry_count {
                    LoadSequence {
                        attempt: state.attempt + 1,
                        ..state
                    }
                } else {
                    LoadSequence {
                        state: LoadState::Failed { error },
                        ..state
                    }
                }
            }
        }
    }
}
