use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Side effects (timers, network calls) stay with whoever dispatches the
/// intents; the reducer only decides what the next state is.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
