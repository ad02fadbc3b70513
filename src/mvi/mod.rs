//! Intent/Reducer/State primitives.
//!
//! Load sequences are modelled as a pure reducer: the async runner turns
//! attempt outcomes into intents, the reducer folds them into a
//! `LoadSequence`, and consumers only ever see the resulting state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
