/// State a reducer produces.
///
/// Compared with the previous value so unchanged states aren't broadcast.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
