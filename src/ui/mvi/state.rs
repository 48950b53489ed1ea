/// Marker trait for component state.
///
/// `Default` is the state a freshly mounted component starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
