//! Base trait for view state.

/// Marker trait for view state: cloneable, comparable, self-contained —
/// the render pass reads nothing else.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
