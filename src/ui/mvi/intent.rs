//! Base trait for intents.

/// Marker trait for intent objects: user actions (keystrokes, submits)
/// and system events (fetch settlement) that reducers consume.
pub trait Intent: Send + 'static {}
