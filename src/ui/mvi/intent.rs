//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents cross thread boundaries: the fetch task produces them and the
/// UI loop consumes them, so they must be `Send`.
pub trait Intent: Send + 'static {}
