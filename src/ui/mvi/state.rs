//! Base trait for state snapshots.

/// Marker trait for state objects.
///
/// `Default` is the state before anything happened. `PartialEq` lets the
/// store skip notifying subscribers when a transition changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
