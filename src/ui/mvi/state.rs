//! Base trait for component state.

/// Marker trait for state objects.
///
/// `PartialEq` lets the component skip re-rendering when a dispatch
/// leaves the value unchanged; `Default` is the freshly mounted value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
