//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent names one requested update of a single state field, such as
/// "increment the counter" or "replace the message with this text".
pub trait Intent: Send + 'static {}
