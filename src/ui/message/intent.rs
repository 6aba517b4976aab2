//! Intents for the message field.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageIntent {
    /// Replace the whole message. Sent on every keystroke in the input.
    Set { text: String },
    /// Clear button pressed. Ignored while the message is already empty.
    Clear,
}

impl Intent for MessageIntent {}
