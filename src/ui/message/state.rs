//! State for the mirrored message.

use crate::ui::mvi::UiState;

/// Shown in the message display while nothing has been typed.
pub const PLACEHOLDER: &str = "(nothing entered yet)";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageState {
    text: String,
}

impl UiState for MessageState {}

impl MessageState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear is only offered once something has been typed.
    pub fn can_clear(&self) -> bool {
        !self.is_empty()
    }

    /// Text for the message display region.
    pub fn display(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }
}
