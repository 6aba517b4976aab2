//! Display-ready projection of the component state.

use crate::ui::control::Control;

pub const HEADING: &str = "Click counter";
pub const MESSAGE_HEADING: &str = "State management";
pub const COUNTER_LABEL: &str = "Clicks: ";
pub const INCREMENT_HINT: &str = "This button increments the counter on every click";
pub const INPUT_PLACEHOLDER: &str = "Type here...";
pub const MESSAGE_LABEL: &str = "Your message: ";
pub const FOOTER_TEXT: &str = "Built with ratatui";

/// Everything the renderer (or a render callback) needs, derived from
/// `App` after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub counter_text: String,
    /// Parity of the counter. Not rendered.
    pub counter_even: bool,
    pub input_text: String,
    pub message_display: String,
    pub message_is_placeholder: bool,
    pub reset_enabled: bool,
    pub clear_enabled: bool,
    pub focus: Control,
}

impl ViewModel {
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Increment | Control::MessageInput => true,
            Control::Reset => self.reset_enabled,
            Control::Clear => self.clear_enabled,
        }
    }
}
