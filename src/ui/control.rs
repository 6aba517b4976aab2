//! The component's interactive controls and their tab order.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Control {
    Increment,
    MessageInput,
    Reset,
    Clear,
}

impl Control {
    /// Focus order used by Tab / Shift+Tab.
    pub const TAB_ORDER: [Control; 4] = [
        Control::Increment,
        Control::MessageInput,
        Control::Reset,
        Control::Clear,
    ];

    pub fn is_button(self) -> bool {
        !matches!(self, Control::MessageInput)
    }

    /// Caption for buttons, field label for the input.
    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "Click me!",
            Control::MessageInput => "Enter a message:",
            Control::Reset => "Reset counter",
            Control::Clear => "Clear message",
        }
    }

    fn position(self) -> usize {
        Self::TAB_ORDER
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    /// Controls after `self` in tab order, wrapping around, `self` last.
    pub fn cycle_forward(self) -> impl Iterator<Item = Control> {
        let start = self.position();
        let len = Self::TAB_ORDER.len();
        (1..=len).map(move |step| Self::TAB_ORDER[(start + step) % len])
    }

    /// Controls before `self` in tab order, wrapping around, `self` last.
    pub fn cycle_backward(self) -> impl Iterator<Item = Control> {
        let start = self.position();
        let len = Self::TAB_ORDER.len();
        (1..=len).map(move |step| Self::TAB_ORDER[(start + len - step) % len])
    }
}
