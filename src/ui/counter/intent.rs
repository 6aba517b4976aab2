//! Intents for the click counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Increment button pressed.
    Increment,
    /// Reset button pressed. Ignored while the counter is already zero.
    Reset,
}

impl Intent for CounterIntent {}
