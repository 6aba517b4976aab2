//! State for the click counter.

use crate::ui::mvi::UiState;

/// Number of clicks since mount (or since the last reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    clicks: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(clicks: u64) -> Self {
        Self { clicks }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Reset is only offered once something has been counted.
    pub fn can_reset(&self) -> bool {
        self.clicks > 0
    }

    pub fn is_even(&self) -> bool {
        self.clicks % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let state = CounterState::default();
        assert_eq!(state.clicks(), 0);
        assert!(!state.can_reset());
    }

    #[test]
    fn can_reset_iff_nonzero() {
        assert!(!CounterState::new(0).can_reset());
        assert!(CounterState::new(1).can_reset());
        assert!(CounterState::new(u64::MAX).can_reset());
    }

    #[test]
    fn parity() {
        assert!(CounterState::new(0).is_even());
        assert!(!CounterState::new(1).is_even());
        assert!(CounterState::new(42).is_even());
    }
}
