//! Reducer for the click counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure counter transitions. The "counter incremented" log line is
/// emitted by `App` after dispatch.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState::new(state.clicks().saturating_add(1)),
            CounterIntent::Reset if state.can_reset() => CounterState::default(),
            CounterIntent::Reset => state,
        }
    }
}
