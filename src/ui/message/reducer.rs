//! Reducer for the message field.

use crate::ui::mvi::Reducer;

use super::intent::MessageIntent;
use super::state::MessageState;

pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageState;
    type Intent = MessageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessageIntent::Set { text } => MessageState::new(text),
            MessageIntent::Clear if state.can_clear() => MessageState::default(),
            MessageIntent::Clear => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_whole_text() {
        let state = MessageReducer::reduce(
            MessageState::new("old"),
            MessageIntent::Set {
                text: "new".to_string(),
            },
        );
        assert_eq!(state.text(), "new");
    }

    #[test]
    fn set_empty_is_allowed() {
        let state = MessageReducer::reduce(
            MessageState::new("abc"),
            MessageIntent::Set {
                text: String::new(),
            },
        );
        assert!(state.is_empty());
    }

    #[test]
    fn clear_empties_message() {
        let state = MessageReducer::reduce(MessageState::new("hello"), MessageIntent::Clear);
        assert_eq!(state, MessageState::default());
    }
}
