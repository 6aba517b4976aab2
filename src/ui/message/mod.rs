mod intent;
mod reducer;
mod state;

pub use intent::MessageIntent;
pub use reducer::MessageReducer;
pub use state::{MessageState, PLACEHOLDER};
