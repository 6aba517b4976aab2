//! Model-View-Intent primitives for the component's state fields.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewModel ──→ render
//!    ↑                                              │
//!    └──────────── key press / mouse click ─────────┘
//! ```
//!
//! - **State**: plain value owned by the component (`CounterState`, `MessageState`)
//! - **Intent**: the update requested by the user
//! - **Reducer**: pure `(State, Intent) -> State`; logging and re-render
//!   notification happen in the caller around the dispatch

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
