pub mod app;
pub mod control;
pub mod counter;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod message;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod timer;
pub mod view;
