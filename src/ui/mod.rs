//! Terminal dashboard: layout, input, rendering and the two components.

pub mod app;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod remote;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
