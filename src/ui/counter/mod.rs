//! Counter widget feature module.
//!
//! A single non-negative integer with three operations: ADD increments,
//! REMOVE decrements but never below zero, RESTART sets zero.
//!
//! # Architecture
//!
//! - `state.rs` - Value and focused control
//! - `intent.rs` - Operations and focus moves
//! - `reducer.rs` - State transitions (pure, total)
//! - `widget.rs` - Rendering and control hit-testing

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterControl, CounterState, INITIAL_VALUE};
pub use widget::{control_rects, CounterWidget, COUNTER_HEIGHT};
