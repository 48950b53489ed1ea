//! Remote value display feature module.
//!
//! Shows one externally-sourced number. A mount issues exactly one fetch;
//! the display then settles in `Loaded` or `Failed` for the rest of that
//! mount's life.
//!
//! # Architecture
//!
//! - `state.rs` - Loading / Loaded / Failed
//! - `intent.rs` - Fetch outcomes
//! - `reducer.rs` - Transitions out of `Loading` only
//! - `mount.rs` - Task ownership for one mount
//! - `view.rs` - Rendering

mod intent;
mod mount;
mod reducer;
mod state;
mod view;

pub use intent::RemoteIntent;
pub use mount::{ReadingMount, ReadingOutcome};
pub use reducer::RemoteReducer;
pub use state::RemoteValueState;
pub use view::{format_reading, status_text, RemoteValueView, REMOTE_HEIGHT};
