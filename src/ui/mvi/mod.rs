//! Model-View-Intent (MVI) primitives shared by the dashboard components.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Components never mutate their state in place. The app shell hands the
//! current state and an intent to the component's reducer and stores the
//! result; the next frame draws from whatever state is stored.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
