//! Model-View-Intent (MVI) primitives.
//!
//! All state in the app moves in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── fetch task ──────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every transition
//! - **Intent**: something that happened (a fetch started, a payload arrived)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
