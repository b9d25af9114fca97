//! Model-View-Intent primitives.
//!
//! Both views follow the same unidirectional loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure; anything with a side effect (validation against the
//! schema, spawning the fetch, invoking the submit hook) happens in the
//! app layer around the dispatch and flows back in as another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
