//! Query view: intent / reducer / state triple.

mod intent;
mod reducer;
mod state;

pub use intent::QueryIntent;
pub use reducer::QueryReducer;
pub use state::QueryViewState;
