//! Form view: intent / reducer / state triple.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::FormViewState;
