use crate::ui::mvi::Reducer;
use crate::ui::query::intent::QueryIntent;
use crate::ui::query::state::QueryViewState;

/// Reducer for the query view.
///
/// Only `Pending` can transition; a settle delivered to a settled view
/// is a no-op, so the first outcome wins (matching the cache).
pub struct QueryReducer;

impl Reducer for QueryReducer {
    type State = QueryViewState;
    type Intent = QueryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QueryIntent::Settled { outcome } => match state {
                QueryViewState::Pending => match outcome {
                    Ok(repo) => QueryViewState::Success { repo },
                    Err(message) => QueryViewState::Error { message },
                },
                other => other,
            },
        }
    }
}
