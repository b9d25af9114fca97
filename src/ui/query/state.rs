use crate::query::RepoSummary;
use crate::ui::mvi::UiState;

/// Query view state machine.
///
/// Exactly one variant holds at any time. The view is created `Pending`
/// and settles at most once: `pending→success` or `pending→error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryViewState {
    #[default]
    Pending,
    Error {
        message: String,
    },
    Success {
        repo: RepoSummary,
    },
}

impl UiState for QueryViewState {}

impl QueryViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }
}
