use crate::query::QueryOutcome;
use crate::ui::mvi::Intent;

/// Intents dispatched to the query reducer.
#[derive(Debug, Clone)]
pub enum QueryIntent {
    /// The fetch settled (from the worker, or replayed from the cache on
    /// remount).
    Settled { outcome: QueryOutcome },
}

impl Intent for QueryIntent {}
