//! Explicit fetch cache keyed by stable strings.

use std::collections::HashMap;

use crate::query::types::RepoSummary;

/// Stable identifier deduplicating a fetch across view remounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How a fetch settled: the decoded payload, or a displayable message.
pub type QueryOutcome = Result<RepoSummary, String>;

/// One cache entry's lifecycle. A key is either being fetched or has a
/// settled outcome; there is no eviction or invalidation.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheSlot {
    InFlight,
    Settled(QueryOutcome),
}

/// Map of query keys to fetch outcomes.
///
/// Owned by the event loop; the fetch worker never touches it directly.
#[derive(Debug, Default)]
pub struct QueryCache {
    slots: HashMap<QueryKey, CacheSlot>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the fetch for `key`.
    ///
    /// Returns true exactly once per key: the first caller owns the
    /// fetch, later callers observe `InFlight` or `Settled`.
    pub fn begin(&mut self, key: &QueryKey) -> bool {
        if self.slots.contains_key(key) {
            return false;
        }
        self.slots.insert(key.clone(), CacheSlot::InFlight);
        true
    }

    /// Records the outcome for `key`. The first settled outcome wins;
    /// settling an already-settled key is a no-op.
    pub fn settle(&mut self, key: &QueryKey, outcome: QueryOutcome) {
        if matches!(self.slots.get(key), Some(CacheSlot::Settled(_))) {
            return;
        }
        self.slots.insert(key.clone(), CacheSlot::Settled(outcome));
    }

    pub fn get(&self, key: &QueryKey) -> Option<&CacheSlot> {
        self.slots.get(key)
    }

    /// The settled outcome for `key`, if any.
    pub fn settled(&self, key: &QueryKey) -> Option<&QueryOutcome> {
        match self.slots.get(key) {
            Some(CacheSlot::Settled(outcome)) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_claims_fetch_once() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("repo-data");
        assert!(cache.begin(&key));
        assert!(!cache.begin(&key));
        assert_eq!(cache.get(&key), Some(&CacheSlot::InFlight));
    }

    #[test]
    fn first_settled_outcome_wins() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("repo-data");
        cache.begin(&key);
        cache.settle(&key, Err("first".to_string()));
        cache.settle(&key, Err("second".to_string()));
        assert_eq!(cache.settled(&key), Some(&Err("first".to_string())));
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = QueryCache::new();
        let a = QueryKey::new("a");
        let b = QueryKey::new("b");
        assert!(cache.begin(&a));
        assert!(cache.begin(&b));
        cache.settle(&a, Err("boom".to_string()));
        assert!(cache.settled(&a).is_some());
        assert_eq!(cache.get(&b), Some(&CacheSlot::InFlight));
    }
}
