//! Keyed one-shot query: payload types, explicit cache and HTTP client.
//!
//! The cache replaces an implicit library-managed one: it is a plain map
//! keyed by a stable string, the fetch is issued at most once per key,
//! and the first settled outcome wins.

mod cache;
mod client;
mod types;

pub use cache::{CacheSlot, QueryCache, QueryKey, QueryOutcome};
pub use client::{spawn_fetch, QueryClient, QueryError};
pub use types::RepoSummary;
