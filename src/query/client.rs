//! HTTP client for the query view's single outbound request.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::QueryConfig;
use crate::query::cache::{QueryKey, QueryOutcome};
use crate::query::types::RepoSummary;
use crate::ui::events::AppEvent;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while fetching the repository summary.
///
/// The view only ever renders the `Display` output; the variants exist
/// for logging and tests.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from '{url}'")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin wrapper over a configured `reqwest::Client` and the endpoint it
/// fetches.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    pub fn from_config(config: &QueryConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|source| QueryError::Build { source })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues the GET and decodes the payload.
    pub async fn fetch_repo(&self) -> Result<RepoSummary, QueryError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| QueryError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| QueryError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| QueryError::Decode {
            url: self.endpoint.clone(),
            source,
        })
    }
}

/// Runs one fetch on a worker thread and posts the outcome back to the
/// event loop.
///
/// The worker owns a current-thread runtime for the single async call;
/// the UI never blocks on it. A dropped receiver just discards the
/// outcome.
pub fn spawn_fetch(client: QueryClient, key: QueryKey, events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let outcome = run_fetch(&client);
        match &outcome {
            Ok(_) => tracing::debug!(key = key.as_str(), "query settled"),
            Err(message) => {
                tracing::warn!(key = key.as_str(), error = %message, "query failed")
            }
        }
        let _ = events.send(AppEvent::QuerySettled { key, outcome });
    });
}

fn run_fetch(client: &QueryClient) -> QueryOutcome {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| err.to_string())?;

    runtime
        .block_on(client.fetch_repo())
        .map_err(|err| err.to_string())
}
