//! Query construction and the search dispatch protocol.
//!
//! A dispatch brackets the backend call with loading notifications and
//! swallows failures after logging them — a failed search leaves the
//! previous results untouched. The two callbacks are injected by the
//! caller, so the protocol runs identically under the desktop app and
//! under tests with recording stand-ins.

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

use crate::types::SearchResults;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Replace every space with a hyphen — the collection API's convention
/// for multi-word field values.
pub fn normalize_term_value(value: &str) -> String {
    value.replace(' ', "-")
}

/// A single search request: a field name and its normalized value.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub value: String,
}

impl SearchQuery {
    /// Build a query for `term`, normalizing `value` for the wire. The
    /// raw value stays with the caller for display.
    pub fn new(term: &str, value: &str) -> Self {
        Self { term: term.to_string(), value: normalize_term_value(value) }
    }
}

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// Errors from a query dispatch. These are logged at the dispatch
/// boundary and never surface in the UI.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no API key configured (set ARTSCOPE_API_KEY or api_key in .artscope.toml)")]
    MissingApiKey,
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The external query collaborator: anything that resolves a term/value
/// pair into a result set.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch_results(&self, term: &str, value: &str)
        -> Result<SearchResults, QueryError>;
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one search activation against `backend`.
///
/// `report_loading(true)` fires before the fetch and `report_loading(false)`
/// after it settles, on both paths. On success the result set goes to
/// `report_results` exactly once; on failure the error is logged and
/// `report_results` is never called.
pub async fn dispatch_query<B>(
    backend: &B,
    query: &SearchQuery,
    report_loading: impl Fn(bool),
    report_results: impl FnOnce(SearchResults),
) where
    B: SearchBackend + ?Sized,
{
    report_loading(true);
    match backend.fetch_results(&query.term, &query.value).await {
        Ok(results) => report_results(results),
        Err(err) => error!(term = query.term.as_str(), error = %err, "search dispatch failed"),
    }
    report_loading(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectRecord;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Event {
        Loading(bool),
        Fetch(String, String),
        Results(usize),
    }

    struct CannedBackend<'a> {
        log: &'a Mutex<Vec<Event>>,
        fail: bool,
    }

    #[async_trait]
    impl SearchBackend for CannedBackend<'_> {
        async fn fetch_results(
            &self,
            term: &str,
            value: &str,
        ) -> Result<SearchResults, QueryError> {
            self.log.lock().unwrap().push(Event::Fetch(term.to_string(), value.to_string()));
            if self.fail {
                Err(QueryError::MissingApiKey)
            } else {
                Ok(SearchResults {
                    records: vec![ObjectRecord::default()],
                    ..Default::default()
                })
            }
        }
    }

    #[test]
    fn normalize_replaces_each_space() {
        assert_eq!(normalize_term_value("Asian Art"), "Asian-Art");
        assert_eq!(normalize_term_value("a b c"), "a-b-c");
        assert_eq!(normalize_term_value("Porcelain"), "Porcelain");
    }

    #[test]
    fn query_value_is_normalized_on_construction() {
        let query = SearchQuery::new("culture", "Asian Art");
        assert_eq!(query.term, "culture");
        assert_eq!(query.value, "Asian-Art");
    }

    #[tokio::test]
    async fn loading_brackets_the_fetch_on_success() {
        let log = Mutex::new(Vec::new());
        let backend = CannedBackend { log: &log, fail: false };
        let query = SearchQuery::new("culture", "Asian Art");

        dispatch_query(
            &backend,
            &query,
            |loading| log.lock().unwrap().push(Event::Loading(loading)),
            |results| log.lock().unwrap().push(Event::Results(results.records.len())),
        )
        .await;

        assert_eq!(
            *log.lock().unwrap(),
            [
                Event::Loading(true),
                Event::Fetch("culture".into(), "Asian-Art".into()),
                Event::Results(1),
                Event::Loading(false),
            ]
        );
    }

    #[tokio::test]
    async fn failure_logs_and_skips_results() {
        let log = Mutex::new(Vec::new());
        let backend = CannedBackend { log: &log, fail: true };
        let query = SearchQuery::new("displayname", "Jane Doe");

        dispatch_query(
            &backend,
            &query,
            |loading| log.lock().unwrap().push(Event::Loading(loading)),
            |results| log.lock().unwrap().push(Event::Results(results.records.len())),
        )
        .await;

        assert_eq!(
            *log.lock().unwrap(),
            [
                Event::Loading(true),
                Event::Fetch("displayname".into(), "Jane-Doe".into()),
                Event::Loading(false),
            ]
        );
    }
}
