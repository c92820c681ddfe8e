//! HTTP client for the collection API's object endpoint.

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::config::ApiConfig;
use crate::query::{QueryError, SearchBackend};
use crate::types::SearchResults;

/// Client for the museum collection API. Cheap to clone the inner
/// `reqwest::Client`; one instance is shared for the app's lifetime.
pub struct MuseumClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
}

impl MuseumClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        }
    }

    /// Build the object-endpoint URL for a term/value pair.
    fn object_url(&self, term: &str, value: &str) -> Result<Url, QueryError> {
        let key = self.api_key.as_deref().ok_or(QueryError::MissingApiKey)?;
        let size = self.page_size.to_string();
        Url::parse_with_params(
            &format!("{}/object", self.base_url.trim_end_matches('/')),
            [("apikey", key), (term, value), ("size", size.as_str())],
        )
        .map_err(|e| QueryError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl SearchBackend for MuseumClient {
    async fn fetch_results(
        &self,
        term: &str,
        value: &str,
    ) -> Result<SearchResults, QueryError> {
        let url = self.object_url(term, value)?;
        debug!(term, value, "fetching results");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<SearchResults>().await?)
    }
}
