//! HTTP client for OMDb-compatible metadata endpoints.
//!
//! Both lookups are a single GET against the configured base URL:
//!
//! ```text
//! GET {base}?apikey={key}&s={term}&page={n}[&y={year}]   → search page
//! GET {base}?apikey={key}&i={id}&plot=full               → details
//! ```

use crate::domain::{MovieDetails, ReelmarkError, Result};
use crate::provider::{wire, MovieProvider, SearchPage, SearchQuery};
use crate::Config;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::Client;
use std::time::Duration;
use tracing::Instrument;

/// reqwest-backed [`MovieProvider`].
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReelmarkError::Config`] when no API key is configured, and
    /// [`ReelmarkError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ReelmarkError::Config(
                    "no API key configured (set api_key or REELMARK_API_KEY)".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("reelmark/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Issues one GET with the given query parameters and returns the body text.
    async fn get(&self, params: &[(&str, String)]) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn fetch_search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let mut params = vec![("s", query.term.clone()), ("page", query.page.to_string())];
        if let Some(year) = query.year {
            params.push(("y", year.to_string()));
        }

        let body = self.get(&params).await?;
        let page = wire::decode_search(&body)?;

        tracing::debug!(
            term = %query.term,
            page = query.page,
            items = page.items.len(),
            total = page.total_results,
            "search page fetched"
        );
        Ok(page)
    }

    async fn fetch_details(&self, id: &str) -> Result<MovieDetails> {
        let params = [("i", id.to_string()), ("plot", "full".to_string())];
        let body = self.get(&params).await?;
        let details = wire::decode_details(&body)?;

        tracing::debug!(id = %id, title = %details.summary.title, "details fetched");
        Ok(details)
    }
}

impl MovieProvider for OmdbClient {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<SearchPage>> {
        let span = tracing::debug_span!("omdb_search", term = %query.term, page = query.page);
        self.fetch_search(query).instrument(span).boxed()
    }

    fn details<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<MovieDetails>> {
        let span = tracing::debug_span!("omdb_details", id = %id);
        self.fetch_details(id).instrument(span).boxed()
    }
}
