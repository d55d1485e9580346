//! News search providers.

mod gnews;
mod newsapi;

pub use gnews::GNewsClient;
pub use newsapi::NewsApiClient;

use std::time::Duration;

use leadgen_core::{AppConfig, Icp, QueryStrategy, RawLead};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ScoutError;
use crate::query::{build_query, build_query_capped};

/// One configured news search backend.
#[derive(Debug, Clone)]
pub enum NewsProvider {
    GNews(GNewsClient),
    NewsApi(NewsApiClient),
}

impl NewsProvider {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NewsProvider::GNews(_) => gnews::PROVIDER,
            NewsProvider::NewsApi(_) => newsapi::PROVIDER,
        }
    }

    /// The query string this provider will send for `icp`.
    #[must_use]
    pub fn query_for(&self, icp: &Icp, strategy: QueryStrategy) -> String {
        match self {
            NewsProvider::GNews(_) => build_query(icp, strategy),
            NewsProvider::NewsApi(_) => build_query_capped(icp, strategy, newsapi::MAX_QUERY_CHARS),
        }
    }

    /// Search and normalize results. `matched_icp` is left unset.
    ///
    /// # Errors
    ///
    /// Propagates the provider client's [`ScoutError`].
    pub async fn search(&self, query: &str) -> Result<Vec<RawLead>, ScoutError> {
        match self {
            NewsProvider::GNews(client) => client.search(query).await,
            NewsProvider::NewsApi(client) => client.search(query).await,
        }
    }
}

/// Build every provider that has an API key, in fixed order (GNews first).
///
/// Providers without a key are skipped with a warning.
///
/// # Errors
///
/// Returns [`ScoutError::Http`] if an HTTP client cannot be constructed.
pub fn providers_from_config(config: &AppConfig) -> Result<Vec<NewsProvider>, ScoutError> {
    let mut providers = Vec::new();

    match config.gnews_api_key.as_deref() {
        Some(key) => providers.push(NewsProvider::GNews(GNewsClient::new(
            key,
            config.news_max_results,
            config.request_timeout_secs,
            &config.user_agent,
        )?)),
        None => tracing::warn!(
            provider = gnews::PROVIDER,
            "GNEWS_API_KEY not set; skipping provider"
        ),
    }

    match config.newsapi_key.as_deref() {
        Some(key) => providers.push(NewsProvider::NewsApi(NewsApiClient::new(
            key,
            config.news_max_results,
            config.request_timeout_secs,
            &config.user_agent,
        )?)),
        None => tracing::warn!(
            provider = newsapi::PROVIDER,
            "NEWSAPI_KEY not set; skipping provider"
        ),
    }

    Ok(providers)
}

pub(crate) fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ScoutError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

/// Parse `base_url` and join `endpoint` onto it, tolerating trailing slashes.
pub(crate) fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url, ScoutError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised)
        .and_then(|base| base.join(endpoint))
        .map_err(|e| ScoutError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })
}

/// Send a request, require a 2xx status, and decode the JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ScoutError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScoutError::Status {
            provider,
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| ScoutError::Deserialize { provider, source })
}
