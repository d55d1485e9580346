//! NewsAPI `/v2/everything` client.

use leadgen_core::{ArticleSource, RawLead};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{build_http_client, endpoint_url, send_json};
use crate::error::ScoutError;
use crate::normalize::{clean, clean_content, is_removed_stub};

pub(crate) const PROVIDER: &str = "newsapi";
const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Upper bound NewsAPI accepts for `q`.
pub(crate) const MAX_QUERY_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    #[serde(default)]
    source: Option<NewsApiSource>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    max_results: u32,
}

impl NewsApiClient {
    /// # Errors
    ///
    /// Returns [`ScoutError::Http`] if the HTTP client cannot be constructed.
    pub fn new(
        api_key: &str,
        max_results: u32,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScoutError> {
        Self::with_base_url(api_key, max_results, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Http`] or [`ScoutError::InvalidBaseUrl`].
    pub fn with_base_url(
        api_key: &str,
        max_results: u32,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ScoutError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            api_key: api_key.to_owned(),
            endpoint: endpoint_url(base_url, "everything")?,
            max_results,
        })
    }

    /// Run one search, newest first, and normalize the articles.
    ///
    /// `[Removed]` stubs and articles without a URL are dropped. The source
    /// homepage is not part of the NewsAPI shape, so `source.url` stays unset.
    ///
    /// # Errors
    ///
    /// - [`ScoutError::Http`] on network failure.
    /// - [`ScoutError::Status`] on a non-2xx response.
    /// - [`ScoutError::Api`] if the envelope reports `"status": "error"`.
    /// - [`ScoutError::Deserialize`] if the body does not match the NewsAPI shape.
    pub async fn search(&self, query: &str) -> Result<Vec<RawLead>, ScoutError> {
        let page_size = self.max_results.to_string();
        let request = self
            .client
            .get(self.endpoint.clone())
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
            ]);

        let response: NewsApiResponse = send_json(PROVIDER, request).await?;
        if response.status.as_deref() == Some("error") {
            return Err(ScoutError::Api {
                provider: PROVIDER,
                message: response
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(response.articles.into_iter().filter_map(to_raw_lead).collect())
    }
}

fn to_raw_lead(article: NewsApiArticle) -> Option<RawLead> {
    let url = clean(article.url)?;
    if is_removed_stub(article.title.as_deref(), &url) {
        return None;
    }
    Some(RawLead {
        title: clean(article.title),
        description: clean(article.description),
        content: clean_content(article.content),
        url,
        image: clean(article.url_to_image),
        published_at: clean(article.published_at),
        source: ArticleSource {
            name: article.source.and_then(|s| clean(s.name)),
            url: None,
        },
        matched_icp: None,
    })
}
