//! GNews search API client.

use leadgen_core::{ArticleSource, RawLead};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{build_http_client, endpoint_url, send_json};
use crate::error::ScoutError;
use crate::normalize::{clean, clean_content};

pub(crate) const PROVIDER: &str = "gnews";
const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    #[serde(default)]
    articles: Vec<GNewsArticle>,
}

#[derive(Debug, Deserialize)]
struct GNewsArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    source: Option<GNewsSource>,
}

#[derive(Debug, Deserialize)]
struct GNewsSource {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GNewsClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    max_results: u32,
}

impl GNewsClient {
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
            endpoint: endpoint_url(base_url, "search")?,
            max_results,
        })
    }

    /// Run one search and normalize the articles. Articles without a URL are dropped.
    ///
    /// # Errors
    ///
    /// - [`ScoutError::Http`] on network failure.
    /// - [`ScoutError::Status`] on a non-2xx response.
    /// - [`ScoutError::Deserialize`] if the body does not match the GNews shape.
    pub async fn search(&self, query: &str) -> Result<Vec<RawLead>, ScoutError> {
        let max = self.max_results.to_string();
        let request = self.client.get(self.endpoint.clone()).query(&[
            ("q", query),
            ("lang", "en"),
            ("max", max.as_str()),
            ("apikey", self.api_key.as_str()),
        ]);

        let response: GNewsResponse = send_json(PROVIDER, request).await?;
        Ok(response.articles.into_iter().filter_map(to_raw_lead).collect())
    }
}

fn to_raw_lead(article: GNewsArticle) -> Option<RawLead> {
    let url = clean(article.url)?;
    let source = article.source.map_or_else(ArticleSource::default, |s| ArticleSource {
        name: clean(s.name),
        url: clean(s.url),
    });
    Some(RawLead {
        title: clean(article.title),
        description: clean(article.description),
        content: clean_content(article.content),
        url,
        image: clean(article.image),
        published_at: clean(article.published_at),
        source,
        matched_icp: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_search() {
        let client = GNewsClient::with_base_url("k", 5, 5, "test", "https://gnews.io/api/v4/")
            .expect("client");
        assert_eq!(client.endpoint.as_str(), "https://gnews.io/api/v4/search");
    }

    #[test]
    fn article_without_url_is_dropped() {
        let article: GNewsArticle =
            serde_json::from_value(serde_json::json!({"title": "No link"})).unwrap();
        assert!(to_raw_lead(article).is_none());
    }

    #[test]
    fn article_maps_every_field() {
        let article: GNewsArticle = serde_json::from_value(serde_json::json!({
            "title": "Insurer adopts GenAI",
            "description": "desc",
            "content": "body",
            "url": "https://news.example.com/a",
            "image": "https://img.example.com/a.png",
            "publishedAt": "2025-03-01T10:00:00Z",
            "source": {"name": "Example News", "url": "https://news.example.com"}
        }))
        .unwrap();
        let lead = to_raw_lead(article).expect("lead");
        assert_eq!(lead.title.as_deref(), Some("Insurer adopts GenAI"));
        assert_eq!(lead.image.as_deref(), Some("https://img.example.com/a.png"));
        assert_eq!(lead.source.name.as_deref(), Some("Example News"));
        assert_eq!(lead.source.url.as_deref(), Some("https://news.example.com"));
        assert!(lead.matched_icp.is_none());
    }
}
