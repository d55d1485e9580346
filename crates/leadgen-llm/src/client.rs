//! HTTP client for an OpenAI-compatible chat-completions API.
//!
//! Every call is a single-turn exchange: one system message, one user message,
//! temperature zero. [`ResponseFormat::Json`] asks the API to constrain the
//! reply to a JSON object; parsing that object is left to the caller so each
//! stage can validate against its own schema.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormatSpec};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

/// Output mode requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
}

/// Client for the chat-completions endpoint.
///
/// Use [`ChatClient::new`] for production or [`ChatClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl ChatClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`LlmError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| LlmError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Free-text completion.
    ///
    /// # Errors
    ///
    /// See [`ChatClient::complete`].
    pub async fn complete_text(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.complete(system, user, ResponseFormat::Text).await
    }

    /// JSON-constrained completion; returns the raw JSON text.
    ///
    /// # Errors
    ///
    /// See [`ChatClient::complete`].
    pub async fn complete_json(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.complete(system, user, ResponseFormat::Json).await
    }

    /// Sends one system + user exchange and returns the first choice's content.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure.
    /// - [`LlmError::Status`] on a non-2xx response.
    /// - [`LlmError::Deserialize`] if the body is not a completion object.
    /// - [`LlmError::EmptyResponse`] if there is no choice or its content is blank.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        format: ResponseFormat,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: match format {
                ResponseFormat::Text => None,
                ResponseFormat::Json => Some(ResponseFormatSpec {
                    kind: "json_object",
                }),
            },
        };

        tracing::debug!(model = %self.model, ?format, "sending chat completion");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: truncate(&body, 500),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Deserialize {
                context: format!("chat completion (model={})", self.model),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
