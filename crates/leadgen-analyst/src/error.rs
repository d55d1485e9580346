use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalystError {
    #[error(transparent)]
    Core(#[from] leadgen_core::CoreError),

    #[error("language model call failed: {0}")]
    Llm(#[from] leadgen_llm::LlmError),

    /// Network or TLS failure talking to the web-search API.
    #[error("web search HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("web search returned status {status}")]
    SearchStatus { status: u16 },

    #[error("JSON deserialization error for web search: {0}")]
    SearchDeserialize(#[source] serde_json::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
