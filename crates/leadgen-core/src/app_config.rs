use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// How stage 3 turns an ICP into a news search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStrategy {
    /// Industry terms AND a flat `"AI"` filter.
    #[default]
    AiFilter,
    /// Industry terms AND the ICP's buying-signal phrases.
    BuyingSignals,
}

impl std::fmt::Display for QueryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryStrategy::AiFilter => write!(f, "ai_filter"),
            QueryStrategy::BuyingSignals => write!(f, "buying_signals"),
        }
    }
}

/// Whether stage 4 runs the web-search enrichment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalystMode {
    #[default]
    Enriched,
    Simple,
}

impl std::fmt::Display for AnalystMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalystMode::Enriched => write!(f, "enriched"),
            AnalystMode::Simple => write!(f, "simple"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub gnews_api_key: Option<String>,
    pub newsapi_key: Option<String>,
    pub tavily_api_key: Option<String>,
    pub log_level: String,
    pub work_dir: PathBuf,
    pub strategy_model: String,
    pub analyst_model: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub query_strategy: QueryStrategy,
    pub analyst_mode: AnalystMode,
    pub news_max_results: u32,
    pub enrich_max_results: u32,
    pub enrich_delay_ms: u64,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `OPENAI_API_KEY` is unset.
    pub fn require_openai_key(&self) -> Result<&str, ConfigError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `TAVILY_API_KEY` is unset.
    pub fn require_tavily_key(&self) -> Result<&str, ConfigError> {
        self.tavily_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("TAVILY_API_KEY".to_string()))
    }

    /// Fails when neither news provider has a key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoNewsProviders`] if both keys are unset.
    pub fn require_any_news_provider(&self) -> Result<(), ConfigError> {
        if self.gnews_api_key.is_none() && self.newsapi_key.is_none() {
            return Err(ConfigError::NoNewsProviders);
        }
        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn enrich_delay(&self) -> Duration {
        Duration::from_millis(self.enrich_delay_ms)
    }
}

fn redact(value: Option<&String>) -> Option<&'static str> {
    value.map(|_| "[redacted]")
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &redact(self.openai_api_key.as_ref()))
            .field("gnews_api_key", &redact(self.gnews_api_key.as_ref()))
            .field("newsapi_key", &redact(self.newsapi_key.as_ref()))
            .field("tavily_api_key", &redact(self.tavily_api_key.as_ref()))
            .field("log_level", &self.log_level)
            .field("work_dir", &self.work_dir)
            .field("strategy_model", &self.strategy_model)
            .field("analyst_model", &self.analyst_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("query_strategy", &self.query_strategy)
            .field("analyst_mode", &self.analyst_mode)
            .field("news_max_results", &self.news_max_results)
            .field("enrich_max_results", &self.enrich_max_results)
            .field("enrich_delay_ms", &self.enrich_delay_ms)
            .finish()
    }
}
