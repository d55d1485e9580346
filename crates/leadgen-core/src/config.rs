use crate::app_config::{AnalystMode, AppConfig, QueryStrategy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// API keys are all optional here; each stage asks for the keys it needs via
/// the `require_*` accessors on [`AppConfig`] before doing any work.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // Blank values in a `.env` file count as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let query_strategy = parse_query_strategy(&or_default("LEADGEN_QUERY_STRATEGY", "ai_filter"))?;
    let analyst_mode = parse_analyst_mode(&or_default("LEADGEN_ANALYST_MODE", "enriched"))?;

    let news_max_results = parse_u32("LEADGEN_NEWS_MAX_RESULTS", "5")?;
    if news_max_results == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_NEWS_MAX_RESULTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        openai_api_key: optional("OPENAI_API_KEY"),
        gnews_api_key: optional("GNEWS_API_KEY"),
        newsapi_key: optional("NEWSAPI_KEY"),
        tavily_api_key: optional("TAVILY_API_KEY"),
        log_level: or_default("LEADGEN_LOG_LEVEL", "info"),
        work_dir: PathBuf::from(or_default("LEADGEN_WORK_DIR", ".")),
        strategy_model: or_default("LEADGEN_STRATEGY_MODEL", "gpt-4o-mini"),
        analyst_model: or_default("LEADGEN_ANALYST_MODEL", "gpt-4o"),
        request_timeout_secs: parse_u64("LEADGEN_REQUEST_TIMEOUT_SECS", "60")?,
        user_agent: or_default("LEADGEN_USER_AGENT", "leadgen/0.1 (lead-discovery)"),
        query_strategy,
        analyst_mode,
        news_max_results,
        enrich_max_results: parse_u32("LEADGEN_ENRICH_MAX_RESULTS", "3")?,
        enrich_delay_ms: parse_u64("LEADGEN_ENRICH_DELAY_MS", "1000")?,
    })
}

/// Parse a `LEADGEN_QUERY_STRATEGY` value. Hyphens and underscores are interchangeable.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
pub fn parse_query_strategy(s: &str) -> Result<QueryStrategy, ConfigError> {
    match s.to_ascii_lowercase().replace('-', "_").as_str() {
        "ai_filter" => Ok(QueryStrategy::AiFilter),
        "buying_signals" => Ok(QueryStrategy::BuyingSignals),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_QUERY_STRATEGY".to_string(),
            reason: format!("unknown strategy '{other}'; expected ai_filter or buying_signals"),
        }),
    }
}

/// Parse a `LEADGEN_ANALYST_MODE` value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
pub fn parse_analyst_mode(s: &str) -> Result<AnalystMode, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "enriched" => Ok(AnalystMode::Enriched),
        "simple" => Ok(AnalystMode::Simple),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_ANALYST_MODE".to_string(),
            reason: format!("unknown mode '{other}'; expected enriched or simple"),
        }),
    }
}
