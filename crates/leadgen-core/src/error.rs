use thiserror::Error;

/// Errors raised while reading or writing pipeline files.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its contents do not match the expected schema.
    #[error("'{path}' does not match the expected schema: {source}")]
    Schema {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("no news provider configured; set GNEWS_API_KEY and/or NEWSAPI_KEY")]
    NoNewsProviders,
}
