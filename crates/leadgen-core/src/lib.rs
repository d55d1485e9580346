//! Shared data model, file contracts, and configuration for the lead
//! generation pipeline.

pub mod app_config;
pub mod config;
pub mod error;
pub mod files;
pub mod types;

pub use app_config::{AnalystMode, AppConfig, QueryStrategy};
pub use config::{
    load_app_config, load_app_config_from_env, parse_analyst_mode, parse_query_strategy,
};
pub use error::{ConfigError, CoreError};
pub use files::{
    parse_json, read_json, read_text, to_pretty_json, write_json, write_text, PipelineFiles,
};
pub use types::{
    is_sentinel, ArticleSource, Icp, IcpCollection, QualifiedLead, RawLead, REJECTED_SENTINEL,
};
