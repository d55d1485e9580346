//! Stage 3: search news providers for signals matching each ICP.
//!
//! Each ICP becomes one boolean query per provider. Results from all providers
//! are normalized into [`leadgen_core::RawLead`], tagged with the ICP name, and
//! deduplicated by URL across the whole run (first occurrence wins).

pub mod error;
pub mod pipeline;
pub mod query;
pub mod sources;

mod normalize;

pub use error::ScoutError;
pub use pipeline::{dedup_and_tag, run_scout, IcpScoutSummary, ScoutReport};
pub use query::{build_query, build_query_capped, AI_TERM};
pub use sources::{providers_from_config, GNewsClient, NewsApiClient, NewsProvider};
