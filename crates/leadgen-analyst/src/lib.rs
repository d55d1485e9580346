//! Stage 4: turn raw news articles into qualified lead records.
//!
//! Every article goes through a JSON extraction prompt. With an [`Enricher`]
//! configured, articles that name a real company get two web searches
//! (location, leadership) and a second extraction pass that applies the
//! India-presence and tangible-event rules. Records whose company name did not
//! resolve are dropped before the output file is written.

pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod search;

pub use enrich::{enrichment_queries, Enricher, NO_ENRICHMENT_FOUND};
pub use error::AnalystError;
pub use pipeline::{analyze_article, run_analyst, AnalysisReport};
pub use search::{SearchHit, TavilyClient};
