//! Chat-completion client used by the summarizer, ICP generator, and analyst.

pub mod client;
pub mod error;
mod types;

pub use client::{ChatClient, ResponseFormat};
pub use error::LlmError;
