//! Stages 1 and 2: summarize the company context, then derive Ideal
//! Customer Profiles from that summary.

pub mod error;
pub mod icp;
pub mod prompts;
pub mod summarize;

pub use error::StrategistError;
pub use icp::{run_icp_generator, EXPECTED_ICP_COUNT};
pub use summarize::run_summarizer;
