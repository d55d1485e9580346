//! File contracts between pipeline stages.
//!
//! Every stage reads its input from the file the previous stage wrote. JSON is
//! validated against the typed schema on read so a malformed file surfaces as
//! [`CoreError::Schema`] instead of leaking defaults into later stages.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;

pub const CONTEXT_FILE: &str = "greyamp_context.txt";
pub const SUMMARY_FILE: &str = "business_summary.txt";
pub const ICP_PROFILES_FILE: &str = "icp_profiles.json";
pub const RAW_LEADS_FILE: &str = "raw_leads.json";
pub const QUALIFIED_LEADS_FILE: &str = "qualified_leads.json";

/// Resolved locations of every file the pipeline reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineFiles {
    pub context: PathBuf,
    pub summary: PathBuf,
    pub icp_profiles: PathBuf,
    pub raw_leads: PathBuf,
    pub qualified_leads: PathBuf,
}

impl PipelineFiles {
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            context: dir.join(CONTEXT_FILE),
            summary: dir.join(SUMMARY_FILE),
            icp_profiles: dir.join(ICP_PROFILES_FILE),
            raw_leads: dir.join(RAW_LEADS_FILE),
            qualified_leads: dir.join(QUALIFIED_LEADS_FILE),
        }
    }
}

/// Read a whole text file.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read.
pub fn read_text(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path).map_err(|e| CoreError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the directory or file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<(), CoreError> {
    let io_err = |e| CoreError::Io {
        path: path.display().to_string(),
        source: e,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}

/// Read and validate a JSON file.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read, or
/// [`CoreError::Schema`] if it is not valid JSON of the expected shape.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let content = read_text(path)?;
    parse_json(&path.display().to_string(), &content)
}

/// Parse and validate JSON text; `label` names the source in errors.
///
/// # Errors
///
/// Returns [`CoreError::Schema`] if `raw` does not match `T`.
pub fn parse_json<T: DeserializeOwned>(label: &str, raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(raw).map_err(|e| CoreError::Schema {
        path: label.to_string(),
        source: e,
    })
}

/// Serialize `value` as two-space pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`CoreError::Serialize`] or [`CoreError::Io`].
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CoreError> {
    let mut body = to_pretty_json(value).map_err(|e| CoreError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;
    body.push('\n');
    write_text(path, &body)
}

/// Pretty-print `value` the same way [`write_json`] does, minus the newline.
///
/// # Errors
///
/// Returns the underlying `serde_json` error.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
