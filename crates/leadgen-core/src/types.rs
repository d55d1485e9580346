//! Records exchanged between pipeline stages.
//!
//! Every file format has an explicit schema here. Optional fields carry their
//! default in the serde attributes so the business logic downstream never has
//! to guess at missing values.

use serde::{Deserialize, Deserializer, Serialize};

/// Value the analyst model uses for "not found". A lead whose company name
/// equals this is rejected.
pub const REJECTED_SENTINEL: &str = "N/A";

const UNNAMED_ICP: &str = "Unnamed ICP";

/// Returns `true` if `value` is blank or the `"N/A"` sentinel (case-insensitive).
#[must_use]
pub fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(REJECTED_SENTINEL)
}

/// One Ideal Customer Profile as emitted by stage 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icp {
    /// Defaults to `"Unnamed ICP"`.
    #[serde(default = "unnamed_icp", deserialize_with = "null_as_unnamed")]
    pub icp_name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub industry_vertical: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub location_cities: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub key_challenges: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub buying_signals: Vec<String>,
}

/// Top-level shape of `icp_profiles.json`. The array key is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcpCollection {
    pub ideal_customer_profiles: Vec<Icp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A news article found for an ICP. `url` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLead {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub matched_icp: Option<String>,
}

/// Structured lead extracted by the analyst model.
///
/// `company_name` is `None` when the model omitted it; a present value may
/// still be the [`REJECTED_SENTINEL`]. The remaining text fields default to
/// the sentinel when missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedLead {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(default = "not_available", deserialize_with = "null_as_not_available")]
    pub key_person_name: String,
    #[serde(default = "not_available", deserialize_with = "null_as_not_available")]
    pub key_person_role: String,
    #[serde(default = "not_available", deserialize_with = "null_as_not_available")]
    pub qualifying_event_signal: String,
    #[serde(default = "not_available", deserialize_with = "null_as_not_available")]
    pub summary: String,
}

impl QualifiedLead {
    /// The company name, or `None` if it is missing, blank, or the sentinel.
    #[must_use]
    pub fn resolved_company(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !is_sentinel(name))
    }

    /// A lead survives the final filter only when its company name resolved.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.resolved_company().is_some()
    }
}

fn unnamed_icp() -> String {
    UNNAMED_ICP.to_string()
}

fn not_available() -> String {
    REJECTED_SENTINEL.to_string()
}

fn null_as_unnamed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unnamed_icp))
}

fn null_as_not_available<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(not_available))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accepts a list of strings, a single string, or null.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}
