//! Prompts for lead extraction.

use leadgen_core::{RawLead, REJECTED_SENTINEL};

pub const ANALYST_SYSTEM_PROMPT: &str =
    "You are a helpful business analysis assistant that outputs only valid JSON.";

const LEAD_SCHEMA: &str = r#"**JSON Schema to follow:**
- `company_name`: The name of the primary company discussed in the article.
- `key_person_name`: The name of a key executive mentioned (e.g., CEO, CTO).
- `key_person_role`: The job title of that key executive.
- `qualifying_event_signal`: A concise, one-sentence summary of the event that makes this company a good lead (e.g., "Experienced a major network failure during an upgrade, highlighting a need for modernization.").
- `summary`: A brief summary of the article's content."#;

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(REJECTED_SENTINEL)
}

fn article_block(article: &RawLead) -> String {
    format!(
        r#"**Article Context:**
- Matched ICP: "{}"
- Title: "{}"
- Description: "{}"
- Content Snippet: "{}""#,
        field(article.matched_icp.as_deref()),
        field(article.title.as_deref()),
        field(article.description.as_deref()),
        field(article.content.as_deref()),
    )
}

/// First-pass prompt: extract a lead from the article text alone.
#[must_use]
pub fn extraction_prompt(article: &RawLead) -> String {
    format!(
        r#"You are an expert business analyst. Your task is to analyze the following news article and extract specific, structured information about the company mentioned.

{article}

**Your Instructions:**
Based on the article context, extract the following information. Your final output MUST be a single, valid JSON object. If you cannot find a piece of information, use "{na}" for that field.

{schema}"#,
        article = article_block(article),
        na = REJECTED_SENTINEL,
        schema = LEAD_SCHEMA,
    )
}

/// Second-pass prompt: re-extract with web-search context and apply the
/// India-presence and tangible-event rules.
#[must_use]
pub fn enriched_prompt(article: &RawLead, company: &str, enrichment: &str) -> String {
    format!(
        r#"You are an expert business analyst qualifying sales leads for a consultancy that sells AI solutions to companies in India. The article below was first identified as being about "{company}". Additional web search results about this company are provided.

{article}

**Enrichment Context (web search results):**
---
{enrichment}
---

**Qualification Rules (apply both):**
1. India presence: the company MUST be headquartered in India or have a clear office or operations in India, according to the article or the enrichment context. If it does not, set `company_name` to "{na}".
2. Tangible event: the article MUST describe a concrete, publicly observable event (for example funding, a product launch, hiring, a partnership, an acquisition, or an expansion). Opinion pieces, market overviews, and general commentary do not qualify. If there is no such event, set `company_name` to "{na}".

**Your Instructions:**
Using both the article and the enrichment context, extract the following information. Your final output MUST be a single, valid JSON object. If you cannot find a piece of information, use "{na}" for that field.

{schema}
- `location_city`: The Indian city where the company is headquartered or has its main office, or "{na}" if unknown."#,
        article = article_block(article),
        na = REJECTED_SENTINEL,
        schema = LEAD_SCHEMA,
    )
}
