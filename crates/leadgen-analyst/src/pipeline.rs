//! Stage 4 orchestration.

use leadgen_core::{PipelineFiles, QualifiedLead, RawLead};
use leadgen_llm::ChatClient;

use crate::enrich::Enricher;
use crate::error::AnalystError;
use crate::prompts::{enriched_prompt, extraction_prompt, ANALYST_SYSTEM_PROMPT};

/// Counters for one analyst run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Articles read from the raw leads file.
    pub analyzed: usize,
    /// Articles whose extraction failed and produced no record.
    pub failed: usize,
    /// Records written to the qualified leads file.
    pub kept: usize,
    /// Records dropped because the company name did not resolve.
    pub filtered: usize,
}

/// Extract a lead record from one article.
///
/// With `enricher` set and a resolved company on the first pass, the record is
/// replaced by a second extraction that sees the web-search context. A first
/// pass that names no company is returned as-is and filtered by the caller.
///
/// # Errors
///
/// Returns [`AnalystError::Llm`] if a completion fails, or
/// [`AnalystError::Core`] if the model reply is not a lead object.
pub async fn analyze_article(
    chat: &ChatClient,
    enricher: Option<&Enricher>,
    article: &RawLead,
) -> Result<QualifiedLead, AnalystError> {
    let first = extract(chat, &extraction_prompt(article)).await?;

    let Some(enricher) = enricher else {
        return Ok(first);
    };
    let Some(company) = first.resolved_company() else {
        tracing::debug!(url = %article.url, "no company identified; skipping enrichment");
        return Ok(first);
    };

    tracing::info!(company, url = %article.url, "enriching lead");
    let context = enricher.context_for(company).await;
    let second = extract(chat, &enriched_prompt(article, company, &context)).await?;

    if !second.is_qualified() {
        tracing::info!(company, url = %article.url, "lead rejected by qualification rules");
    }
    Ok(second)
}

async fn extract(chat: &ChatClient, prompt: &str) -> Result<QualifiedLead, AnalystError> {
    let raw = chat.complete_json(ANALYST_SYSTEM_PROMPT, prompt).await?;
    Ok(leadgen_core::parse_json("analyst model response", &raw)?)
}

/// Analyse every article in `files.raw_leads` and write the qualified subset to
/// `files.qualified_leads`.
///
/// Articles are handled one at a time in file order. A failed article is
/// logged and skipped. The output is written even when it ends up empty.
///
/// # Errors
///
/// Returns [`AnalystError::Core`] if the raw leads file is missing or
/// malformed, or if the output cannot be written.
pub async fn run_analyst(
    chat: &ChatClient,
    enricher: Option<&Enricher>,
    files: &PipelineFiles,
) -> Result<AnalysisReport, AnalystError> {
    let articles: Vec<RawLead> = leadgen_core::read_json(&files.raw_leads)?;
    let mut report = AnalysisReport {
        analyzed: articles.len(),
        ..AnalysisReport::default()
    };

    tracing::info!(
        articles = articles.len(),
        model = chat.model(),
        enriched = enricher.is_some(),
        "analyzing raw leads"
    );

    let mut records = Vec::with_capacity(articles.len());
    for (i, article) in articles.iter().enumerate() {
        tracing::debug!(
            index = i + 1,
            total = articles.len(),
            url = %article.url,
            "analyzing article"
        );
        match analyze_article(chat, enricher, article).await {
            Ok(record) => records.push(record),
            Err(e) => {
                report.failed += 1;
                tracing::warn!(url = %article.url, error = %e, "article analysis failed; skipping");
            }
        }
    }

    let qualified = retain_qualified(records, &mut report);
    leadgen_core::write_json(&files.qualified_leads, &qualified)?;
    tracing::info!(
        path = %files.qualified_leads.display(),
        kept = report.kept,
        filtered = report.filtered,
        failed = report.failed,
        "qualified leads saved"
    );

    Ok(report)
}

fn retain_qualified(
    records: Vec<QualifiedLead>,
    report: &mut AnalysisReport,
) -> Vec<QualifiedLead> {
    let total = records.len();
    let qualified: Vec<QualifiedLead> = records
        .into_iter()
        .filter(QualifiedLead::is_qualified)
        .collect();
    report.kept = qualified.len();
    report.filtered = total - qualified.len();
    qualified
}
