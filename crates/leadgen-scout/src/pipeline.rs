//! Stage 3 orchestration.

use std::collections::HashSet;

use leadgen_core::{IcpCollection, PipelineFiles, QueryStrategy, RawLead};

use crate::error::ScoutError;
use crate::sources::NewsProvider;

/// Per-ICP outcome of a scout run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcpScoutSummary {
    pub icp_name: String,
    /// Articles returned by all providers before deduplication.
    pub fetched: usize,
    /// Articles whose URL had not been seen earlier in the run.
    pub kept: usize,
    /// Provider calls that failed and contributed nothing.
    pub failed_providers: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutReport {
    pub icps: Vec<IcpScoutSummary>,
}

impl ScoutReport {
    #[must_use]
    pub fn total_kept(&self) -> usize {
        self.icps.iter().map(|s| s.kept).sum()
    }

    #[must_use]
    pub fn total_fetched(&self) -> usize {
        self.icps.iter().map(|s| s.fetched).sum()
    }
}

/// Run the scout over every ICP in `files.icp_profiles` and write
/// `files.raw_leads`.
///
/// ICPs and providers are processed strictly in order. A failed provider call
/// is logged and counted as zero results; the output file is written even if
/// every call failed.
///
/// # Errors
///
/// Returns [`ScoutError::Core`] if the ICP file is missing or malformed, or if
/// the output cannot be written.
pub async fn run_scout(
    providers: &[NewsProvider],
    strategy: QueryStrategy,
    files: &PipelineFiles,
) -> Result<ScoutReport, ScoutError> {
    let collection: IcpCollection = leadgen_core::read_json(&files.icp_profiles)?;

    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut leads: Vec<RawLead> = Vec::new();
    let mut report = ScoutReport::default();

    for icp in &collection.ideal_customer_profiles {
        tracing::info!(icp = %icp.icp_name, %strategy, "searching for signals");

        let mut batch = Vec::new();
        let mut failed_providers = 0;

        for provider in providers {
            let query = provider.query_for(icp, strategy);
            tracing::debug!(icp = %icp.icp_name, provider = provider.name(), %query, "query built");

            match provider.search(&query).await {
                Ok(found) => {
                    tracing::debug!(
                        icp = %icp.icp_name,
                        provider = provider.name(),
                        count = found.len(),
                        "collected articles"
                    );
                    batch.extend(found);
                }
                Err(e) => {
                    failed_providers += 1;
                    tracing::warn!(
                        icp = %icp.icp_name,
                        provider = provider.name(),
                        error = %e,
                        "news search failed; treating as zero results"
                    );
                }
            }
        }

        let fetched = batch.len();
        let kept = dedup_and_tag(batch, &icp.icp_name, &mut seen_urls, &mut leads);

        tracing::info!(icp = %icp.icp_name, fetched, kept, "signals collected");
        report.icps.push(IcpScoutSummary {
            icp_name: icp.icp_name.clone(),
            fetched,
            kept,
            failed_providers,
        });
    }

    leadgen_core::write_json(&files.raw_leads, &leads)?;
    tracing::info!(
        path = %files.raw_leads.display(),
        total = leads.len(),
        "raw leads saved"
    );

    Ok(report)
}

/// Append articles from `batch` whose URL is not in `seen_urls`, tagging each
/// with `icp_name`. First occurrence wins, both within the batch and across
/// calls sharing the same `seen_urls`. Returns how many were appended.
pub fn dedup_and_tag(
    batch: Vec<RawLead>,
    icp_name: &str,
    seen_urls: &mut HashSet<String>,
    out: &mut Vec<RawLead>,
) -> usize {
    let before = out.len();
    out.extend(
        batch
            .into_iter()
            .filter(|lead| seen_urls.insert(lead.url.clone()))
            .map(|mut lead| {
                lead.matched_icp = Some(icp_name.to_string());
                lead
            }),
    );
    out.len() - before
}
