//! Web-search enrichment for a candidate company.

use std::time::Duration;

use crate::search::{SearchHit, TavilyClient};

/// Placed in the second-pass prompt when neither search found anything.
pub const NO_ENRICHMENT_FOUND: &str = "No additional information was found via web search.";

/// Snippets longer than this are cut to keep the second prompt bounded.
const MAX_SNIPPET_CHARS: usize = 400;

/// The two supplementary queries, in the order they run: location, then leadership.
#[must_use]
pub fn enrichment_queries(company: &str) -> [(&'static str, String); 2] {
    [
        (
            "Location",
            format!("{company} India headquarters office location"),
        ),
        ("Leadership", format!("{company} CEO CTO leadership team")),
    ]
}

/// Runs enrichment searches and renders the results as prompt context.
#[derive(Debug, Clone)]
pub struct Enricher {
    search: TavilyClient,
    max_results: u32,
    delay: Duration,
}

impl Enricher {
    /// `max_results` bounds the snippets per query; `delay` is slept between
    /// the two searches.
    #[must_use]
    pub fn new(search: TavilyClient, max_results: u32, delay: Duration) -> Self {
        Self {
            search,
            max_results,
            delay,
        }
    }

    /// Build the enrichment context for `company`.
    ///
    /// A failed search is logged and contributes nothing. Returns
    /// [`NO_ENRICHMENT_FOUND`] if no search produced a snippet.
    pub async fn context_for(&self, company: &str) -> String {
        let mut sections = Vec::new();

        for (i, (label, query)) in enrichment_queries(company).into_iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match self.search.search(&query, self.max_results).await {
                Ok(hits) => {
                    let max = usize::try_from(self.max_results).unwrap_or(usize::MAX);
                    let lines = snippet_lines(&hits, max);
                    tracing::debug!(
                        company,
                        %query,
                        snippets = lines.len(),
                        "enrichment search done"
                    );
                    if !lines.is_empty() {
                        sections.push(format!("{label} search results:\n{}", lines.join("\n")));
                    }
                }
                Err(e) => {
                    tracing::warn!(company, %query, error = %e, "enrichment search failed");
                }
            }
        }

        if sections.is_empty() {
            NO_ENRICHMENT_FOUND.to_string()
        } else {
            sections.join("\n\n")
        }
    }
}

/// `- <title>: <snippet>` for the first `max` hits that carry a snippet.
fn snippet_lines(hits: &[SearchHit], max: usize) -> Vec<String> {
    hits.iter()
        .filter(|hit| !hit.content.trim().is_empty())
        .take(max)
        .map(|hit| {
            let snippet = shorten(hit.content.trim(), MAX_SNIPPET_CHARS);
            let title = hit.title.trim();
            if title.is_empty() {
                format!("- {snippet}")
            } else {
                format!("- {title}: {snippet}")
            }
        })
        .collect()
}

fn shorten(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", s[..idx].trim_end()),
        None => s.to_string(),
    }
}
