//! Boolean news query construction from an ICP.

use leadgen_core::{Icp, QueryStrategy};

/// Required term of the canonical strategy, and the fallback query when an
/// ICP has no usable terms at all.
pub const AI_TERM: &str = "\"AI\"";

/// Build the search query for `icp`.
///
/// - [`QueryStrategy::AiFilter`]: `("Insurance" OR "Banking") AND "AI"`
/// - [`QueryStrategy::BuyingSignals`]: `("Insurance") AND ("hiring AI engineers")`
///
/// Blank terms are ignored. Never returns an empty string: with no terms the
/// query degrades to [`AI_TERM`].
#[must_use]
pub fn build_query(icp: &Icp, strategy: QueryStrategy) -> String {
    compose(&icp.industry_vertical, &icp.buying_signals, strategy)
}

/// Like [`build_query`], but drops trailing terms until the query fits in
/// `max_chars`. Buying signals are dropped before industry terms.
#[must_use]
pub fn build_query_capped(icp: &Icp, strategy: QueryStrategy, max_chars: usize) -> String {
    let mut industries: Vec<&str> = usable_terms(&icp.industry_vertical).collect();
    let mut signals: Vec<&str> = usable_terms(&icp.buying_signals).collect();

    loop {
        let query = compose(&industries, &signals, strategy);
        if query.chars().count() <= max_chars {
            return query;
        }
        if strategy == QueryStrategy::BuyingSignals && signals.len() > 1 {
            signals.pop();
        } else if industries.len() > 1 {
            industries.pop();
        } else if strategy == QueryStrategy::BuyingSignals && !signals.is_empty() {
            signals.pop();
        } else if !industries.is_empty() {
            industries.pop();
        } else {
            return query;
        }
    }
}

fn compose<S: AsRef<str>>(industries: &[S], signals: &[S], strategy: QueryStrategy) -> String {
    let industry_group = or_group(industries);
    match strategy {
        QueryStrategy::AiFilter => match industry_group {
            Some(group) => format!("{group} AND {AI_TERM}"),
            None => AI_TERM.to_string(),
        },
        QueryStrategy::BuyingSignals => {
            let groups: Vec<String> = [industry_group, or_group(signals)]
                .into_iter()
                .flatten()
                .collect();
            if groups.is_empty() {
                AI_TERM.to_string()
            } else {
                groups.join(" AND ")
            }
        }
    }
}

fn usable_terms<S: AsRef<str>>(terms: &[S]) -> impl Iterator<Item = &str> {
    terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
}

/// `("a" OR "b")`, or `None` if there are no usable terms. Embedded double
/// quotes are removed so they cannot terminate the phrase early.
fn or_group<S: AsRef<str>>(terms: &[S]) -> Option<String> {
    let quoted: Vec<String> = usable_terms(terms)
        .map(|t| format!("\"{}\"", t.replace('"', "")))
        .collect();
    if quoted.is_empty() {
        None
    } else {
        Some(format!("({})", quoted.join(" OR ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icp(industries: &[&str], signals: &[&str]) -> Icp {
        Icp {
            icp_name: "Test ICP".to_string(),
            industry_vertical: industries.iter().map(ToString::to_string).collect(),
            location_cities: vec![],
            key_challenges: vec![],
            buying_signals: signals.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn ai_filter_requires_industry_and_ai() {
        let q = build_query(
            &icp(&["Insurance"], &["hiring AI engineers"]),
            QueryStrategy::AiFilter,
        );
        assert_eq!(q, r#"("Insurance") AND "AI""#);
        assert!(q.contains(r#""Insurance""#));
        assert!(q.contains(r#""AI""#));
    }

    #[test]
    fn ai_filter_ors_multiple_industries() {
        let q = build_query(&icp(&["Insurance", "Banking"], &[]), QueryStrategy::AiFilter);
        assert_eq!(q, r#"("Insurance" OR "Banking") AND "AI""#);
    }

    #[test]
    fn buying_signals_strategy_combines_both_groups() {
        let q = build_query(
            &icp(&["Insurance"], &["hiring AI engineers", "launching AI product"]),
            QueryStrategy::BuyingSignals,
        );
        assert_eq!(
            q,
            r#"("Insurance") AND ("hiring AI engineers" OR "launching AI product")"#
        );
    }

    #[test]
    fn missing_buying_signals_still_yields_query() {
        let q = build_query(&icp(&["Retail"], &[]), QueryStrategy::BuyingSignals);
        assert_eq!(q, r#"("Retail")"#);
    }

    #[test]
    fn no_terms_degrades_to_ai_for_every_strategy() {
        for strategy in [QueryStrategy::AiFilter, QueryStrategy::BuyingSignals] {
            assert_eq!(build_query(&icp(&[], &[]), strategy), AI_TERM);
        }
    }

    #[test]
    fn blank_terms_are_ignored() {
        let q = build_query(&icp(&["  ", ""], &[]), QueryStrategy::AiFilter);
        assert_eq!(q, AI_TERM);
    }

    #[test]
    fn embedded_quotes_are_stripped() {
        let q = build_query(&icp(&[r#"Tele"com"#], &[]), QueryStrategy::AiFilter);
        assert_eq!(q, r#"("Telecom") AND "AI""#);
    }

    #[test]
    fn capped_query_drops_trailing_industries() {
        let icp = icp(&["Insurance", "Banking", "Financial Services"], &[]);
        let full = build_query(&icp, QueryStrategy::AiFilter);
        let capped = build_query_capped(&icp, QueryStrategy::AiFilter, full.len() - 1);
        assert_eq!(capped, r#"("Insurance" OR "Banking") AND "AI""#);
    }

    #[test]
    fn capped_query_drops_signals_before_industries() {
        let icp = icp(&["Insurance"], &["hiring AI engineers", "AI partnership"]);
        let capped = build_query_capped(&icp, QueryStrategy::BuyingSignals, 50);
        assert_eq!(capped, r#"("Insurance") AND ("hiring AI engineers")"#);
    }

    #[test]
    fn capped_query_within_limit_is_unchanged() {
        let icp = icp(&["Insurance"], &[]);
        assert_eq!(
            build_query_capped(&icp, QueryStrategy::AiFilter, 500),
            build_query(&icp, QueryStrategy::AiFilter)
        );
    }

    #[test]
    fn capped_query_never_empty() {
        let icp = icp(&["A very long industry name indeed"], &[]);
        assert_eq!(build_query_capped(&icp, QueryStrategy::AiFilter, 3), AI_TERM);
    }
}
