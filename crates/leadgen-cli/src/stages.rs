//! Stage command handlers for the CLI.
//!
//! Each handler checks the credentials its stage needs, builds the clients
//! from [`AppConfig`], runs the stage, and prints a short human-readable
//! report. Nothing is sent to an external API until the checks pass.

use leadgen_analyst::{Enricher, TavilyClient};
use leadgen_core::{AnalystMode, AppConfig, PipelineFiles, QueryStrategy};
use leadgen_llm::ChatClient;

fn chat_client(config: &AppConfig, model: &str) -> anyhow::Result<ChatClient> {
    let api_key = config.require_openai_key()?;
    Ok(ChatClient::new(
        api_key,
        model,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}

/// Stage 1: summarize the context file and print the summary.
///
/// # Errors
///
/// Returns an error if `OPENAI_API_KEY` is unset, the context file is missing
/// or blank, or the model call fails.
pub(crate) async fn run_summarize(config: &AppConfig, files: &PipelineFiles) -> anyhow::Result<()> {
    let client = chat_client(config, &config.strategy_model)?;

    println!("Summarizing {}", files.context.display());
    let summary = leadgen_strategist::run_summarizer(&client, files).await?;

    println!();
    println!("{summary}");
    println!();
    println!("summary saved to {}", files.summary.display());
    Ok(())
}

/// Stage 2: generate ICPs from the saved summary and print them.
///
/// # Errors
///
/// Returns an error if `OPENAI_API_KEY` is unset, the summary file is missing
/// or blank, or the model reply is not a valid ICP collection.
pub(crate) async fn run_generate_icps(
    config: &AppConfig,
    files: &PipelineFiles,
) -> anyhow::Result<()> {
    let client = chat_client(config, &config.strategy_model)?;

    println!("Generating ICPs from {}", files.summary.display());
    let collection = leadgen_strategist::run_icp_generator(&client, files).await?;

    println!();
    println!("{}", leadgen_core::to_pretty_json(&collection)?);
    println!();
    println!(
        "{} ICPs saved to {}",
        collection.ideal_customer_profiles.len(),
        files.icp_profiles.display()
    );
    Ok(())
}

/// Stage 3: search every configured news provider for each ICP.
///
/// # Errors
///
/// Returns an error if no news provider key is set, the ICP file is missing or
/// malformed, or the raw leads file cannot be written. Individual provider
/// failures are logged and skipped.
pub(crate) async fn run_scout(
    config: &AppConfig,
    files: &PipelineFiles,
    strategy: QueryStrategy,
) -> anyhow::Result<()> {
    config.require_any_news_provider()?;
    let providers = leadgen_scout::providers_from_config(config)?;

    let names: Vec<&str> = providers.iter().map(leadgen_scout::NewsProvider::name).collect();
    println!("Scouting with {} ({strategy} queries)", names.join(", "));

    let report = leadgen_scout::run_scout(&providers, strategy, files).await?;

    for icp in &report.icps {
        let failures = if icp.failed_providers > 0 {
            format!(", {} provider call(s) failed", icp.failed_providers)
        } else {
            String::new()
        };
        println!(
            "  {}: {} found, {} new{failures}",
            icp.icp_name, icp.fetched, icp.kept
        );
    }
    println!(
        "{} unique articles saved to {}",
        report.total_kept(),
        files.raw_leads.display()
    );
    Ok(())
}

/// Stage 4: extract, optionally enrich, and filter leads.
///
/// # Errors
///
/// Returns an error if `OPENAI_API_KEY` is unset, `TAVILY_API_KEY` is unset in
/// enriched mode, the raw leads file is missing or malformed, or the output
/// cannot be written. Individual article failures are logged and skipped.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    files: &PipelineFiles,
    mode: AnalystMode,
) -> anyhow::Result<()> {
    let chat = chat_client(config, &config.analyst_model)?;
    let enricher = match mode {
        AnalystMode::Enriched => {
            let search = TavilyClient::new(
                config.require_tavily_key()?,
                config.request_timeout_secs,
                &config.user_agent,
            )?;
            Some(Enricher::new(
                search,
                config.enrich_max_results,
                config.enrich_delay(),
            ))
        }
        AnalystMode::Simple => None,
    };

    println!("Analyzing {} ({mode} mode)", files.raw_leads.display());
    let report = leadgen_analyst::run_analyst(&chat, enricher.as_ref(), files).await?;

    if report.analyzed == 0 {
        println!("no raw leads to analyze");
    }
    println!(
        "{} analyzed, {} failed, {} filtered, {} qualified",
        report.analyzed, report.failed, report.filtered, report.kept
    );
    println!(
        "{} qualified leads saved to {}",
        report.kept,
        files.qualified_leads.display()
    );
    Ok(())
}
