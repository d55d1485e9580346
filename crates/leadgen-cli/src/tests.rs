use super::*;

#[test]
fn parses_summarize_command() {
    let cli = Cli::try_parse_from(["leadgen", "summarize"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Summarize));
}

#[test]
fn parses_generate_icps_command() {
    let cli = Cli::try_parse_from(["leadgen", "generate-icps"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::GenerateIcps));
}

#[test]
fn scout_strategy_defaults_to_none() {
    let cli = Cli::try_parse_from(["leadgen", "scout"]).unwrap();
    assert!(matches!(cli.command, Commands::Scout { strategy: None }));
}

#[test]
fn scout_accepts_buying_signals_strategy() {
    let cli = Cli::try_parse_from(["leadgen", "scout", "--strategy", "buying-signals"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Scout {
            strategy: Some(StrategyArg::BuyingSignals)
        }
    ));
}

#[test]
fn scout_rejects_unknown_strategy() {
    assert!(Cli::try_parse_from(["leadgen", "scout", "--strategy", "random"]).is_err());
}

#[test]
fn analyze_accepts_simple_mode() {
    let cli = Cli::try_parse_from(["leadgen", "analyze", "--mode", "simple"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Analyze {
            mode: Some(ModeArg::Simple)
        }
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["leadgen"]).is_err());
}

#[test]
fn arg_enums_map_to_core_types() {
    assert_eq!(QueryStrategy::from(StrategyArg::AiFilter), QueryStrategy::AiFilter);
    assert_eq!(
        QueryStrategy::from(StrategyArg::BuyingSignals),
        QueryStrategy::BuyingSignals
    );
    assert_eq!(AnalystMode::from(ModeArg::Enriched), AnalystMode::Enriched);
    assert_eq!(AnalystMode::from(ModeArg::Simple), AnalystMode::Simple);
}

fn config_without_tavily() -> leadgen_core::AppConfig {
    leadgen_core::AppConfig {
        openai_api_key: Some("sk-test".to_string()),
        gnews_api_key: None,
        newsapi_key: None,
        tavily_api_key: None,
        log_level: "info".to_string(),
        work_dir: std::path::PathBuf::from("."),
        strategy_model: "gpt-4o-mini".to_string(),
        analyst_model: "gpt-4o".to_string(),
        request_timeout_secs: 5,
        user_agent: "leadgen-test/0.1".to_string(),
        query_strategy: QueryStrategy::AiFilter,
        analyst_mode: AnalystMode::Enriched,
        news_max_results: 5,
        enrich_max_results: 3,
        enrich_delay_ms: 0,
    }
}

#[tokio::test]
async fn enriched_analyze_without_tavily_key_fails_before_reading_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());

    let err = stages::run_analyze(&config_without_tavily(), &files, AnalystMode::Enriched)
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.downcast_ref::<leadgen_core::ConfigError>(),
            Some(leadgen_core::ConfigError::MissingEnvVar(var)) if var == "TAVILY_API_KEY"
        ),
        "expected missing TAVILY_API_KEY, got: {err:?}"
    );
    assert!(!files.qualified_leads.exists());
}

#[tokio::test]
async fn simple_analyze_needs_no_tavily_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());

    let err = stages::run_analyze(&config_without_tavily(), &files, AnalystMode::Simple)
        .await
        .unwrap_err();

    assert!(
        err.downcast_ref::<leadgen_core::ConfigError>().is_none(),
        "simple mode should get past the key checks, got: {err:?}"
    );
    assert!(err.downcast_ref::<leadgen_analyst::AnalystError>().is_some());
}

#[tokio::test]
async fn scout_without_any_news_key_fails_before_reading_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());

    let err = stages::run_scout(&config_without_tavily(), &files, QueryStrategy::AiFilter)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<leadgen_core::ConfigError>(),
        Some(leadgen_core::ConfigError::NoNewsProviders)
    ));
    assert!(!files.raw_leads.exists());
}
