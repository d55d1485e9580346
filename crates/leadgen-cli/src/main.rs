mod stages;

use clap::{Parser, Subcommand, ValueEnum};
use leadgen_core::{AnalystMode, PipelineFiles, QueryStrategy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadgen")]
#[command(about = "Turn a company description into qualified sales leads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize the company context file into a business summary
    Summarize,
    /// Generate Ideal Customer Profiles from the business summary
    GenerateIcps,
    /// Search news providers for articles matching each ICP
    Scout {
        /// Query construction strategy (defaults to LEADGEN_QUERY_STRATEGY)
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Extract and qualify leads from the scouted articles
    Analyze {
        /// Analysis mode (defaults to LEADGEN_ANALYST_MODE)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    AiFilter,
    BuyingSignals,
}

impl From<StrategyArg> for QueryStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::AiFilter => Self::AiFilter,
            StrategyArg::BuyingSignals => Self::BuyingSignals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Enriched,
    Simple,
}

impl From<ModeArg> for AnalystMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Enriched => Self::Enriched,
            ModeArg::Simple => Self::Simple,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leadgen_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(?config, "configuration loaded");
    let files = PipelineFiles::in_dir(&config.work_dir);

    match cli.command {
        Commands::Summarize => stages::run_summarize(&config, &files).await,
        Commands::GenerateIcps => stages::run_generate_icps(&config, &files).await,
        Commands::Scout { strategy } => {
            let strategy = strategy.map_or(config.query_strategy, QueryStrategy::from);
            stages::run_scout(&config, &files, strategy).await
        }
        Commands::Analyze { mode } => {
            let mode = mode.map_or(config.analyst_mode, AnalystMode::from);
            stages::run_analyze(&config, &files, mode).await
        }
    }
}

#[cfg(test)]
mod tests;
