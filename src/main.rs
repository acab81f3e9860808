use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use trek::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for trek::AppCommand {
    fn from(cmd: Commands) -> trek::AppCommand {
        match cmd {
            Commands::Summary => trek::AppCommand::Summary,
            Commands::Daily => trek::AppCommand::Daily,
            Commands::Category => trek::AppCommand::Category,
            Commands::Budget { as_of } => trek::AppCommand::Budget { as_of },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display all trip reports
    Summary,
    /// Display spending grouped by day
    Daily,
    /// Display spending grouped by category
    Category,
    /// Display expected vs actual spend against the daily budget
    Budget {
        /// Date to compare up to (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => trek::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = trek::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
trip:
  kind: international
  start_date: 2026-01-01
  end_date: 2026-01-07
  daily_budget: 200000
  currency: "USD"

expenses: []
  # - date: 2026-01-01
  #   amount: 20
  #   category: food
  #   method: card

providers:
  exchange_rate:
    base_url: "https://api.exchangerate-api.com/v4/latest"

home_currency: "COP"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
