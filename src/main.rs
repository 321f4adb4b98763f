use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::Config;
use dashboard::{DashboardView, FormatOptions};
use std::path::PathBuf;

/// The main entry point for the finscope dashboard.
fn main() -> anyhow::Result<()> {
    // A .env file is optional; it only carries FINSCOPE__* and RUST_LOG overrides.
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.strict {
        config.metrics.strict = true;
    }

    // Keep the guard alive so the log file is flushed on exit.
    let _log_guard = configuration::init_tracing(&config.logging, cli.verbose)?;
    tracing::info!("Starting finscope (strict metrics: {})", config.metrics.strict);

    // Execute the appropriate command
    match cli.command {
        Commands::Dashboard => handle_dashboard(&config)?,
        Commands::Metrics(args) => handle_metrics(args, &config)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial statement analysis for a fixed three-year dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file (defaults to ./finscope.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on zero denominators instead of showing n/a.
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full dashboard: KPI cards, charts as tables, and insights.
    Dashboard,
    /// Print every derived metric for every fiscal year.
    Metrics(MetricsArgs),
}

#[derive(Parser)]
struct MetricsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_dashboard(config: &Config) -> anyhow::Result<()> {
    let raw = dataset::financial_data();
    let view = DashboardView::build(&raw, dataset::COMPANY, config)?;
    println!("{}", dashboard::render_dashboard(&view));
    Ok(())
}

fn handle_metrics(args: MetricsArgs, config: &Config) -> anyhow::Result<()> {
    let raw = dataset::financial_data();
    let records = dashboard::calculate(&raw, config)?;

    if let Some(latest) = analytics::latest(&records) {
        tracing::debug!("Latest fiscal year: {}", latest.year());
    }

    let output = match args.format {
        OutputFormat::Table => {
            dashboard::render_metrics_table(&records, &FormatOptions::from(&config.display))
        }
        OutputFormat::Json => dashboard::render_metrics_json(&records)?,
    };
    println!("{output}");
    Ok(())
}
