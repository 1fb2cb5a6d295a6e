//! CLI entry point for the bills insights reports.
//!
//! With no subcommand, reads the four tables from the models directory and
//! writes both reports to the results directory.

use anyhow::{Context, Result};
use bills_insights::output::print_json;
use bills_insights::{InsightsConfig, MissingCounts, Report, run};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bills_insights")]
#[command(about = "Support and opposition reports for bills and legislators", long_about = None)]
struct Cli {
    /// Directory holding bills.csv, votes.csv, vote_results.csv and legislators.csv
    #[arg(short, long, value_name = "DIR")]
    models_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// How to write a bill count when no votes matched: `zero` or `empty`
    #[arg(long, value_enum, value_name = "POLICY")]
    missing_counts: Option<MissingCountsArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write both reports (default)
    All,
    /// Write legislators-support-oppose-count.csv only
    Legislators,
    /// Write bills.csv only
    Bills,
}

#[derive(Clone, Copy, ValueEnum)]
enum MissingCountsArg {
    Zero,
    Empty,
}

impl From<MissingCountsArg> for MissingCounts {
    fn from(arg: MissingCountsArg) -> Self {
        match arg {
            MissingCountsArg::Zero => MissingCounts::Zero,
            MissingCountsArg::Empty => MissingCounts::Empty,
        }
    }
}

impl From<Commands> for Report {
    fn from(command: Commands) -> Self {
        match command {
            Commands::All => Report::All,
            Commands::Legislators => Report::Legislators,
            Commands::Bills => Report::Bills,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bills_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bills_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = InsightsConfig::load(
        cli.models_dir,
        cli.results_dir,
        cli.missing_counts.map(MissingCounts::from),
    );
    let report = cli.command.map(Report::from).unwrap_or_default();

    info!(
        models_dir = %config.models_dir.display(),
        results_dir = %config.results_dir.display(),
        ?report,
        "Starting run"
    );

    let summary = match run(&config, report) {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Run aborted");
            return Err(e).context("failed to produce reports");
        }
    };

    print_json(&summary)?;
    Ok(())
}
