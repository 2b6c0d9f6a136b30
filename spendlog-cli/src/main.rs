use anyhow::Result;
use clap::Parser;
use spendlog_core::TrackerConfig;
use std::io;
use tracing_subscriber::EnvFilter;

mod prompt;
mod report;
mod tracker;

use prompt::RetryPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "spendlog",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPENDLOG_BUILD_SHA"), ")"),
    about = "Log one expense to expenses.csv and report against the monthly budget"
)]
struct Cli {
    /// Give up after this many invalid answers to a prompt (default: keep asking)
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TrackerConfig::default();
    let policy = match cli.max_attempts {
        Some(n) => RetryPolicy::bounded(n),
        None => RetryPolicy::unbounded(),
    };
    let today = chrono::Local::now().date_naive();

    tracing::debug!(?config, %today, ?policy, "starting run");

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    tracker::run(&config, today, &mut input, &mut out, policy)?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "spendlog={level},spendlog_core={level},spendlog_ledger={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
