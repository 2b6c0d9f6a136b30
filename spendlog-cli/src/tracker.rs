//! One tracker run: ensure the ledger exists, record an expense, then report
//! on everything stored so far.

use crate::prompt::{RetryPolicy, collect_expense};
use crate::report;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendlog_core::{Summary, TrackerConfig};
use spendlog_ledger::{ExpenseStore, FileLedger, LedgerError};
use std::io::{BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    config: &TrackerConfig,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
    policy: RetryPolicy,
) -> Result<Summary> {
    let store = FileLedger::new(&config.storage_path);
    run_with_store(config, &store, today, input, out, policy)
}

pub fn run_with_store<S: ExpenseStore, R: BufRead, W: Write>(
    config: &TrackerConfig,
    store: &S,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
    policy: RetryPolicy,
) -> Result<Summary> {
    let path = store.location();
    writeln!(out, "Running Expense Tracker")?;

    store
        .init()
        .with_context(|| format!("initializing {}", path.display()))?;

    let expense = collect_expense(input, out, &config.categories, today, policy)?;

    // A failed append is reported and the run carries on; the summary below
    // is rebuilt from storage, so the lost expense simply does not appear.
    if let Err(e) = store.append(&expense) {
        tracing::error!(path = %path.display(), error = %e, "append failed");
        let reason = match &e {
            LedgerError::Io { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        writeln!(out, "Failed to write to file {}: {}", path.display(), reason)?;
    }

    let expenses = store
        .load()
        .with_context(|| format!("reading {}", path.display()))?;
    let summary = Summary::compute(&expenses, config.budget, today);
    report::print(out, &summary)?;

    Ok(summary)
}
