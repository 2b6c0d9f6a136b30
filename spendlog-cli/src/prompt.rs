//! Interactive collection of one expense.
//!
//! Validation of each answer lives in `spendlog_core::input`; this module only
//! talks to the terminal and decides when to give up.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use spendlog_core::{Category, Expense, parse_amount, parse_selection};
use std::io::{BufRead, Write};

/// How many times a prompt loop may be attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    /// `None` keeps asking until valid input arrives or input ends.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts.max(1)),
        }
    }

    fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        bail!("input closed before an expense was entered");
    }
    // Only the line terminator goes; the name is stored as typed.
    Ok(s.trim_end_matches(['\n', '\r']).to_string())
}

/// Ask for a name, amount and category, retrying rejected answers per `policy`.
pub fn collect_expense<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    categories: &[Category],
    today: NaiveDate,
    policy: RetryPolicy,
) -> Result<Expense> {
    let (name, amount) = collect_name_and_amount(input, out, policy)?;
    let category = collect_category(input, out, categories, policy)?;
    tracing::debug!(%name, amount, category = category.label(), "expense collected");
    Ok(Expense::new(today, name, category.label(), amount))
}

fn collect_name_and_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    policy: RetryPolicy,
) -> Result<(String, f64)> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let name = prompt(input, out, "Enter expense name: ")?;
        let raw = prompt(input, out, "Enter expense amount: ")?;
        match parse_amount(&raw) {
            Ok(amount) => return Ok((name, amount)),
            Err(e) => {
                tracing::debug!(input = %raw, attempts, "amount rejected");
                writeln!(out, "{}", e)?;
                if policy.exhausted(attempts) {
                    bail!("no valid amount after {attempts} attempts");
                }
            }
        }
    }
}

fn collect_category<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    categories: &[Category],
    policy: RetryPolicy,
) -> Result<Category> {
    if categories.is_empty() {
        bail!("no categories configured");
    }

    let label = format!("Enter a category number (1-{}): ", categories.len());
    let mut attempts = 0;
    loop {
        attempts += 1;
        writeln!(out, "Select a category:")?;
        for (i, category) in categories.iter().enumerate() {
            writeln!(out, " {}. {}", i + 1, category)?;
        }

        let raw = prompt(input, out, &label)?;
        match parse_selection(&raw, categories.len()) {
            Ok(index) => return Ok(categories[index]),
            Err(e) => {
                tracing::debug!(input = %raw, attempts, "category selection rejected");
                writeln!(out, "{}", e)?;
                if policy.exhausted(attempts) {
                    bail!("no valid category after {attempts} attempts");
                }
            }
        }
    }
}
