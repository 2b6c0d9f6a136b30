//! Storage seam used by a tracker run.

use crate::error::LedgerError;
use crate::ledger::{append_expense, init_ledger, load_expenses};
use spendlog_core::Expense;
use std::path::{Path, PathBuf};

/// Somewhere expenses are kept between runs
pub trait ExpenseStore {
    /// Path shown to the user in diagnostics
    fn location(&self) -> &Path;

    /// Prepare empty storage. Returns `true` if anything was created.
    fn init(&self) -> Result<bool, LedgerError>;

    fn append(&self, expense: &Expense) -> Result<(), LedgerError>;

    fn load(&self) -> Result<Vec<Expense>, LedgerError>;
}

/// The delimited ledger file on disk.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExpenseStore for FileLedger {
    fn location(&self) -> &Path {
        &self.path
    }

    fn init(&self) -> Result<bool, LedgerError> {
        init_ledger(&self.path)
    }

    fn append(&self, expense: &Expense) -> Result<(), LedgerError> {
        append_expense(expense, &self.path)
    }

    fn load(&self) -> Result<Vec<Expense>, LedgerError> {
        load_expenses(&self.path)
    }
}
