//! Create, append to and reload the ledger file.

use crate::error::LedgerError;
use spendlog_core::{Expense, format_amount};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// First line of every ledger file.
pub const HEADER: &str = "date,name,category,amount";

const FIELDS: usize = 4;

/// Create the ledger with its header if it does not exist yet.
///
/// Returns `true` when the file was created. An existing file is left
/// untouched, whatever its content.
pub fn init_ledger(path: impl AsRef<Path>) -> Result<bool, LedgerError> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "ledger already present");
            return Ok(false);
        }
        Err(e) => return Err(LedgerError::io(path, e)),
    };

    writeln!(file, "{HEADER}").map_err(|e| LedgerError::io(path, e))?;
    tracing::info!(path = %path.display(), "created ledger");
    Ok(true)
}

/// Append one expense as a single unquoted row.
pub fn append_expense(expense: &Expense, path: impl AsRef<Path>) -> Result<(), LedgerError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| LedgerError::io(path, e))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(file);

    let date = expense.date.format("%Y-%m-%d").to_string();
    let amount = format_amount(expense.amount);
    wtr.write_record([
        date.as_str(),
        expense.name.as_str(),
        expense.category.as_str(),
        amount.as_str(),
    ])?;
    wtr.flush().map_err(|e| LedgerError::io(path, e))?;

    tracing::debug!(path = %path.display(), name = %expense.name, amount = expense.amount, "appended expense");
    Ok(())
}

/// Read every expense back, skipping the header line.
///
/// Rows are trusted as written: category labels are not checked against the
/// current menu. A row without exactly four fields, or whose date or amount
/// does not parse, fails the whole load.
pub fn load_expenses(path: impl AsRef<Path>) -> Result<Vec<Expense>, LedgerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LedgerError::io(path, e))?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut expenses = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != FIELDS {
            return Err(LedgerError::FieldCount {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        // Dates are decoded as `NaiveDate`, so a row with a date that is not
        // YYYY-MM-DD fails the load like a bad amount does. Blank lines never
        // get here: the csv reader skips them.
        let expense = record.deserialize::<Expense>(None).map_err(|e| LedgerError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: e.to_string(),
        })?;
        expenses.push(expense);
    }

    tracing::debug!(path = %path.display(), count = expenses.len(), "loaded ledger");
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spendlog-ledger-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("expenses.csv");
        let _ = fs::remove_file(&path);
        path
    }

    fn coffee() -> Expense {
        Expense::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(), "Coffee", "🍔 Food", 3.5)
    }

    #[test]
    fn test_init_writes_header_once() {
        let path = scratch("init");
        assert!(init_ledger(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,name,category,amount\n");

        assert!(!init_ledger(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,name,category,amount\n");
    }

    #[test]
    fn test_init_keeps_existing_rows() {
        let path = scratch("init-existing");
        init_ledger(&path).unwrap();
        append_expense(&coffee(), &path).unwrap();
        let before = fs::read(&path).unwrap();

        init_ledger(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_init_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join(format!("spendlog-missing-{}", std::process::id()))
            .join("nested")
            .join("expenses.csv");
        let err = init_ledger(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Io { .. }));
    }

    #[test]
    fn test_append_writes_verbatim_row() {
        let path = scratch("append");
        init_ledger(&path).unwrap();
        append_expense(&coffee(), &path).unwrap();
        append_expense(
            &Expense::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), "Rent \"share\"", "🏠 Home", 200.0),
            &path,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,name,category,amount\n\
             2026-10-15,Coffee,🍔 Food,3.5\n\
             2026-10-16,Rent \"share\",🏠 Home,200.0\n"
        );
    }

    #[test]
    fn test_load_round_trip() {
        let path = scratch("load");
        init_ledger(&path).unwrap();
        append_expense(&coffee(), &path).unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded, vec![coffee()]);
    }

    #[test]
    fn test_load_trusts_unknown_categories() {
        let path = scratch("legacy");
        fs::write(&path, "date,name,category,amount\n2025-01-02,Taxi,Transport,12.0\n").unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded[0].category, "Transport");
        assert_eq!(loaded[0].amount, 12.0);
    }

    #[test]
    fn test_load_rejects_comma_in_name() {
        let path = scratch("comma");
        init_ledger(&path).unwrap();
        append_expense(
            &Expense::new(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(), "Eggs, milk", "🍔 Food", 6.0),
            &path,
        )
        .unwrap();

        let err = load_expenses(&path).unwrap_err();
        match err {
            LedgerError::FieldCount { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rejects_bad_amount() {
        let path = scratch("bad-amount");
        fs::write(&path, "date,name,category,amount\n2026-10-15,Coffee,🍔 Food,lots\n").unwrap();
        assert!(matches!(
            load_expenses(&path).unwrap_err(),
            LedgerError::Malformed { line: 2, .. }
        ));
    }

    #[test]
    fn test_load_rejects_bad_date() {
        let path = scratch("bad-date");
        fs::write(&path, "date,name,category,amount\n15/10/2026,Coffee,🍔 Food,3.5\n").unwrap();
        assert!(matches!(
            load_expenses(&path).unwrap_err(),
            LedgerError::Malformed { line: 2, .. }
        ));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let path = scratch("blank");
        fs::write(
            &path,
            "date,name,category,amount\n2026-10-14,Tea,🍔 Food,2.0\n\n2026-10-15,Coffee,🍔 Food,3.5\n",
        )
        .unwrap();
        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1], coffee());
    }

    #[test]
    fn test_load_header_only() {
        let path = scratch("empty");
        init_ledger(&path).unwrap();
        assert!(load_expenses(&path).unwrap().is_empty());
    }
}
