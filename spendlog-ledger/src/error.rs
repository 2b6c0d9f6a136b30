use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the ledger file.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: line {line}: expected 4 fields, found {found}", path.display())]
    FieldCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },
    #[error("{}: line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LedgerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
