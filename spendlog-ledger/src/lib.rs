//! spendlog-ledger: the append-only expense file.
//!
//! The format is a header line followed by one comma-separated row per expense:
//!
//! ```text
//! date,name,category,amount
//! 2026-10-15,Coffee,🍔 Food,3.5
//! ```
//!
//! Fields are never quoted or escaped, so a comma inside a name splits the row
//! and the ledger refuses to load it.

pub mod error;
pub mod ledger;
pub mod store;

pub use error::LedgerError;
pub use ledger::{HEADER, append_expense, init_ledger, load_expenses};
pub use store::{ExpenseStore, FileLedger};
