//! spendlog-core: expense records, budget configuration, input validation and
//! the monthly summary computation.

pub mod config;
pub mod error;
pub mod expense;
pub mod input;
pub mod summary;
pub mod time;

pub use config::TrackerConfig;
pub use error::InputError;
pub use expense::{Category, Expense, format_amount};
pub use input::{parse_amount, parse_selection};
pub use summary::{BudgetWarning, CategoryTotal, Summary};
pub use time::{days_in_month, remaining_days};
