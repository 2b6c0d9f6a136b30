//! Tracker configuration: budget, ledger location and category menu.

use crate::expense::Category;
use std::path::PathBuf;

/// Default monthly budget.
pub const DEFAULT_BUDGET: f64 = 400.0;
/// Default ledger file, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "expenses.csv";

/// Everything a tracker run needs that is not read from the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Monthly spending ceiling
    pub budget: f64,
    pub storage_path: PathBuf,
    /// Menu shown when picking a category, in display order
    pub categories: Vec<Category>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            storage_path: PathBuf::from(DEFAULT_LEDGER_FILE),
            categories: Category::ALL.to_vec(),
        }
    }
}

impl TrackerConfig {
    /// Same defaults, different ledger file.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.budget, 400.0);
        assert_eq!(cfg.storage_path, PathBuf::from("expenses.csv"));
        assert_eq!(cfg.categories.len(), 5);
        assert_eq!(cfg.categories[0], Category::Food);
    }

    #[test]
    fn test_with_storage_path() {
        let cfg = TrackerConfig::default().with_storage_path("/tmp/ledger.csv");
        assert_eq!(cfg.storage_path, PathBuf::from("/tmp/ledger.csv"));
        assert_eq!(cfg.budget, DEFAULT_BUDGET);
    }
}
