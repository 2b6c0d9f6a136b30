//! Expense record and the fixed category set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged expense.
///
/// `category` holds the display label rather than a [`Category`] so rows
/// reloaded from the ledger are kept exactly as written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Day the expense was recorded (YYYY-MM-DD)
    pub date: NaiveDate,
    pub name: String,
    /// Category label, glyph included
    pub category: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            category: category.into(),
            amount,
        }
    }
}

/// The buckets an expense can be filed under at entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
}

impl Category {
    /// Menu order, 1-indexed when shown to the user.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Home,
        Category::Work,
        Category::Fun,
        Category::Misc,
    ];

    /// Label written to the ledger and shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "🍔 Food",
            Category::Home => "🏠 Home",
            Category::Work => "👜 Work",
            Category::Fun => "🥳 Fun",
            Category::Misc => "📣 Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render an amount the way the ledger stores it.
///
/// Integral values keep one fractional digit (`12` -> `12.0`) so files written
/// by earlier versions of the tool stay byte-compatible; everything else uses
/// the shortest round-trip form.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_creation() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        let e = Expense::new(date, "Lunch", Category::Food.label(), 12.5);
        assert_eq!(e.name, "Lunch");
        assert_eq!(e.category, "🍔 Food");
        assert_eq!(e.amount, 12.5);
    }

    #[test]
    fn test_category_labels_in_menu_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["🍔 Food", "🏠 Home", "👜 Work", "🥳 Fun", "📣 Misc"]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.0), "12.0");
        assert_eq!(format_amount(3.5), "3.5");
        assert_eq!(format_amount(-1.0), "-1.0");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }
}
