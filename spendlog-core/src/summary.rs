//! Monthly budget summary built from every stored expense.

use crate::expense::{Expense, format_amount};
use crate::time::{days_in_month, remaining_days};
use chrono::{Datelike, NaiveDate};

/// Share of the budget below which the remainder triggers a warning.
const NEAR_LIMIT_RATIO: f64 = 0.1;

/// Sum of amounts filed under one category label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Budget alert. At most one applies to a summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetWarning {
    /// Spending is past the budget by `by`
    Exceeded { by: f64 },
    /// Under budget, but less than a tenth of it is left
    NearLimit { left: f64 },
}

impl BudgetWarning {
    pub fn message(&self) -> String {
        match self {
            BudgetWarning::Exceeded { by } => {
                format!("Warning! You have exceeded your budget by {}!", format_amount(*by))
            }
            BudgetWarning::NearLimit { left } => format!(
                "Warning! You are close to exceeding your budget. Only {} left!",
                format_amount(*left)
            ),
        }
    }
}

/// Result of summarizing the ledger against a monthly budget
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Per-category totals, in order of first appearance
    pub by_category: Vec<CategoryTotal>,
    pub total_spent: f64,
    pub remaining: f64,
    pub warning: Option<BudgetWarning>,
    /// Remaining budget per remaining day, rounded to one decimal.
    /// `None` on the last day of the month, when no days remain.
    pub per_day: Option<f64>,
}

impl Summary {
    pub fn compute(expenses: &[Expense], budget: f64, today: NaiveDate) -> Self {
        let by_category = group_by_category(expenses);
        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();
        let remaining = budget - total_spent;

        let warning = if remaining < 0.0 {
            Some(BudgetWarning::Exceeded { by: -remaining })
        } else if remaining < budget * NEAR_LIMIT_RATIO {
            Some(BudgetWarning::NearLimit { left: remaining })
        } else {
            None
        };

        let days_left = remaining_days(today);
        let per_day = if days_left == 0 {
            tracing::debug!(
                day = today.day(),
                month_days = days_in_month(today),
                "last day of the month, per-day pace omitted"
            );
            None
        } else {
            Some(round_to_tenth(remaining / days_left as f64))
        };

        tracing::debug!(
            records = expenses.len(),
            categories = by_category.len(),
            total_spent,
            remaining,
            "summary computed"
        );

        Summary {
            by_category,
            total_spent,
            remaining,
            warning,
            per_day,
        }
    }
}

fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    totals
}

/// Round to one decimal, ties to even on the exact binary value.
///
/// `{:.1}` rounds the exact decimal expansion, so 0.25 becomes 0.2 and 1.45
/// (stored as 1.4499...) becomes 1.4.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
