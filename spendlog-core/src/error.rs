//! Errors raised while validating a single interactive answer.

use thiserror::Error;

/// Rejection of one attempt at an interactive prompt.
///
/// Every variant is recoverable: the caller decides whether to ask again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid amount. Enter a numeric value.")]
    InvalidAmount(String),
    #[error("Please enter a valid number.")]
    NotANumber(String),
    #[error("Invalid selection. Please try again.")]
    OutOfRange { selection: i64, max: usize },
}
