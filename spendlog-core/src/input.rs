//! Per-attempt validation of interactive answers.
//!
//! These functions never loop; the prompt harness owns the retry policy.

use crate::error::InputError;

/// Parse an expense amount. Any finite number is accepted, negatives included.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidAmount(trimmed.to_string())),
    }
}

/// Parse a 1-based menu selection against a list of `len` entries and return
/// the 0-based index.
pub fn parse_selection(raw: &str, len: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let selection: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if selection >= 1 && (selection as u64) <= len as u64 {
        Ok(selection as usize - 1)
    } else {
        Err(InputError::OutOfRange {
            selection,
            max: len,
        })
    }
}
