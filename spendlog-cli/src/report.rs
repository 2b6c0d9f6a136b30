use spendlog_core::{Summary, format_amount};
use std::io::{self, Write};

/// Render the end-of-run report, one entry per printed line.
pub fn render(summary: &Summary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .by_category
        .iter()
        .map(|t| format!("{}: {}", t.category, format_amount(t.total)))
        .collect();

    lines.push(format!("You have spent {}", format_amount(summary.total_spent)));
    lines.push(format!("Remaining budget: {}", format_amount(summary.remaining)));

    if let Some(warning) = summary.warning {
        lines.push(warning.message());
    }

    lines.push(match summary.per_day {
        Some(pace) => format!("Remaining budget per day: {}", format_amount(pace)),
        None => "Remaining budget per day: n/a (last day of the month)".to_string(),
    });
    lines
}

pub fn print<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    for line in render(summary) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
