use chrono::NaiveDate;

use crate::models::QuoteRecord;

/// Format a trading date the way reports print it (YYYY-MM-DD)
pub fn format_quote_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First and last date of a chronologically sorted history
pub fn date_bounds(sorted: &[QuoteRecord]) -> Option<(NaiveDate, NaiveDate)> {
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => Some((first.date, last.date)),
        _ => None,
    }
}
