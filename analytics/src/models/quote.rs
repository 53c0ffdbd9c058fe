use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::models::Point2D;

/// Default date layout of the historical quotes export (e.g. 03/15/2024)
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// One trading day of a quote history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub date: NaiveDate,
    pub last: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

impl QuoteRecord {
    pub fn new(date: NaiveDate, last: f64, open: f64, high: f64, low: f64, volume: u64) -> Self {
        Self {
            date,
            last,
            open,
            high,
            low,
            volume,
        }
    }

    /// Project this record onto the (last price, volume) plane
    pub fn as_point(&self) -> Point2D {
        Point2D::new(self.last, self.volume as f64)
    }
}

/// Raw CSV row as exported by the quote provider, all fields still text
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuoteRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Last", alias = "Close/Last", alias = "Close")]
    pub last: String,
    #[serde(rename = "Volume")]
    pub volume: String,
    #[serde(rename = "Open")]
    pub open: String,
    #[serde(rename = "High")]
    pub high: String,
    #[serde(rename = "Low")]
    pub low: String,
}

impl RawQuoteRow {
    /// Convert to QuoteRecord. `row` is the 1-based data row used in error messages.
    pub fn to_quote_record(&self, row: usize, date_format: &str) -> Result<QuoteRecord> {
        let date = NaiveDate::parse_from_str(self.date.trim(), date_format).map_err(|e| {
            AnalysisError::MalformedRecord {
                row,
                field: "Date",
                value: self.date.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(QuoteRecord::new(
            date,
            parse_currency(&self.last, row, "Last")?,
            parse_currency(&self.open, row, "Open")?,
            parse_currency(&self.high, row, "High")?,
            parse_currency(&self.low, row, "Low")?,
            parse_volume(&self.volume, row)?,
        ))
    }
}

/// Strip currency symbols and thousands separators ("$1,234.50" -> 1234.5)
pub fn parse_currency(raw: &str, row: usize, field: &'static str) -> Result<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    let value: f64 = cleaned.parse().map_err(|e: std::num::ParseFloatError| {
        AnalysisError::MalformedRecord {
            row,
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !value.is_finite() {
        return Err(AnalysisError::MalformedRecord {
            row,
            field,
            value: raw.to_string(),
            reason: "not a finite amount".to_string(),
        });
    }

    Ok(value)
}

/// Parse a non-negative share count, tolerating thousands separators
pub fn parse_volume(raw: &str, row: usize) -> Result<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    cleaned
        .parse()
        .map_err(|e: std::num::ParseIntError| AnalysisError::MalformedRecord {
            row,
            field: "Volume",
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, last: &str, volume: &str) -> RawQuoteRow {
        RawQuoteRow {
            date: date.to_string(),
            last: last.to_string(),
            volume: volume.to_string(),
            open: "$10.00".to_string(),
            high: "$11.00".to_string(),
            low: "$9.50".to_string(),
        }
    }

    #[test]
    fn test_currency_symbols_are_stripped() {
        assert_eq!(parse_currency("$1,234.50", 1, "Last").unwrap(), 1234.5);
        assert_eq!(parse_currency(" 17.2 ", 1, "Last").unwrap(), 17.2);
    }

    #[test]
    fn test_row_conversion() {
        let record = raw("03/15/2024", "$172.62", "121,664,700")
            .to_quote_record(1, DEFAULT_DATE_FORMAT)
            .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.last, 172.62);
        assert_eq!(record.open, 10.0);
        assert_eq!(record.high, 11.0);
        assert_eq!(record.low, 9.5);
        assert_eq!(record.volume, 121_664_700);
    }

    #[test]
    fn test_bad_date_names_row_and_field() {
        let err = raw("2024-03-15", "$1.00", "10")
            .to_quote_record(7, DEFAULT_DATE_FORMAT)
            .unwrap_err();

        match err {
            AnalysisError::MalformedRecord { row, field, .. } => {
                assert_eq!(row, 7);
                assert_eq!(field, "Date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_volume_is_rejected() {
        let err = raw("03/15/2024", "$1.00", "-5")
            .to_quote_record(2, DEFAULT_DATE_FORMAT)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRecord { field: "Volume", .. }));
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let err = parse_currency("N/A", 3, "Open").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRecord { row: 3, field: "Open", .. }));
        assert!(parse_currency("inf", 3, "Open").is_err());
    }

    #[test]
    fn test_point_projection() {
        let record = QuoteRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            12.5,
            12.0,
            13.0,
            11.0,
            4_000,
        );
        assert_eq!(record.as_point(), Point2D::new(12.5, 4_000.0));
    }
}
