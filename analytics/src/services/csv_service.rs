use crate::{
    error::{AnalysisError, Result},
    models::{QuoteRecord, RawQuoteRow, DEFAULT_DATE_FORMAT},
    utils::{log_ingest, Logger, Timer},
};
use std::{fs::File, io::Read, path::Path};

/// Reads a historical quotes CSV export into typed records.
///
/// Columns are matched by header name (`Date`, `Last`, `Volume`, `Open`, `High`, `Low`),
/// so column order does not matter. The first bad row aborts the read.
pub struct QuoteCsvReader {
    date_format: String,
    logger: Logger,
}

impl QuoteCsvReader {
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    pub fn with_date_format(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
            logger: Logger::new("CSV_SERVICE"),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Load every record from a CSV file, in file order
    pub fn read_path(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let timer = Timer::start("quote csv read");
        log_ingest(&format!("Loading quotes from {}", path.display()));

        let file = File::open(path).map_err(|e| {
            self.logger.error_with_error(&format!("Cannot open {}", path.display()), &e);
            AnalysisError::Io(e)
        })?;
        let records = self.read_from(file)?;

        log_ingest(&format!(
            "Loaded {} records from {} ({:.1}ms)",
            records.len(),
            path.display(),
            timer.elapsed_ms()
        ));
        Ok(records)
    }

    /// Parse CSV content already held in memory
    pub fn parse_str(&self, content: &str) -> Result<Vec<QuoteRecord>> {
        self.read_from(content.as_bytes())
    }

    fn read_from<R: Read>(&self, source: R) -> Result<Vec<QuoteRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut records = Vec::new();

        for (index, result) in reader.deserialize().enumerate() {
            let row = index + 1;
            let raw: RawQuoteRow = result?;

            let record = raw.to_quote_record(row, &self.date_format).map_err(|e| {
                self.logger.warn(&format!("Rejecting row {}: {}", row, e));
                e
            })?;
            records.push(record);
        }

        if records.is_empty() {
            self.logger.warn("CSV contained a header but no quote rows");
        } else {
            self.logger.debug_with_data("First record", &records[0]);
        }

        Ok(records)
    }
}

impl Default for QuoteCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const SAMPLE: &str = "\
Date,Last,Volume,Open,High,Low
03/15/2024,$172.62,121664700,$171.17,$172.62,$170.285
03/14/2024,$173.00,72913510,$172.91,$174.3078,$172.05
03/13/2024,\"$1,171.13\",51948950,$172.77,$173.185,$170.76
";

    #[test]
    fn test_parse_sample_in_file_order() {
        let records = QuoteCsvReader::new().parse_str(SAMPLE).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(records[0].volume, 121_664_700);
        assert_eq!(records[1].high, 174.3078);
        assert_eq!(records[2].last, 1171.13);
    }

    #[test]
    fn test_columns_matched_by_header() {
        let content = "\
Date, Close/Last, Volume, Open, High, Low
01/02/2024, $10.50, 1000, $10.00, $11.00, $9.90
";
        let records = QuoteCsvReader::new().parse_str(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].last, 10.5);
        assert_eq!(records[0].low, 9.9);
    }

    #[test]
    fn test_custom_date_format() {
        let content = "Date,Last,Volume,Open,High,Low\n2024-01-02,1,2,3,4,0.5\n";
        let records = QuoteCsvReader::with_date_format("%Y-%m-%d").parse_str(content).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_malformed_row_aborts() {
        let content = "\
Date,Last,Volume,Open,High,Low
01/02/2024,$10.50,1000,$10.00,$11.00,$9.90
01/03/2024,$abc,1000,$10.00,$11.00,$9.90
";
        let err = QuoteCsvReader::new().parse_str(content).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedRecord { row: 2, field: "Last", .. }));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let content = "Date,Last,Volume\n01/02/2024,$10.50,1000\n";
        let err = QuoteCsvReader::new().parse_str(content).unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let records = QuoteCsvReader::new()
            .parse_str("Date,Last,Volume,Open,High,Low\n")
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let records = QuoteCsvReader::new().read_path(file.path()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_read_missing_path() {
        let err = QuoteCsvReader::new()
            .read_path(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
