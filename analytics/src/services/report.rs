use crate::{
    api::QuoteAnalysis,
    error::{AnalysisError, Result},
    models::{NearestPairResult, Point2D},
    utils::{date_bounds, format_quote_date, log_report},
};
use chrono::NaiveDate;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Text and JSON view of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trading_days: usize,
    pub gain_start_date: NaiveDate,
    pub gain_end_date: NaiveDate,
    pub total_gain: f64,
    pub nearest: NearestPairResult,
    pub chart_file: String,
}

impl QuoteReport {
    /// Assemble the report from analysis results. `chart_file` is the name the
    /// visualization section points at.
    pub fn from_analysis(analysis: &QuoteAnalysis, chart_file: &str) -> Result<Self> {
        let (start_date, end_date) = date_bounds(&analysis.records).ok_or(AnalysisError::EmptyInput)?;
        let (gain_start, gain_end) = analysis.gain_bounds();

        Ok(Self {
            start_date,
            end_date,
            trading_days: analysis.trading_days(),
            gain_start_date: gain_start.date,
            gain_end_date: gain_end.date,
            total_gain: analysis.gain.total_gain,
            nearest: analysis.nearest,
            chart_file: chart_file.to_string(),
        })
    }

    pub fn render_text(&self) -> String {
        format!(
            "Financial Data Analysis Report

1. Data Overview:
- Start Date: {}
- End Date: {}
- Number of trading days: {}

2. Maximum Gain Period:
- Start Date: {}
- End Date: {}
- Total Gain: ${:.2}

3. Closest Pair of Points:
- Point 1: {}
- Point 2: {}
- Distance: {:.2}

4. Visualization:
- A plot of the stock price trend has been saved as '{}'
",
            format_quote_date(self.start_date),
            format_quote_date(self.end_date),
            self.trading_days,
            format_quote_date(self.gain_start_date),
            format_quote_date(self.gain_end_date),
            self.total_gain,
            format_point(self.nearest.point_a()),
            format_point(self.nearest.point_b()),
            self.nearest.distance,
            self.chart_file,
        )
    }

    pub fn write_text(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(self.render_text().as_bytes())?;
        writer.flush()?;

        log_report(&format!("Text report written to {}", path.display()));
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        log_report(&format!("JSON summary written to {}", path.display()));
        Ok(())
    }
}

/// (price, volume) point, price to two decimals and volume as a whole share count
fn format_point(point: Option<Point2D>) -> String {
    match point {
        Some(p) => format!("({:.2}, {:.0})", p.x, p.y),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::QuoteAnalyzer;
    use crate::models::QuoteRecord;

    fn record(m: u32, d: u32, last: f64, volume: u64) -> QuoteRecord {
        QuoteRecord::new(
            NaiveDate::from_ymd_opt(2023, m, d).unwrap(),
            last,
            last - 0.5,
            last + 1.0,
            last - 1.0,
            volume,
        )
    }

    fn report_for(records: Vec<QuoteRecord>) -> QuoteReport {
        let analysis = QuoteAnalyzer::new().analyze(records).unwrap();
        QuoteReport::from_analysis(&analysis, "stock_price_trend.svg").unwrap()
    }

    #[test]
    fn test_date_range_independent_of_input_order() {
        let records = vec![
            record(3, 14, 101.0, 5_000),
            record(1, 3, 99.0, 7_500),
            record(5, 30, 104.25, 6_100),
            record(2, 1, 100.5, 5_900),
            record(4, 20, 98.75, 8_000),
        ];

        let mut reversed = records.clone();
        reversed.reverse();

        for input in [records, reversed] {
            let report = report_for(input);
            assert_eq!(report.start_date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
            assert_eq!(report.end_date, NaiveDate::from_ymd_opt(2023, 5, 30).unwrap());
            assert_eq!(report.trading_days, 5);

            let text = report.render_text();
            assert!(text.contains("- Start Date: 2023-01-03"));
            assert!(text.contains("- End Date: 2023-05-30"));
        }
    }

    #[test]
    fn test_rendered_sections() {
        let report = report_for(vec![
            record(6, 1, 10.0, 1_000),
            record(6, 2, 10.25, 1_003),
            record(6, 5, 11.0, 2_000),
        ]);
        let text = report.render_text();

        assert!(text.starts_with("Financial Data Analysis Report\n"));
        assert!(text.contains("- Number of trading days: 3"));
        assert!(text.contains("- Total Gain: $31.25"));
        assert!(text.contains("- Point 1: (10.00, 1000)"));
        assert!(text.contains("- Point 2: (10.25, 1003)"));
        assert!(text.contains("- Distance: 3.01"));
        assert!(text.contains("saved as 'stock_price_trend.svg'"));
    }

    #[test]
    fn test_single_record_has_no_pair() {
        let report = report_for(vec![record(7, 4, 50.0, 10)]);
        let text = report.render_text();

        assert_eq!(report.start_date, report.end_date);
        assert!(text.contains("- Point 1: n/a"));
        assert!(text.contains("- Distance: inf"));
    }

    #[test]
    fn test_write_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let report = report_for(vec![record(8, 1, 20.0, 100), record(8, 2, 21.0, 90)]);

        let text_path = dir.path().join("REPORT.txt");
        report.write_text(&text_path).unwrap();
        assert_eq!(std::fs::read_to_string(&text_path).unwrap(), report.render_text());

        let json_path = dir.path().join("report.json");
        report.write_json(&json_path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["trading_days"], 2);
        assert_eq!(value["start_date"], "2023-08-01");
        assert_eq!(value["total_gain"], 41.0);
    }
}
