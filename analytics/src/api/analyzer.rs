//! Runs the three analyses over a quote history

use serde::Serialize;

use crate::error::Result;
use crate::models::{GainWindow, NearestPairResult, Point2D, QuoteRecord};
use crate::utils::{closest_pair, log_analysis, max_subarray, sort_by_date, Logger, Timer};

/// Everything the report assembler consumes
#[derive(Debug, Clone, Serialize)]
pub struct QuoteAnalysis {
    /// Records ordered by date, oldest first
    pub records: Vec<QuoteRecord>,
    /// Maximum-sum window over the closing prices
    pub gain: GainWindow,
    /// Closest pair over the (closing price, volume) projection
    pub nearest: NearestPairResult,
}

impl QuoteAnalysis {
    pub fn trading_days(&self) -> usize {
        self.records.len()
    }

    /// Records at the two ends of the gain window
    pub fn gain_bounds(&self) -> (&QuoteRecord, &QuoteRecord) {
        (
            &self.records[self.gain.start_index],
            &self.records[self.gain.end_index],
        )
    }
}

/// High-level interface over the sorter, gain scanner and nearest-pair finder
pub struct QuoteAnalyzer {
    logger: Logger,
}

impl QuoteAnalyzer {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("ANALYZER"),
        }
    }

    /// Sort the records chronologically, then run both analyses over the sorted history.
    ///
    /// Fails with [`crate::AnalysisError::EmptyInput`] when `records` is empty.
    pub fn analyze(&self, records: Vec<QuoteRecord>) -> Result<QuoteAnalysis> {
        let input_len = records.len();

        let timer = Timer::start("chronological sort");
        let records = sort_by_date(records);
        debug_assert_eq!(records.len(), input_len);
        timer.log_elapsed("ANALYZER");

        let timer = Timer::start("maximum gain scan");
        let prices: Vec<f64> = records.iter().map(|r| r.last).collect();
        let gain = max_subarray(&prices).map_err(|e| {
            self.logger.warn(&format!("Gain scan skipped: {}", e));
            e
        })?;
        timer.log_elapsed("ANALYZER");

        let timer = Timer::start("nearest pair search");
        let points: Vec<Point2D> = records.iter().map(QuoteRecord::as_point).collect();
        let nearest = closest_pair(&points);
        timer.log_elapsed("ANALYZER");

        if !nearest.is_found() {
            self.logger.info("Fewer than two records, no nearest pair");
        }

        log_analysis(&format!(
            "{} records, gain window [{}, {}] total {:.2}, nearest distance {:.2}",
            records.len(),
            gain.start_index,
            gain.end_index,
            gain.total_gain,
            nearest.distance
        ));

        Ok(QuoteAnalysis {
            records,
            gain,
            nearest,
        })
    }
}

impl Default for QuoteAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use chrono::NaiveDate;

    fn record(day: u32, last: f64, volume: u64) -> QuoteRecord {
        QuoteRecord::new(
            NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            last,
            last,
            last,
            last,
            volume,
        )
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let err = QuoteAnalyzer::new().analyze(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn test_analysis_runs_on_sorted_history() {
        let records = vec![
            record(9, 12.0, 900),
            record(5, 10.0, 1_000),
            record(7, 11.0, 1_500),
            record(6, 10.5, 1_001),
        ];

        let analysis = QuoteAnalyzer::new().analyze(records).unwrap();

        let days: Vec<u32> = analysis.records.iter().map(|r| chrono::Datelike::day(&r.date)).collect();
        assert_eq!(days, vec![5, 6, 7, 9]);

        // Positive prices: the window spans the whole sorted history
        assert_eq!((analysis.gain.start_index, analysis.gain.end_index), (0, 3));
        assert_eq!(analysis.gain.total_gain, 43.5);

        let (a, b) = analysis.nearest.pair.unwrap();
        let expected = (Point2D::new(10.0, 1_000.0), Point2D::new(10.5, 1_001.0));
        assert!((a, b) == expected || (b, a) == expected);

        let (start, end) = analysis.gain_bounds();
        assert_eq!(start.last, 10.0);
        assert_eq!(end.last, 12.0);
    }

    #[test]
    fn test_single_record() {
        let analysis = QuoteAnalyzer::new().analyze(vec![record(1, 5.0, 10)]).unwrap();
        assert_eq!(analysis.trading_days(), 1);
        assert_eq!((analysis.gain.start_index, analysis.gain.end_index), (0, 0));
        assert!(analysis.nearest.pair.is_none());
        assert!(analysis.nearest.distance.is_infinite());
    }
}
