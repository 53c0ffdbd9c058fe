//! Builder pattern for configuring a report run

use std::path::{Path, PathBuf};

use crate::api::analyzer::QuoteAnalyzer;
use crate::error::Result;
use crate::models::DEFAULT_DATE_FORMAT;
use crate::services::{write_price_chart, ChartLabels, QuoteCsvReader, QuoteReport};
use crate::utils::{log_report, Timer};

pub const DEFAULT_INPUT_FILE: &str = "historicalquotes.csv";
pub const DEFAULT_REPORT_FILE: &str = "REPORT.txt";
pub const DEFAULT_CHART_FILE: &str = "stock_price_trend.svg";

/// Builder for a read → analyze → write report run
///
/// # Example
/// ```rust,no_run
/// use quote_analytics::api::ReportBuilder;
///
/// let report = ReportBuilder::new()
///     .with_input("historicalquotes.csv")
///     .with_report_path("REPORT.txt")
///     .with_chart_path("stock_price_trend.svg")
///     .run()?;
/// println!("{} trading days", report.trading_days);
/// # Ok::<(), quote_analytics::AnalysisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    input: PathBuf,
    report_path: PathBuf,
    chart_path: PathBuf,
    json_path: Option<PathBuf>,
    date_format: String,
    labels: ChartLabels,
}

impl ReportBuilder {
    /// Create a builder with the default file names in the working directory
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            chart_path: PathBuf::from(DEFAULT_CHART_FILE),
            json_path: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            labels: ChartLabels::default(),
        }
    }

    /// Set the quotes CSV to read
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input = path.as_ref().to_path_buf();
        self
    }

    /// Set where the text report is written
    pub fn with_report_path(mut self, path: impl AsRef<Path>) -> Self {
        self.report_path = path.as_ref().to_path_buf();
        self
    }

    /// Set where the SVG chart is written
    pub fn with_chart_path(mut self, path: impl AsRef<Path>) -> Self {
        self.chart_path = path.as_ref().to_path_buf();
        self
    }

    /// Also write a JSON summary to this path
    pub fn with_json_path(mut self, path: impl AsRef<Path>) -> Self {
        self.json_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the chrono format of the Date column
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Override the chart title and labels
    pub fn with_chart_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn chart_path(&self) -> &Path {
        &self.chart_path
    }

    /// Read the quotes, run the analyses and write chart, report and optional JSON.
    ///
    /// Nothing is written when reading or analysis fails.
    pub fn run(&self) -> Result<QuoteReport> {
        let timer = Timer::start("quote report");

        let records = QuoteCsvReader::with_date_format(&self.date_format).read_path(&self.input)?;
        let analysis = QuoteAnalyzer::new().analyze(records)?;

        write_price_chart(&self.chart_path, &analysis.records, &self.labels)?;

        let report = QuoteReport::from_analysis(&analysis, &self.chart_file_name())?;
        report.write_text(&self.report_path)?;

        if let Some(json_path) = &self.json_path {
            report.write_json(json_path)?;
        }

        timer.log_elapsed("REPORT");
        log_report(&format!(
            "Report generated for {} trading days ({} to {})",
            report.trading_days, report.start_date, report.end_date
        ));

        Ok(report)
    }

    fn chart_file_name(&self) -> String {
        self.chart_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.chart_path.display().to_string())
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
