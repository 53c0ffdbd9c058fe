pub mod config;

use crate::config::{AppConfig, ConfigOverrides};
use anyhow::Context;
use clap::Parser;
use quote_analytics::{api::ReportBuilder, init_logger};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quote-report")]
#[command(about = "Analyze a daily stock quotes CSV and write a text report plus a price chart")]
pub struct Cli {
    /// YAML config file (defaults to $CONFIG_FILE, then environment variables)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Quotes CSV with Date, Last, Volume, Open, High, Low columns
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Text report output path
    #[arg(short, long)]
    pub report: Option<PathBuf>,
    /// SVG chart output path
    #[arg(long)]
    pub chart: Option<PathBuf>,
    /// Optional JSON summary output path
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// chrono format of the Date column
    #[arg(long)]
    pub date_format: Option<String>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            report: cli.report,
            chart: cli.chart,
            json: cli.json,
            date_format: cli.date_format,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let mut cli = Cli::parse();
    let config_file = cli.config.take();
    let app_config = AppConfig::load(config_file.as_deref())?.with_overrides(cli.into());

    // Every log line of this run carries the input file
    let _span = tracing::info_span!("run", input = %app_config.input.display()).entered();

    tracing::info!("Starting quote-report");
    tracing::info!(?app_config, "Loaded configuration");

    let mut builder = ReportBuilder::new()
        .with_input(&app_config.input)
        .with_report_path(&app_config.report)
        .with_chart_path(&app_config.chart)
        .with_date_format(&app_config.date_format);
    if let Some(json) = &app_config.json {
        builder = builder.with_json_path(json);
    }

    let report = builder
        .run()
        .with_context(|| format!("Failed to generate report from {}", app_config.input.display()))?;

    tracing::info!(
        trading_days = report.trading_days,
        start = %report.start_date,
        end = %report.end_date,
        "Report complete"
    );
    println!(
        "Report generated successfully. Check '{}' for details.",
        app_config.report.display()
    );

    Ok(())
}
