//! Basic Report Example
//!
//! Runs the sorter, gain scanner and nearest-pair finder over a small in-memory quote
//! history and prints the resulting report.

use quote_analytics::prelude::*;
use std::error::Error;

const QUOTES: &str = "\
Date,Last,Volume,Open,High,Low
01/05/2024,$181.18,62379660,$181.99,$182.76,$180.17
01/02/2024,$185.64,82488670,$187.15,$188.44,$183.89
01/04/2024,$181.91,71983570,$182.15,$183.0872,$180.88
01/03/2024,$184.25,58414460,$184.22,$185.88,$183.43
";

fn main() -> Result<(), Box<dyn Error>> {
    quote_analytics::init_logger()?;

    println!("Basic Report Example");
    println!("{}", "=".repeat(60));

    let records = QuoteCsvReader::new().parse_str(QUOTES)?;
    println!("Parsed {} quotes (file order, newest first)", records.len());

    let analysis = QuoteAnalyzer::new().analyze(records)?;

    let (start, end) = analysis.gain_bounds();
    println!(
        "Gain window: {} to {} ({} days), total ${:.2}",
        start.date,
        end.date,
        analysis.gain.trading_days(),
        analysis.gain.total_gain
    );

    match analysis.nearest.pair {
        Some((a, b)) => println!("Nearest pair: {} and {} at {:.2}", a, b, analysis.nearest.distance),
        None => println!("Nearest pair: not enough quotes"),
    }

    let report = QuoteReport::from_analysis(&analysis, "stock_price_trend.svg")?;
    println!("\n{}", report.render_text());
    println!("{}", "=".repeat(60));

    Ok(())
}
