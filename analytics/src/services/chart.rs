//! Closing-price line chart rendered as a standalone SVG document

use crate::{
    error::Result,
    models::QuoteRecord,
    utils::{format_quote_date, log_report},
};
use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const CHART_WIDTH: f64 = 1200.0;
pub const CHART_HEIGHT: f64 = 600.0;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 120.0;

const MAX_X_TICKS: usize = 10;
const Y_TICKS: usize = 6;
const LINE_COLOR: &str = "#1f77b4";

/// Chart labels, defaults match the quote report
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Stock Price Trends Over Time".to_string(),
            x_label: "Date".to_string(),
            y_label: "Closing Price".to_string(),
            legend: "Closing Prices".to_string(),
        }
    }
}

/// Render date vs. closing price for chronologically sorted records
pub fn render_price_chart(sorted: &[QuoteRecord], labels: &ChartLabels) -> String {
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_height;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="30" font-size="20" text-anchor="middle">{}</text>"#,
        CHART_WIDTH / 2.0,
        escape_text(&labels.title)
    );

    // Axes
    let _ = writeln!(
        svg,
        r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = plot_bottom
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_width,
        b = plot_bottom
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="14" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        CHART_HEIGHT - 12.0,
        escape_text(&labels.x_label)
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{y}" font-size="14" text-anchor="middle" transform="rotate(-90 20 {y})">{}</text>"#,
        escape_text(&labels.y_label),
        y = MARGIN_TOP + plot_height / 2.0
    );

    if let (Some(first), Some(last)) = (sorted.first(), sorted.last()) {
        let (low, high) = price_range(sorted);
        let day_span = (last.date - first.date).num_days() as f64;

        let x_of = |record: &QuoteRecord| {
            if day_span > 0.0 {
                MARGIN_LEFT + (record.date - first.date).num_days() as f64 / day_span * plot_width
            } else {
                MARGIN_LEFT + plot_width / 2.0
            }
        };
        let y_of = |price: f64| plot_bottom - (price - low) / (high - low) * plot_height;

        // Price ticks
        for step in 0..Y_TICKS {
            let price = low + (high - low) * step as f64 / (Y_TICKS - 1) as f64;
            let y = y_of(price);
            let _ = writeln!(
                svg,
                r#"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="black"/><text x="{}" y="{:.1}" font-size="12" text-anchor="end">{:.2}</text>"#,
                MARGIN_LEFT - 5.0,
                MARGIN_LEFT,
                MARGIN_LEFT - 8.0,
                y + 4.0,
                price,
            );
        }

        // Date ticks, labels rotated 45 degrees
        for index in tick_indices(sorted.len(), MAX_X_TICKS) {
            let record = &sorted[index];
            let x = x_of(record);
            let label_y = plot_bottom + 16.0;
            let _ = writeln!(
                svg,
                r#"<line x1="{x:.1}" y1="{b}" x2="{x:.1}" y2="{}" stroke="black"/><text x="{x:.1}" y="{label_y}" font-size="12" text-anchor="end" transform="rotate(-45 {x:.1} {label_y})">{}</text>"#,
                plot_bottom + 5.0,
                format_quote_date(record.date),
                b = plot_bottom,
            );
        }

        if sorted.len() == 1 {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{LINE_COLOR}"/>"#,
                x_of(first),
                y_of(first.last)
            );
        } else {
            let points: Vec<String> = sorted
                .iter()
                .map(|record| format!("{:.1},{:.1}", x_of(record), y_of(record.last)))
                .collect();
            let _ = writeln!(
                svg,
                r#"<polyline fill="none" stroke="{LINE_COLOR}" stroke-width="1.5" points="{}"/>"#,
                points.join(" ")
            );
        }
    }

    // Legend
    let legend_x = MARGIN_LEFT + 15.0;
    let legend_y = MARGIN_TOP + 15.0;
    let _ = writeln!(
        svg,
        r##"<rect x="{}" y="{}" width="150" height="26" fill="white" stroke="#cccccc"/>"##,
        legend_x - 5.0,
        legend_y - 13.0
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{legend_x}" y1="{legend_y}" x2="{}" y2="{legend_y}" stroke="{LINE_COLOR}" stroke-width="2"/><text x="{}" y="{}" font-size="12">{}</text>"#,
        legend_x + 25.0,
        legend_x + 32.0,
        legend_y + 4.0,
        escape_text(&labels.legend)
    );

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the chart, releasing the file handle on every path
pub fn write_price_chart(path: &Path, sorted: &[QuoteRecord], labels: &ChartLabels) -> Result<()> {
    let svg = render_price_chart(sorted, labels);

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;

    log_report(&format!("Price chart written to {} ({} points)", path.display(), sorted.len()));
    Ok(())
}

/// Lowest and highest closing price, widened when flat so the scale never divides by zero
fn price_range(records: &[QuoteRecord]) -> (f64, f64) {
    let (low, high) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.last), hi.max(r.last))
    });

    if high - low > f64::EPSILON {
        let pad = (high - low) * 0.05;
        (low - pad, high + pad)
    } else {
        (low - 1.0, high + 1.0)
    }
}

/// Evenly spaced indices including both ends, at most `max_ticks` of them
fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    match len {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let count = len.min(max_ticks.max(2));
            (0..count).map(|i| i * (len - 1) / (count - 1)).collect()
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
