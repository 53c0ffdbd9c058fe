//! # quote-analytics - Daily Stock Quote Analysis Library
//!
//! Turns a historical daily quotes export into a text report and a price chart:
//! - Stable merge sort of the quotes by trading date
//! - Kadane maximum-sum window over closing prices
//! - Divide-and-conquer nearest pair over (closing price, volume) points
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quote_analytics::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = QuoteCsvReader::new().read_path("historicalquotes.csv".as_ref())?;
//!     let analysis = QuoteAnalyzer::new().analyze(records)?;
//!     let report = QuoteReport::from_analysis(&analysis, "stock_price_trend.svg")?;
//!     println!("{}", report.render_text());
//!     Ok(())
//! }
//! ```

// Core modules - these contain the main functionality
pub mod error;
pub mod models;
pub mod utils;
pub mod services;

// Analysis modules - the three algorithms over the quote history
pub mod analysis {
    //! Core algorithms, independent of files and formatting

    /// Stable chronological merge sort
    pub mod sort {
        pub use crate::utils::merge_sort::*;
    }

    /// Maximum-sum contiguous window (Kadane)
    pub mod gain {
        pub use crate::utils::max_subarray::*;
    }

    /// Closest pair of points (divide and conquer)
    pub mod nearest {
        pub use crate::utils::closest_pair::*;
    }
}

// Public API for easy library usage
pub mod api;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use quote_analytics::prelude::*;
    //! ```

    pub use crate::api::{QuoteAnalysis, QuoteAnalyzer, ReportBuilder};
    pub use crate::error::AnalysisError;
    pub use crate::models::{GainWindow, NearestPairResult, Point2D, QuoteRecord};
    pub use crate::services::{QuoteCsvReader, QuoteReport};
}

pub use error::{AnalysisError, Result};
pub use utils::{init_logger, Logger, Timer};
