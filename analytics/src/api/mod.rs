//! High-level API for easy library usage
//!
//! This module provides simplified interfaces for running a full quote report.

pub mod builder;
pub mod analyzer;

pub use builder::ReportBuilder;
pub use analyzer::{QuoteAnalysis, QuoteAnalyzer};
