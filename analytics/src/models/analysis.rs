use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate pair for the nearest-pair search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Maximum-sum contiguous window over the price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub total_gain: f64,
}

impl GainWindow {
    /// Number of trading days covered by the window
    pub fn trading_days(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Closest pair found by the nearest-pair search.
///
/// `pair` is `None` and `distance` is `f64::INFINITY` when the input had fewer than two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPairResult {
    pub pair: Option<(Point2D, Point2D)>,
    pub distance: f64,
}

impl NearestPairResult {
    pub fn new(a: Point2D, b: Point2D, distance: f64) -> Self {
        Self {
            pair: Some((a, b)),
            distance,
        }
    }

    /// Sentinel for inputs with fewer than two points
    pub fn none() -> Self {
        Self {
            pair: None,
            distance: f64::INFINITY,
        }
    }

    pub fn point_a(&self) -> Option<Point2D> {
        self.pair.map(|(a, _)| a)
    }

    pub fn point_b(&self) -> Option<Point2D> {
        self.pair.map(|(_, b)| b)
    }

    pub fn is_found(&self) -> bool {
        self.pair.is_some()
    }
}

impl Default for NearestPairResult {
    fn default() -> Self {
        Self::none()
    }
}
