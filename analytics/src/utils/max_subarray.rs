use crate::error::{AnalysisError, Result};
use crate::models::GainWindow;

/// Kadane scan for the contiguous run with the largest sum.
///
/// The run restarts at position `i` whenever `values[i]` alone beats extending the
/// current run. A later window only replaces the best one when its sum is strictly
/// greater, so the first maximum found is kept.
pub fn max_subarray(values: &[f64]) -> Result<GainWindow> {
    let (first, rest) = values.split_first().ok_or(AnalysisError::EmptyInput)?;

    let mut current = *first;
    let mut current_start = 0;
    let mut best = GainWindow {
        start_index: 0,
        end_index: 0,
        total_gain: *first,
    };

    for (offset, value) in rest.iter().enumerate() {
        let i = offset + 1;

        if *value > current + value {
            current = *value;
            current_start = i;
        } else {
            current += value;
        }

        if current > best.total_gain {
            best = GainWindow {
                start_index: current_start,
                end_index: i,
                total_gain: current,
            };
        }
    }

    Ok(best)
}
