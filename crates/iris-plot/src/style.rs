//! Shared chart dimensions, colours and axis helpers

use plotters::style::colors::{BLUE, GREEN, RED};
use plotters::style::RGBColor;

use crate::error::{PlotError, Result};

/// Wide layout for the trend chart.
pub const WIDE_SIZE: (u32, u32) = (1000, 500);

/// Default layout for the remaining charts.
pub const DEFAULT_SIZE: (u32, u32) = (800, 500);

/// Caption and axis font sizes, bitmap-backend friendly.
pub const CAPTION_FONT: (&str, u32) = ("sans-serif", 30);
pub const LABEL_FONT: (&str, u32) = ("sans-serif", 18);

/// Colours cycled through per-group series (scatter chart).
pub const SERIES_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// Pick the colour for the `idx`-th series.
pub fn series_color(idx: usize) -> RGBColor {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Min/max of a sample widened by a 5% margin on each side.
///
/// Keeps markers at the extremes away from the plot border.
pub fn padded_range(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(PlotError::InvalidData(
            "cannot derive an axis range from empty data".to_string(),
        ));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(PlotError::InvalidData(
            "axis range requires finite values".to_string(),
        ));
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let margin = if max > min { (max - min) * 0.05 } else { 0.5 };
    Ok((min - margin, max + margin))
}
