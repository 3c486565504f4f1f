//! Histogram chart with a density overlay curve

use std::path::Path;

use iris_stats::Histogram;
use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::style::{CAPTION_FONT, DEFAULT_SIZE, LABEL_FONT};

/// Render a pre-binned histogram plus an overlay curve and save to `path`.
///
/// The y axis is in counts; `overlay` points must already be scaled into
/// count space (density * n * bin_width) by the caller.
pub fn histogram_chart(
    histogram: &Histogram,
    overlay: &[(f64, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
) -> Result<()> {
    if histogram.is_empty() {
        return Err(PlotError::InvalidData(
            "histogram has no bins".to_string(),
        ));
    }

    let overlay_max = overlay.iter().map(|(_, y)| *y).fold(0.0f64, f64::max);
    let y_max = (histogram.max_count() as f64).max(overlay_max) * 1.15;

    let root = BitMapBackend::new(path, DEFAULT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(histogram.min()..histogram.max(), 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(histogram.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Bin outlines keep adjacent bars distinguishable.
    chart
        .draw_series(histogram.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.count as f64)],
                BLUE.stroke_width(1),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if !overlay.is_empty() {
        chart
            .draw_series(LineSeries::new(overlay.iter().cloned(), RED.stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
