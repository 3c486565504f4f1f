//! Bar chart of one value per category

use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::style::{series_color, CAPTION_FONT, DEFAULT_SIZE, LABEL_FONT};

/// Render one labelled bar per `(category, value)` pair and save to `path`.
///
/// Bars sit on a segmented axis so category names land under their bar
/// centers. Values must be non-negative (bar heights).
pub fn bar_chart(
    bars: &[(String, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
) -> Result<()> {
    if bars.is_empty() {
        return Err(PlotError::InvalidData(
            "bar chart needs at least one category".to_string(),
        ));
    }
    if bars.iter().any(|(_, v)| !v.is_finite() || *v < 0.0) {
        return Err(PlotError::InvalidData(
            "bar heights must be finite and non-negative".to_string(),
        ));
    }

    let y_max = bars.iter().map(|(_, v)| *v).fold(0.0f64, f64::max) * 1.15;

    let root = BitMapBackend::new(path, DEFAULT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(LABEL_FONT)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) if *i < bars.len() => {
                bars[*i].0.clone()
            }
            _ => String::new(),
        })
        .disable_x_mesh()
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
            let color = series_color(i);
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *value),
                ],
                color.mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
