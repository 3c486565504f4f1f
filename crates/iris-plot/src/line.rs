//! Line chart: one measurement over the sample index

use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::style::{padded_range, CAPTION_FONT, LABEL_FONT, WIDE_SIZE};

/// Render `values` as a line over their sample index and save to `path`.
///
/// The series is drawn in draw order, so the caller controls which slice of
/// the dataset appears (for the trend chart, the first 50 samples).
pub fn line_chart(
    values: &[f64],
    series_label: &str,
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
) -> Result<()> {
    if values.len() < 2 {
        return Err(PlotError::InvalidData(
            "line chart needs at least 2 points".to_string(),
        ));
    }

    let (y_min, y_max) = padded_range(values)?;

    let root = BitMapBackend::new(path, WIDE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..(values.len() - 1) as f64, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
            &BLUE,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(series_label.to_string())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
