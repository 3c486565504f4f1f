//! Scatter chart with per-group colours and a legend

use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::style::{padded_range, series_color, CAPTION_FONT, DEFAULT_SIZE, LABEL_FONT};

/// One labelled point cloud of the scatter chart.
#[derive(Debug, Clone)]
pub struct ScatterGroup {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Render labelled point groups, each in its own colour, and save to `path`.
pub fn scatter_chart(
    groups: &[ScatterGroup],
    title: &str,
    x_label: &str,
    y_label: &str,
    path: &Path,
) -> Result<()> {
    if groups.iter().all(|g| g.points.is_empty()) {
        return Err(PlotError::InvalidData(
            "scatter chart needs at least one point".to_string(),
        ));
    }

    let xs: Vec<f64> = groups
        .iter()
        .flat_map(|g| g.points.iter().map(|(x, _)| *x))
        .collect();
    let ys: Vec<f64> = groups
        .iter()
        .flat_map(|g| g.points.iter().map(|(_, y)| *y))
        .collect();
    let (x_min, x_max) = padded_range(&xs)?;
    let (y_min, y_max) = padded_range(&ys)?;

    let root = BitMapBackend::new(path, DEFAULT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (idx, group) in groups.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(
                group
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.mix(0.8).filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(group.label.clone())
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

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
