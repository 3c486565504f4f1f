//! Chart rendering stage: four PNG files under an output directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iris_data::{MeasurementTable, Species};
use iris_plot::{bar_chart, histogram_chart, line_chart, scatter_chart, ScatterGroup};
use iris_stats::{gaussian_kde, FixedWidthBuilder};
use tracing::info;

/// Directory the binary writes charts into, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Number of leading samples shown on the trend line.
const TREND_SAMPLES: usize = 50;

/// Bin count for the sepal width histogram.
const HIST_BINS: usize = 20;

/// Evaluation points for the density overlay.
const KDE_POINTS: usize = 200;

/// Render all four charts into `output_dir`, creating it if needed.
///
/// Returns the paths of the saved files in render order.
pub fn render_all(table: &MeasurementTable, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let saved = vec![
        sepal_trend(table, output_dir)?,
        petal_by_species(table, output_dir)?,
        sepal_width_distribution(table, output_dir)?,
        sepal_vs_petal(table, output_dir)?,
    ];

    for path in &saved {
        info!(path = %path.display(), "chart saved");
    }
    Ok(saved)
}

/// Line chart of sepal length over the first samples.
fn sepal_trend(table: &MeasurementTable, dir: &Path) -> Result<PathBuf> {
    let sepal_length = table.numeric("sepal_length")?;
    let window = &sepal_length[..TREND_SAMPLES.min(sepal_length.len())];

    let path = dir.join("sepal_trend.png");
    line_chart(
        window,
        "Sepal Length",
        "Sepal Length Trend (First 50 Samples)",
        "Sample Index",
        "Sepal Length (cm)",
        &path,
    )
    .with_context(|| format!("rendering {}", path.display()))?;
    Ok(path)
}

/// Bar chart of mean petal length per species.
fn petal_by_species(table: &MeasurementTable, dir: &Path) -> Result<PathBuf> {
    let means = crate::analyze::species_means(table)?;
    let bars: Vec<(String, f64)> = Species::ALL
        .iter()
        .filter_map(|species| {
            means
                .mean_of(species, "petal_length")
                .map(|mean| (species.to_string(), mean))
        })
        .collect();

    let path = dir.join("petal_by_species.png");
    bar_chart(
        &bars,
        "Average Petal Length by Species",
        "Species",
        "Petal Length (cm)",
        &path,
    )
    .with_context(|| format!("rendering {}", path.display()))?;
    Ok(path)
}

/// Histogram of sepal width with a kernel density overlay.
fn sepal_width_distribution(table: &MeasurementTable, dir: &Path) -> Result<PathBuf> {
    let sepal_width = table.numeric("sepal_width")?;
    let histogram = FixedWidthBuilder::new(HIST_BINS).build(&sepal_width)?;

    // KDE comes back as a probability density; scale it into count space
    // so the curve overlays the frequency bars.
    let n = sepal_width.len() as f64;
    let bin_width = histogram.bins()[0].width();
    let overlay: Vec<(f64, f64)> =
        gaussian_kde(&sepal_width, histogram.min(), histogram.max(), KDE_POINTS)?
            .into_iter()
            .map(|(x, density)| (x, density * n * bin_width))
            .collect();

    let path = dir.join("sepal_width_dist.png");
    histogram_chart(
        &histogram,
        &overlay,
        "Distribution of Sepal Width",
        "Sepal Width (cm)",
        "Frequency",
        &path,
    )
    .with_context(|| format!("rendering {}", path.display()))?;
    Ok(path)
}

/// Scatter of sepal length against petal length, coloured by species.
fn sepal_vs_petal(table: &MeasurementTable, dir: &Path) -> Result<PathBuf> {
    let sepal_length = table.numeric("sepal_length")?;
    let petal_length = table.numeric("petal_length")?;
    let species = table.species()?;

    let groups: Vec<ScatterGroup> = Species::ALL
        .iter()
        .map(|target| ScatterGroup {
            label: target.to_string(),
            points: species
                .iter()
                .zip(sepal_length.iter().zip(&petal_length))
                .filter(|(s, _)| *s == target)
                .map(|(_, (&x, &y))| (x, y))
                .collect(),
        })
        .collect();

    let path = dir.join("sepal_vs_petal.png");
    scatter_chart(
        &groups,
        "Sepal Length vs Petal Length",
        "Sepal Length (cm)",
        "Petal Length (cm)",
        &path,
    )
    .with_context(|| format!("rendering {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_all_four_charts() {
        let table = iris_data::load_iris().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let saved = render_all(&table, dir.path()).unwrap();

        assert_eq!(saved.len(), 4);
        for path in &saved {
            assert!(path.exists(), "missing {}", path.display());
        }
        let names: Vec<_> = saved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "sepal_trend.png",
                "petal_by_species.png",
                "sepal_width_dist.png",
                "sepal_vs_petal.png",
            ]
        );
    }
}
