//! Key findings derived from the measurements
//!
//! Every statement is computed from the data rather than hard coded, so
//! the block stays truthful if the embedded table ever changes.

use std::io::Write;

use anyhow::{anyhow, Result};
use iris_data::MeasurementTable;
use iris_stats::{pearson_correlation, sample_skewness};

/// Skewness below this magnitude reads as approximately normal.
const SYMMETRY_THRESHOLD: f64 = 0.5;

/// Write the key findings block for `table` to `out`.
pub fn report<W: Write>(table: &MeasurementTable, out: &mut W) -> Result<()> {
    let means = crate::analyze::species_means(table)?;

    let petal_idx = means
        .columns
        .iter()
        .position(|c| c == "petal_length")
        .ok_or_else(|| anyhow!("petal_length missing from group means"))?;
    let (largest, largest_mean) = means
        .rows
        .iter()
        .map(|(species, values)| (species, values[petal_idx]))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| anyhow!("no species groups"))?;
    let (smallest, smallest_mean) = means
        .rows
        .iter()
        .map(|(species, values)| (species, values[petal_idx]))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| anyhow!("no species groups"))?;

    let sepal_length = table.numeric("sepal_length")?;
    let petal_length = table.numeric("petal_length")?;
    let correlation = pearson_correlation(&sepal_length, &petal_length)?;

    let sepal_width = table.numeric("sepal_width")?;
    let skewness = sample_skewness(&sepal_width)?;

    writeln!(out, "\n=== Key Findings ===")?;
    writeln!(
        out,
        "- {largest} has the largest petals (mean length: {largest_mean:.2}cm)"
    )?;
    writeln!(
        out,
        "- {} correlation between sepal length and petal length (r = {correlation:.2})",
        correlation_strength(correlation)
    )?;
    writeln!(
        out,
        "- {smallest} has distinctly smaller petals than the other species (mean length: {smallest_mean:.2}cm)"
    )?;
    writeln!(
        out,
        "- Sepal width is {} (skewness = {skewness:.2})",
        symmetry_description(skewness)
    )?;

    Ok(())
}

fn correlation_strength(r: f64) -> &'static str {
    if r.abs() >= 0.7 {
        "Strong"
    } else if r.abs() >= 0.4 {
        "Moderate"
    } else {
        "Weak"
    }
}

fn symmetry_description(skewness: f64) -> &'static str {
    if skewness.abs() < SYMMETRY_THRESHOLD {
        "approximately normally distributed"
    } else if skewness > 0.0 {
        "right skewed"
    } else {
        "left skewed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findings_name_the_extreme_species() {
        let table = iris_data::load_iris().unwrap();
        let mut buf = Vec::new();
        report(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("=== Key Findings ==="));
        assert!(text.contains("virginica has the largest petals (mean length: 5.55cm)"));
        assert!(text.contains("setosa has distinctly smaller petals"));
    }

    #[test]
    fn correlation_is_reported_as_strong() {
        let table = iris_data::load_iris().unwrap();
        let mut buf = Vec::new();
        report(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Strong correlation between sepal length and petal length"));
        assert!(text.contains("(r = 0.87)"));
    }

    #[test]
    fn sepal_width_reads_as_symmetric() {
        let table = iris_data::load_iris().unwrap();
        let mut buf = Vec::new();
        report(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Sepal width is approximately normally distributed"));
    }

    #[test]
    fn strength_bands_cover_the_range() {
        assert_eq!(correlation_strength(0.9), "Strong");
        assert_eq!(correlation_strength(-0.8), "Strong");
        assert_eq!(correlation_strength(0.5), "Moderate");
        assert_eq!(correlation_strength(0.1), "Weak");
    }
}
