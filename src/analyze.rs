//! Grouped analysis: species distribution and per-species mean measurements

use std::io::Write;

use anyhow::Result;
use iris_data::{MeasurementTable, Species, MEASUREMENT_COLUMNS};
use iris_stats::{group_means, value_counts, GroupMeans};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Tabled)]
struct MeanRow {
    #[tabled(rename = "Species")]
    species: String,
    sepal_length: String,
    sepal_width: String,
    petal_length: String,
    petal_width: String,
}

/// Write the grouped analysis for `table` to `out` and return the group
/// means for downstream use.
pub fn report<W: Write>(table: &MeasurementTable, out: &mut W) -> Result<GroupMeans<Species>> {
    let species = table.species()?;

    writeln!(out, "\n=== Species Distribution ===")?;
    let counts: Vec<CountRow> = value_counts(&species)
        .into_iter()
        .map(|(species, count)| CountRow {
            species: species.to_string(),
            count,
        })
        .collect();
    writeln!(out, "{}", Table::new(&counts))?;

    let means = species_means(table)?;

    writeln!(out, "\n=== Mean Measurements by Species ===")?;
    let rows: Vec<MeanRow> = means
        .rows
        .iter()
        .map(|(species, values)| MeanRow {
            species: species.to_string(),
            sepal_length: format!("{:.3}", values[0]),
            sepal_width: format!("{:.3}", values[1]),
            petal_length: format!("{:.3}", values[2]),
            petal_width: format!("{:.3}", values[3]),
        })
        .collect();
    writeln!(out, "{}", Table::new(&rows))?;

    Ok(means)
}

/// Mean of each measurement column, grouped by species.
pub fn species_means(table: &MeasurementTable) -> Result<GroupMeans<Species>> {
    let species = table.species()?;
    let columns: Vec<Vec<f64>> = MEASUREMENT_COLUMNS
        .iter()
        .map(|column| table.numeric(column))
        .collect::<std::result::Result<_, _>>()?;
    let named: Vec<(&str, &[f64])> = MEASUREMENT_COLUMNS
        .iter()
        .zip(&columns)
        .map(|(name, values)| (*name, values.as_slice()))
        .collect();
    Ok(group_means(&species, &named)?)
}
