//! Loader for the bundled iris reference dataset
//!
//! The 150-sample table ships with the crate as CSV and is parsed at load
//! time; there is no runtime input. Fisher's measurements, four centimetre
//! columns plus the species label.

use polars::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{MEASUREMENT_COLUMNS, SPECIES_COLUMN};
use crate::table::MeasurementTable;

/// Number of samples in the reference dataset.
pub const SAMPLE_COUNT: usize = 150;

static IRIS_CSV: &str = include_str!("../data/iris.csv");

/// Load the bundled dataset as a validated [`MeasurementTable`].
pub fn load_iris() -> Result<MeasurementTable> {
    let table = parse_csv(IRIS_CSV)?;
    debug!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        "loaded bundled iris dataset"
    );
    Ok(table)
}

/// Parse CSV text with the fixed five-column layout into a table.
///
/// Header order must match the schema; every record needs four parseable
/// floats and a label.
pub fn parse_csv(text: &str) -> Result<MeasurementTable> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut measurements: [Vec<f64>; 4] = Default::default();
    let mut labels: Vec<String> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 5 {
            return Err(Error::InvalidRow {
                row,
                reason: format!("expected 5 fields, got {}", record.len()),
            });
        }
        for (i, values) in measurements.iter_mut().enumerate() {
            let field = record.get(i).unwrap_or("");
            let value = field.parse::<f64>().map_err(|_| Error::InvalidRow {
                row,
                reason: format!("'{field}' is not a number"),
            })?;
            values.push(value);
        }
        labels.push(record.get(4).unwrap_or("").to_string());
    }

    let mut columns: Vec<Column> = MEASUREMENT_COLUMNS
        .iter()
        .zip(measurements)
        .map(|(name, values)| Series::new((*name).into(), values).into())
        .collect();
    columns.push(Series::new(SPECIES_COLUMN.into(), labels).into());

    MeasurementTable::from_dataframe(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Species;

    #[test]
    fn bundled_dataset_loads() {
        let table = load_iris().unwrap();
        assert_eq!(table.n_rows(), SAMPLE_COUNT);
        assert_eq!(table.n_columns(), 5);
    }

    #[test]
    fn bundled_dataset_is_balanced() {
        let table = load_iris().unwrap();
        let species = table.species().unwrap();
        for target in Species::ALL {
            assert_eq!(species.iter().filter(|&&s| s == target).count(), 50);
        }
    }

    #[test]
    fn malformed_numeric_field_is_rejected() {
        let text = "sepal_length,sepal_width,petal_length,petal_width,species\n\
                    5.1,abc,1.4,0.2,setosa\n";
        let err = parse_csv(text).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 0, .. }));
    }

    #[test]
    fn short_record_is_rejected() {
        let text = "sepal_length,sepal_width,petal_length,petal_width,species\n\
                    5.1,3.5,1.4,0.2\n";
        assert!(parse_csv(text).is_err());
    }
}
