//! The measurement table: a schema-checked wrapper around a polars DataFrame
//!
//! Created once at load time, read by every downstream stage, never mutated.

use polars::prelude::*;

use crate::error::{Error, Result};
use crate::schema::{Species, ALL_COLUMNS, MEASUREMENT_COLUMNS, SPECIES_COLUMN};

/// An ordered collection of plant measurements with a categorical label.
///
/// Invariants, enforced at construction:
/// * columns are exactly [`ALL_COLUMNS`], in order;
/// * the four measurement columns are Float64, the label column is String;
/// * no column contains a null;
/// * every label parses to a [`Species`].
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    df: DataFrame,
}

impl MeasurementTable {
    /// Validate a DataFrame against the fixed schema and wrap it.
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        let got: Vec<String> = df
            .get_columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        if got != ALL_COLUMNS {
            return Err(Error::SchemaMismatch {
                expected: ALL_COLUMNS.iter().map(|s| s.to_string()).collect(),
                got,
            });
        }

        for column in df.get_columns() {
            let expected = if column.name() == SPECIES_COLUMN {
                DataType::String
            } else {
                DataType::Float64
            };
            if column.dtype() != &expected {
                return Err(Error::InvalidColumn(format!(
                    "column '{}' has dtype {}, expected {}",
                    column.name(),
                    column.dtype(),
                    expected
                )));
            }
            if column.null_count() > 0 {
                let row = first_null_row(column);
                return Err(Error::NullValue {
                    column: column.name().to_string(),
                    row,
                });
            }
        }

        let table = Self { df };
        // Reject labels outside the fixed category set up front.
        table.species()?;
        Ok(table)
    }

    /// The underlying DataFrame.
    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.df.height()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.df.width()
    }

    /// The first `n` rows, for overview rendering.
    pub fn head(&self, n: usize) -> DataFrame {
        self.df.head(Some(n))
    }

    /// A measurement column as a dense vector.
    ///
    /// Only the four numeric columns are valid here; the label column is
    /// reached through [`MeasurementTable::species`].
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>> {
        if !MEASUREMENT_COLUMNS.contains(&name) {
            return Err(Error::InvalidColumn(name.to_string()));
        }
        let ca = self
            .df
            .column(name)
            .map_err(|_| Error::InvalidColumn(name.to_string()))?
            .f64()?;
        Ok(ca.into_no_null_iter().collect())
    }

    /// The label column as typed species values.
    pub fn species(&self) -> Result<Vec<Species>> {
        let ca = self.df.column(SPECIES_COLUMN)?.str()?;
        ca.into_no_null_iter().map(|s| s.parse()).collect()
    }

    /// Per-column (name, dtype) pairs, in schema order.
    pub fn column_types(&self) -> Vec<(String, String)> {
        self.df
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.dtype().to_string()))
            .collect()
    }

    /// Per-column null counts, in schema order.
    ///
    /// Always zero for a table that passed validation; reported anyway so the
    /// exploration output mirrors the reference report.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.df
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect()
    }
}

fn first_null_row(column: &Column) -> usize {
    (0..column.len())
        .position(|i| column.get(i).map(|v| v.is_null()).unwrap_or(true))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_frame() -> DataFrame {
        df![
            "sepal_length" => [5.1, 4.9],
            "sepal_width" => [3.5, 3.0],
            "petal_length" => [1.4, 1.4],
            "petal_width" => [0.2, 0.2],
            "species" => ["setosa", "setosa"],
        ]
        .unwrap()
    }

    #[test]
    fn accepts_well_formed_frame() {
        let table = MeasurementTable::from_dataframe(valid_frame()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_columns(), 5);
        assert_eq!(table.species().unwrap(), vec![Species::Setosa; 2]);
    }

    #[test]
    fn rejects_wrong_column_order() {
        let df = df![
            "sepal_width" => [3.5],
            "sepal_length" => [5.1],
            "petal_length" => [1.4],
            "petal_width" => [0.2],
            "species" => ["setosa"],
        ]
        .unwrap();
        let err = MeasurementTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { .. }));
    }

    #[test]
    fn rejects_wrong_dtype() {
        let df = df![
            "sepal_length" => [5i64, 4],
            "sepal_width" => [3.5, 3.0],
            "petal_length" => [1.4, 1.4],
            "petal_width" => [0.2, 0.2],
            "species" => ["setosa", "setosa"],
        ]
        .unwrap();
        let err = MeasurementTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(_)));
    }

    #[test]
    fn rejects_null_label() {
        let df = df![
            "sepal_length" => [5.1, 4.9],
            "sepal_width" => [3.5, 3.0],
            "petal_length" => [1.4, 1.4],
            "petal_width" => [0.2, 0.2],
            "species" => [Some("setosa"), None],
        ]
        .unwrap();
        let err = MeasurementTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, Error::NullValue { row: 1, .. }));
    }

    #[test]
    fn rejects_unknown_label() {
        let df = df![
            "sepal_length" => [5.1],
            "sepal_width" => [3.5],
            "petal_length" => [1.4],
            "petal_width" => [0.2],
            "species" => ["tulip"],
        ]
        .unwrap();
        let err = MeasurementTable::from_dataframe(df).unwrap_err();
        assert!(matches!(err, Error::UnknownSpecies(_)));
    }

    #[test]
    fn numeric_rejects_label_column() {
        let table = MeasurementTable::from_dataframe(valid_frame()).unwrap();
        assert!(table.numeric("species").is_err());
        assert!(table.numeric("no_such_column").is_err());
    }
}
