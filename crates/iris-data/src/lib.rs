//! Bundled iris reference dataset behind a schema-checked table type
//!
//! The crate owns the data model of the analysis pipeline: a five-column
//! measurement table (four Float64 measurements in centimetres plus a
//! categorical species label) with a fixed column order. The table is built
//! once from the bundled CSV and is read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use iris_data::{load_iris, Species};
//!
//! let table = iris_data::load_iris().unwrap();
//! assert_eq!(table.n_rows(), iris_data::SAMPLE_COUNT);
//! let petals = table.numeric("petal_length").unwrap();
//! assert_eq!(petals.len(), table.species().unwrap().len());
//! ```

pub mod dataset;
pub mod error;
pub mod schema;
pub mod table;

pub use dataset::{load_iris, parse_csv, SAMPLE_COUNT};
pub use error::{Error, Result};
pub use schema::{Species, ALL_COLUMNS, MEASUREMENT_COLUMNS, SPECIES_COLUMN};
pub use table::MeasurementTable;
