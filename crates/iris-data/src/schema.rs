//! Fixed schema of the measurement table
//!
//! The column set and order never change after load: four Float64 measurement
//! columns (centimetres) followed by the categorical species label.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Numeric measurement columns, in schema order.
pub const MEASUREMENT_COLUMNS: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// The categorical label column.
pub const SPECIES_COLUMN: &str = "species";

/// All five columns, in schema order.
pub const ALL_COLUMNS: [&str; 5] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
    "species",
];

/// The three-valued species label of the reference dataset.
///
/// Variant order matches lexicographic label order, so deriving `Ord` gives
/// the same grouping order the reports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All species, in label order.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// The label as stored in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setosa" => Ok(Species::Setosa),
            "versicolor" => Ok(Species::Versicolor),
            "virginica" => Ok(Species::Virginica),
            other => Err(Error::UnknownSpecies(other.to_string())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
