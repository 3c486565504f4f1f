//! Invariants of the bundled reference dataset

use approx::assert_relative_eq;
use iris_data::{load_iris, Species, ALL_COLUMNS, MEASUREMENT_COLUMNS, SAMPLE_COUNT};

#[test]
fn schema_is_fixed() {
    let table = load_iris().unwrap();
    let names: Vec<String> = table
        .column_types()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, ALL_COLUMNS);
}

#[test]
fn row_count_matches_reference() {
    let table = load_iris().unwrap();
    assert_eq!(table.n_rows(), SAMPLE_COUNT);
    for column in MEASUREMENT_COLUMNS {
        assert_eq!(table.numeric(column).unwrap().len(), SAMPLE_COUNT);
    }
}

#[test]
fn no_nulls_anywhere() {
    let table = load_iris().unwrap();
    for (column, nulls) in table.null_counts() {
        assert_eq!(nulls, 0, "column {column} has nulls");
    }
}

#[test]
fn column_means_match_reference_values() {
    let table = load_iris().unwrap();
    let mean = |name: &str| {
        let values = table.numeric(name).unwrap();
        values.iter().sum::<f64>() / values.len() as f64
    };
    assert_relative_eq!(mean("sepal_length"), 5.8433, epsilon = 1e-3);
    assert_relative_eq!(mean("sepal_width"), 3.0573, epsilon = 1e-3);
    assert_relative_eq!(mean("petal_length"), 3.758, epsilon = 1e-3);
    assert_relative_eq!(mean("petal_width"), 1.1993, epsilon = 1e-3);
}

#[test]
fn species_blocks_are_contiguous_and_balanced() {
    let table = load_iris().unwrap();
    let species = table.species().unwrap();
    assert!(species[..50].iter().all(|&s| s == Species::Setosa));
    assert!(species[50..100].iter().all(|&s| s == Species::Versicolor));
    assert!(species[100..].iter().all(|&s| s == Species::Virginica));
}
