//! Per-column descriptive summary
//!
//! The eight statistics the exploration report prints for each numeric
//! column: count, mean, std, min, the three quartiles and max.

use crate::error::{Error, Result};
use crate::moments::{mean, sample_std};
use crate::quantile::quartiles_sorted;

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Compute the descriptive summary of a sample.
///
/// Needs at least two values so the standard deviation is defined.
pub fn describe(sample: &[f64]) -> Result<Summary> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let (q1, median, q3) = quartiles_sorted(&sorted)?;
    Ok(Summary {
        count: sample.len(),
        mean: mean(sample)?,
        std: sample_std(sample)?,
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn summary_of_small_sample() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let summary = describe(&data).unwrap();
        assert_eq!(summary.count, 4);
        assert_relative_eq!(summary.mean, 2.5);
        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.q1, 1.75);
        assert_relative_eq!(summary.median, 2.5);
        assert_relative_eq!(summary.q3, 3.25);
        assert_relative_eq!(summary.max, 4.0);
    }

    #[test]
    fn summary_is_order_independent() {
        let a = describe(&[3.0, 1.0, 2.0, 4.0]).unwrap();
        let b = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_value_is_rejected() {
        assert!(matches!(
            describe(&[1.0]),
            Err(Error::InsufficientData { .. })
        ));
    }
}
