//! Quantile estimation by linear interpolation
//!
//! Matches the reference implementation's quantile definition (Hyndman-Fan
//! type 7): the `p`-quantile of a sorted sample of size `n` interpolates
//! between the order statistics around `(n - 1) * p`.

use crate::error::{Error, Result};

/// Estimate the `p`-quantile of an already sorted, finite sample.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::empty_input());
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidQuantile(p));
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Estimate the `p`-quantile of an unsorted sample.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    quantile_sorted(&sorted, p)
}

/// First, second and third quartiles of a sorted sample.
pub fn quartiles_sorted(sorted: &[f64]) -> Result<(f64, f64, f64)> {
    Ok((
        quantile_sorted(sorted, 0.25)?,
        quantile_sorted(sorted, 0.50)?,
        quantile_sorted(sorted, 0.75)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn median_of_odd_sample() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_sorted(&data, 0.5).unwrap(), 3.0);
    }

    #[test]
    fn median_of_even_sample_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile_sorted(&data, 0.5).unwrap(), 2.5);
    }

    #[test]
    fn quartiles_match_linear_interpolation() {
        // Same values the reference library reports for this sample.
        let data = [1.0, 2.0, 3.0, 4.0];
        let (q1, q2, q3) = quartiles_sorted(&data).unwrap();
        assert_relative_eq!(q1, 1.75);
        assert_relative_eq!(q2, 2.5);
        assert_relative_eq!(q3, 3.25);
    }

    #[test]
    fn endpoints_are_min_and_max() {
        let data = [2.0, 9.0, 4.0, 7.0];
        assert_relative_eq!(quantile(&data, 0.0).unwrap(), 2.0);
        assert_relative_eq!(quantile(&data, 1.0).unwrap(), 9.0);
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let data = [1.0, 2.0];
        assert!(matches!(
            quantile_sorted(&data, 1.5),
            Err(Error::InvalidQuantile(_))
        ));
        assert!(matches!(
            quantile_sorted(&data, -0.1),
            Err(Error::InvalidQuantile(_))
        ));
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert!(quantile_sorted(&[], 0.5).is_err());
    }

    proptest! {
        #[test]
        fn estimate_stays_within_sample_range(
            data in proptest::collection::vec(-1e6f64..1e6, 1..200),
            p in 0.0f64..=1.0,
        ) {
            let q = quantile(&data, p).unwrap();
            let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(q >= min && q <= max);
        }

        #[test]
        fn estimate_is_monotone_in_p(
            data in proptest::collection::vec(-1e6f64..1e6, 2..100),
            p1 in 0.0f64..=1.0,
            p2 in 0.0f64..=1.0,
        ) {
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            let q_lo = quantile(&data, lo).unwrap();
            let q_hi = quantile(&data, hi).unwrap();
            prop_assert!(q_lo <= q_hi);
        }
    }
}
