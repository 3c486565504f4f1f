//! Gaussian kernel density estimation
//!
//! Smooth density curve for the histogram overlay. Bandwidth follows
//! Silverman's rule of thumb: `0.9 * min(std, iqr / 1.34) * n^(-1/5)`.

use statrs::distribution::{Continuous, Normal};

use crate::error::{Error, Result};
use crate::moments::sample_std;
use crate::quantile::quartiles_sorted;

/// Silverman's rule-of-thumb bandwidth for a sample.
pub fn silverman_bandwidth(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }

    let std = sample_std(sample)?;
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let (q1, _, q3) = quartiles_sorted(&sorted)?;
    let iqr = q3 - q1;

    let spread = if iqr > 0.0 {
        std.min(iqr / 1.34)
    } else {
        std
    };
    if spread <= 0.0 {
        return Err(Error::Computation(
            "bandwidth undefined for a constant sample".to_string(),
        ));
    }
    Ok(0.9 * spread * (sample.len() as f64).powf(-0.2))
}

/// Evaluate a Gaussian KDE of `sample` at `points` evenly spaced positions
/// across `[lo, hi]`.
///
/// Returns `(x, density)` pairs; the density integrates to one over the real
/// line, so callers scale it themselves when overlaying count axes.
pub fn gaussian_kde(sample: &[f64], lo: f64, hi: f64, points: usize) -> Result<Vec<(f64, f64)>> {
    if points < 2 {
        return Err(Error::InvalidParameter(
            "KDE grid needs at least 2 points".to_string(),
        ));
    }
    if hi <= lo {
        return Err(Error::InvalidParameter(format!(
            "invalid KDE range [{lo}, {hi}]"
        )));
    }

    let bandwidth = silverman_bandwidth(sample)?;
    let kernel =
        Normal::new(0.0, 1.0).map_err(|e| Error::Computation(format!("normal kernel: {e}")))?;

    let n = sample.len() as f64;
    let step = (hi - lo) / (points - 1) as f64;
    let curve = (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density = sample
                .iter()
                .map(|&xi| kernel.pdf((x - xi) / bandwidth))
                .sum::<f64>()
                / (n * bandwidth);
            (x, density)
        })
        .collect();
    Ok(curve)
}
