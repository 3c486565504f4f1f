//! Sample moments and correlation

use crate::error::{Error, Result};

/// Arithmetic mean.
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Unbiased sample standard deviation (ddof = 1), as the reference summary
/// reports it.
pub fn sample_std(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    let m = mean(sample)?;
    let ss: f64 = sample.iter().map(|x| (x - m) * (x - m)).sum();
    Ok((ss / (sample.len() - 1) as f64).sqrt())
}

/// Moment-based sample skewness (Fisher-Pearson g1).
///
/// Zero for symmetric data; small |g1| on the sepal-width column is what the
/// findings report as "approximately normal".
pub fn sample_skewness(sample: &[f64]) -> Result<f64> {
    if sample.len() < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: sample.len(),
        });
    }
    let n = sample.len() as f64;
    let m = mean(sample)?;
    let m2: f64 = sample.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n;
    let m3: f64 = sample.iter().map(|x| (x - m).powi(3)).sum::<f64>() / n;
    if m2 <= f64::EPSILON {
        return Ok(0.0);
    }
    Ok(m3 / m2.powf(1.5))
}

/// Pearson correlation coefficient between two paired samples.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let mx = mean(x)?;
    let my = mean(y)?;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom <= f64::EPSILON {
        return Err(Error::Computation(
            "correlation undefined for a constant sample".to_string(),
        ));
    }
    Ok(cov / denom)
}
