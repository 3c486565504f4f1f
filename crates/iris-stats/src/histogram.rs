//! Fixed-width histogram construction
//!
//! Equal-width bins over the sample range, with both raw counts and
//! normalized densities. The last bin is closed on the right so the maximum
//! lands inside the histogram.

use crate::error::{Error, Result};

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Center point of the bin.
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Width of the bin.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// The bins, in ascending order.
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the histogram has no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of data points.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Minimum value in the data.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum value in the data.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Largest bin count, for chart axis scaling.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Counts as a vector.
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a builder with the given bin count (at least one).
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }

    /// Build a histogram from an unsorted sample.
    pub fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.build_sorted(&sorted)
    }

    /// Build a histogram from an already sorted sample.
    pub fn build_sorted(&self, sorted: &[f64]) -> Result<Histogram> {
        if sorted.is_empty() {
            return Err(Error::empty_input());
        }

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        if (max - min).abs() < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, sorted.len(), sorted.len());
            return Ok(Histogram {
                bins: vec![bin],
                total_count: sorted.len(),
                min,
                max,
            });
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);
        for i in 0..self.num_bins {
            let left = min + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                max // ensure last bin includes max
            } else {
                min + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0, sorted.len()));
        }

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        let total = sorted.len();
        for bin in &mut bins {
            bin.density = bin.count as f64 / (total as f64 * bin.width());
        }

        Ok(Histogram {
            bins,
            total_count: total,
            min,
            max,
        })
    }
}
