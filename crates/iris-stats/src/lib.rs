//! Descriptive statistics for the iris analysis pipeline
//!
//! Slice-oriented estimators with no knowledge of the table layer: summaries,
//! linear-interpolation quantiles, grouped aggregates, fixed-width histograms
//! and a Gaussian KDE for the distribution chart overlay.
//!
//! # Examples
//!
//! ```rust
//! use iris_stats::{describe, FixedWidthBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let summary = describe(&data).unwrap();
//! assert_eq!(summary.count, 5);
//! assert_eq!(summary.median, 3.0);
//!
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//! assert_eq!(histogram.counts().iter().sum::<usize>(), data.len());
//! ```

pub mod describe;
pub mod density;
pub mod error;
pub mod group;
pub mod histogram;
pub mod moments;
pub mod quantile;

pub use describe::{describe, Summary};
pub use density::{gaussian_kde, silverman_bandwidth};
pub use error::{Error, Result};
pub use group::{group_means, value_counts, GroupMeans};
pub use histogram::{FixedWidthBuilder, Histogram, HistogramBin};
pub use moments::{mean, pearson_correlation, sample_skewness, sample_std};
pub use quantile::{quantile, quantile_sorted, quartiles_sorted};
