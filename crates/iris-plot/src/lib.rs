//! PNG chart rendering for the iris analysis
//!
//! Four chart kinds built on the [`plotters`] bitmap backend: a line chart,
//! a categorical bar chart, a histogram with a density overlay, and a
//! grouped scatter chart. Charts are saved as PNG files; the backend uses
//! bitmap font rendering so it works in headless environments.

pub mod bar;
pub mod error;
pub mod hist;
pub mod line;
pub mod scatter;
pub mod style;

pub use bar::bar_chart;
pub use error::{PlotError, Result};
pub use hist::histogram_chart;
pub use line::line_chart;
pub use scatter::{scatter_chart, ScatterGroup};
