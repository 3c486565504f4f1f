//! Iris measurement analysis pipeline
//!
//! Ties the workspace crates together into four report stages: data
//! exploration, grouped analysis, chart rendering, and a computed key
//! findings block. The binary in `main.rs` runs them in order against
//! the embedded dataset.

pub mod analyze;
pub mod explore;
pub mod findings;
pub mod visualize;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use iris_data::MeasurementTable;

/// Run every stage: text reports to `out`, charts into `output_dir`.
pub fn run<W: Write>(table: &MeasurementTable, output_dir: &Path, out: &mut W) -> Result<()> {
    explore::report(table, out)?;
    analyze::report(table, out)?;
    visualize::render_all(table, output_dir)?;
    findings::report(table, out)?;
    Ok(())
}
