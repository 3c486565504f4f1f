use std::io;
use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use iris_analysis::{analyze, explore, findings, visualize};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = iris_data::load_iris()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    explore::report(&table, &mut out)?;
    analyze::report(&table, &mut out)?;
    visualize::render_all(&table, Path::new(visualize::DEFAULT_OUTPUT_DIR))?;
    findings::report(&table, &mut out)?;

    Ok(())
}
