//! Exploration report: overview, schema, summary statistics, missing values

use std::io::Write;

use anyhow::Result;
use iris_data::{MeasurementTable, MEASUREMENT_COLUMNS};
use iris_stats::{describe, Summary};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ColumnInfo {
    #[tabled(rename = "Column")]
    column: String,
    #[tabled(rename = "Non-Null Count")]
    non_null: usize,
    #[tabled(rename = "Dtype")]
    dtype: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Statistic")]
    statistic: String,
    sepal_length: String,
    sepal_width: String,
    petal_length: String,
    petal_width: String,
}

#[derive(Tabled)]
struct MissingRow {
    #[tabled(rename = "Column")]
    column: String,
    #[tabled(rename = "Missing")]
    missing: usize,
}

/// Write the exploration report for `table` to `out`.
pub fn report<W: Write>(table: &MeasurementTable, out: &mut W) -> Result<()> {
    writeln!(out, "\n=== Data Overview ===")?;
    writeln!(out, "{}", table.head(5))?;

    writeln!(out, "\n=== Dataset Information ===")?;
    writeln!(out, "{} entries, {} columns", table.n_rows(), table.n_columns())?;
    let info: Vec<ColumnInfo> = table
        .column_types()
        .into_iter()
        .zip(table.null_counts())
        .map(|((column, dtype), (_, nulls))| ColumnInfo {
            non_null: table.n_rows() - nulls,
            column,
            dtype,
        })
        .collect();
    writeln!(out, "{}", Table::new(&info))?;

    writeln!(out, "\n=== Statistical Summary ===")?;
    let summaries = column_summaries(table)?;
    writeln!(out, "{}", Table::new(&summary_rows(&summaries)))?;

    writeln!(out, "\n=== Missing Values ===")?;
    let missing: Vec<MissingRow> = table
        .null_counts()
        .into_iter()
        .map(|(column, missing)| MissingRow { column, missing })
        .collect();
    writeln!(out, "{}", Table::new(&missing))?;

    Ok(())
}

/// Descriptive summary per measurement column, in schema order.
pub fn column_summaries(table: &MeasurementTable) -> Result<Vec<Summary>> {
    MEASUREMENT_COLUMNS
        .iter()
        .map(|column| {
            let values = table.numeric(column)?;
            Ok(describe(&values)?)
        })
        .collect()
}

fn summary_rows(summaries: &[Summary]) -> Vec<SummaryRow> {
    let row = |statistic: &str, pick: &dyn Fn(&Summary) -> String| SummaryRow {
        statistic: statistic.to_string(),
        sepal_length: pick(&summaries[0]),
        sepal_width: pick(&summaries[1]),
        petal_length: pick(&summaries[2]),
        petal_width: pick(&summaries[3]),
    };

    vec![
        row("count", &|s| s.count.to_string()),
        row("mean", &|s| format!("{:.6}", s.mean)),
        row("std", &|s| format!("{:.6}", s.std)),
        row("min", &|s| format!("{:.6}", s.min)),
        row("25%", &|s| format!("{:.6}", s.q1)),
        row("50%", &|s| format!("{:.6}", s.median)),
        row("75%", &|s| format!("{:.6}", s.q3)),
        row("max", &|s| format!("{:.6}", s.max)),
    ]
}
