//! Grouped aggregates over a categorical label
//!
//! Generic over the label type so the estimators stay independent of any
//! particular dataset's category enum.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::moments::mean;

/// Count rows per label, ordered by descending count.
///
/// Ties are broken by ascending label so the output is deterministic.
pub fn value_counts<L: Ord + Clone>(labels: &[L]) -> Vec<(L, usize)> {
    let mut counts: BTreeMap<L, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label.clone()).or_default() += 1;
    }
    let mut out: Vec<(L, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Per-label means of several named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans<L> {
    /// Column names, in input order.
    pub columns: Vec<String>,
    /// One row per label in ascending label order; values align with
    /// `columns`.
    pub rows: Vec<(L, Vec<f64>)>,
}

impl<L: PartialEq> GroupMeans<L> {
    /// Mean of `column` for `label`, if both exist.
    pub fn mean_of(&self, label: &L, column: &str) -> Option<f64> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        let (_, values) = self.rows.iter().find(|(l, _)| l == label)?;
        Some(values[col_idx])
    }
}

/// Group rows by label and compute the mean of each column per group.
///
/// Every column must be as long as the label vector.
pub fn group_means<L: Ord + Clone>(
    labels: &[L],
    columns: &[(&str, &[f64])],
) -> Result<GroupMeans<L>> {
    if labels.is_empty() {
        return Err(Error::empty_input());
    }
    for (_, values) in columns {
        if values.len() != labels.len() {
            return Err(Error::LengthMismatch {
                left: labels.len(),
                right: values.len(),
            });
        }
    }

    let mut partitions: BTreeMap<L, Vec<usize>> = BTreeMap::new();
    for (row, label) in labels.iter().enumerate() {
        partitions.entry(label.clone()).or_default().push(row);
    }

    let mut rows = Vec::with_capacity(partitions.len());
    for (label, indices) in partitions {
        let means = columns
            .iter()
            .map(|(_, values)| {
                let group: Vec<f64> = indices.iter().map(|&i| values[i]).collect();
                mean(&group)
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push((label, means));
    }

    Ok(GroupMeans {
        columns: columns.iter().map(|(name, _)| name.to_string()).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn counts_are_sorted_by_frequency() {
        let labels = ["b", "a", "b", "c", "b", "a"];
        let counts = value_counts(&labels);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn tied_counts_fall_back_to_label_order() {
        let labels = ["b", "a", "a", "b"];
        let counts = value_counts(&labels);
        assert_eq!(counts, vec![("a", 2), ("b", 2)]);
    }

    #[test]
    fn means_are_grouped_by_label() {
        let labels = ["x", "y", "x", "y"];
        let col_a = [1.0, 10.0, 3.0, 20.0];
        let col_b = [0.5, 1.0, 1.5, 3.0];
        let result = group_means(&labels, &[("a", &col_a), ("b", &col_b)]).unwrap();

        assert_eq!(result.columns, vec!["a", "b"]);
        assert_eq!(result.rows.len(), 2);
        assert_relative_eq!(result.mean_of(&"x", "a").unwrap(), 2.0);
        assert_relative_eq!(result.mean_of(&"x", "b").unwrap(), 1.0);
        assert_relative_eq!(result.mean_of(&"y", "a").unwrap(), 15.0);
        assert_relative_eq!(result.mean_of(&"y", "b").unwrap(), 2.0);
    }

    #[test]
    fn group_means_is_deterministic() {
        let labels = ["y", "x", "y", "x"];
        let col = [1.0, 2.0, 3.0, 4.0];
        let once = group_means(&labels, &[("v", &col)]).unwrap();
        let twice = group_means(&labels, &[("v", &col)]).unwrap();
        assert_eq!(once, twice);
        // Rows come back in ascending label order regardless of input order.
        assert_eq!(once.rows[0].0, "x");
        assert_eq!(once.rows[1].0, "y");
    }

    #[test]
    fn column_length_mismatch_is_rejected() {
        let labels = ["x", "y"];
        let short = [1.0];
        assert!(matches!(
            group_means(&labels, &[("v", &short)]),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn empty_labels_are_rejected() {
        let labels: [&str; 0] = [];
        assert!(group_means(&labels, &[]).is_err());
    }
}
