//! Summary Statistics
//! Builds the overview table shown under "Summary Statistics".

use crate::data::{ColumnKind, Table};
use crate::stats::{DescriptiveStats, StatsCalculator};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::warn;

pub const NUMERIC_ROW_LABELS: [&str; 8] =
    ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
pub const CATEGORICAL_ROW_LABELS: [&str; 4] = ["count", "unique", "top", "freq"];

/// Frequency summary of one categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalStats {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

/// Summary of a table, one column per summarised table column.
///
/// Numeric columns are summarised when the table has any; otherwise the
/// categorical columns are.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryTable {
    Numeric(Vec<(String, DescriptiveStats)>),
    Categorical(Vec<(String, CategoricalStats)>),
    Empty,
}

impl SummaryTable {
    pub fn describe(table: &Table) -> Self {
        let partition = table.partition();

        if !partition.numeric.is_empty() {
            let columns = partition
                .numeric
                .par_iter()
                .map(|name| {
                    let values = table.numeric_values(name).unwrap_or_else(|e| {
                        warn!(column = %name, error = %e, "could not read numeric column");
                        Vec::new()
                    });
                    (name.clone(), StatsCalculator::compute_descriptive_stats(&values))
                })
                .collect();
            return SummaryTable::Numeric(columns);
        }

        if !partition.categorical.is_empty() {
            let columns = partition
                .categorical
                .par_iter()
                .map(|name| {
                    let values = table.text_values(name).unwrap_or_else(|e| {
                        warn!(column = %name, error = %e, "could not read categorical column");
                        Vec::new()
                    });
                    (name.clone(), categorical_stats(&values))
                })
                .collect();
            return SummaryTable::Categorical(columns);
        }

        SummaryTable::Empty
    }

    pub fn row_labels(&self) -> &'static [&'static str] {
        match self {
            SummaryTable::Numeric(_) => &NUMERIC_ROW_LABELS,
            SummaryTable::Categorical(_) => &CATEGORICAL_ROW_LABELS,
            SummaryTable::Empty => &[],
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        match self {
            SummaryTable::Numeric(cols) => cols.iter().map(|(n, _)| n.as_str()).collect(),
            SummaryTable::Categorical(cols) => cols.iter().map(|(n, _)| n.as_str()).collect(),
            SummaryTable::Empty => Vec::new(),
        }
    }

    /// Cells of one summary row, formatted for display, one per column.
    pub fn row(&self, label: &str) -> Vec<String> {
        match self {
            SummaryTable::Numeric(cols) => cols
                .iter()
                .map(|(_, s)| match label {
                    "count" => format!("{:.1}", s.count as f64),
                    "mean" => format_stat(s.mean),
                    "std" => format_stat(s.std),
                    "min" => format_stat(s.min),
                    "25%" => format_stat(s.q1),
                    "50%" => format_stat(s.median),
                    "75%" => format_stat(s.q3),
                    "max" => format_stat(s.max),
                    _ => String::new(),
                })
                .collect(),
            SummaryTable::Categorical(cols) => cols
                .iter()
                .map(|(_, s)| match label {
                    "count" => s.count.to_string(),
                    "unique" => s.unique.to_string(),
                    "top" => s.top.clone().unwrap_or_else(|| "NaN".to_string()),
                    "freq" => s.freq.to_string(),
                    _ => String::new(),
                })
                .collect(),
            SummaryTable::Empty => Vec::new(),
        }
    }

    pub fn kind(&self) -> Option<ColumnKind> {
        match self {
            SummaryTable::Numeric(_) => Some(ColumnKind::Numeric),
            SummaryTable::Categorical(_) => Some(ColumnKind::Categorical),
            SummaryTable::Empty => None,
        }
    }
}

/// Count, distinct count and most frequent value; ties go to the value seen
/// first.
pub fn categorical_stats(values: &[String]) -> CategoricalStats {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for v in values {
        let entry = counts.entry(v.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(v.as_str());
        }
        *entry += 1;
    }

    let mut top: Option<(&str, usize)> = None;
    for label in &order {
        let n = counts[label];
        if top.map_or(true, |(_, best)| n > best) {
            top = Some((label, n));
        }
    }

    CategoricalStats {
        count: values.len(),
        unique: order.len(),
        top: top.map(|(label, _)| label.to_string()),
        freq: top.map_or(0, |(_, n)| n),
    }
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_table;
    use polars::prelude::*;

    #[test]
    fn numeric_columns_are_described() {
        let summary = SummaryTable::describe(&sample_table());
        assert_eq!(summary.kind(), Some(ColumnKind::Numeric));
        assert_eq!(summary.column_names(), vec!["Age"]);
        assert_eq!(summary.row("count"), vec!["4.0"]);
        assert_eq!(summary.row("mean"), vec!["35.000"]);
        assert_eq!(summary.row("min"), vec!["20.000"]);
        assert_eq!(summary.row("50%"), vec!["35.000"]);
        assert_eq!(summary.row("max"), vec!["50.000"]);
    }

    #[test]
    fn categorical_only_table_uses_frequency_summary() {
        let df = DataFrame::new(vec![Series::new(
            "Gender".into(),
            vec!["Male", "Female", "Female", "Male", "Female"],
        )
        .into()])
        .unwrap();
        let table = Table::new(
            "g.xlsx",
            df,
            vec![crate::data::schema::ColumnInfo {
                name: "Gender".into(),
                kind: ColumnKind::Categorical,
            }],
        );
        let summary = SummaryTable::describe(&table);
        assert_eq!(summary.row_labels(), &CATEGORICAL_ROW_LABELS);
        assert_eq!(summary.row("count"), vec!["5"]);
        assert_eq!(summary.row("unique"), vec!["2"]);
        assert_eq!(summary.row("top"), vec!["Female"]);
        assert_eq!(summary.row("freq"), vec!["3"]);
    }

    #[test]
    fn ties_go_to_first_seen_value() {
        let values: Vec<String> = ["b", "a", "a", "b"].iter().map(|s| s.to_string()).collect();
        let stats = categorical_stats(&values);
        assert_eq!(stats.top.as_deref(), Some("b"));
        assert_eq!(stats.freq, 2);
    }

    #[test]
    fn empty_table_has_empty_summary() {
        let table = Table::new("e.xlsx", DataFrame::empty(), Vec::new());
        assert_eq!(SummaryTable::describe(&table), SummaryTable::Empty);
    }
}
