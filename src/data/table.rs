//! Table Module
//! Typed wrapper around the polars DataFrame built from an uploaded spreadsheet.

use crate::data::schema::{format_number, ColumnInfo, ColumnKind, ColumnPartition};
use polars::prelude::*;

/// First rows of a table, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// An uploaded dataset: the DataFrame plus the inferred schema.
///
/// Numeric columns are stored as `Float64`, categorical ones as `String`;
/// missing cells are nulls.
#[derive(Debug, Clone)]
pub struct Table {
    source_name: String,
    df: DataFrame,
    columns: Vec<ColumnInfo>,
}

impl Table {
    pub fn new(source_name: impl Into<String>, df: DataFrame, columns: Vec<ColumnInfo>) -> Self {
        Self {
            source_name: source_name.into(),
            df,
            columns,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    pub fn partition(&self) -> ColumnPartition {
        ColumnPartition::from_columns(&self.columns)
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Non-missing values of a numeric column.
    pub fn numeric_values(&self, column: &str) -> PolarsResult<Vec<f64>> {
        let ca = self.df.column(column)?.cast(&DataType::Float64)?;
        Ok(ca.f64()?.into_iter().flatten().collect())
    }

    /// Non-missing values of a column rendered as text.
    pub fn text_values(&self, column: &str) -> PolarsResult<Vec<String>> {
        let ca = self.df.column(column)?.cast(&DataType::String)?;
        Ok(ca
            .str()?
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect())
    }

    /// Non-missing values of `value_column` on rows where `group_column`
    /// equals `group`. Columns are looked up by exact name, so headers such
    /// as `*` or `^...$` never expand into several columns.
    pub fn numeric_values_where(
        &self,
        value_column: &str,
        group_column: &str,
        group: &str,
    ) -> PolarsResult<Vec<f64>> {
        let groups = self.df.column(group_column)?.cast(&DataType::String)?;
        let mask = groups.str()?.equal(group);
        let values = self
            .df
            .column(value_column)?
            .cast(&DataType::Float64)?
            .filter(&mask)?;
        Ok(values.f64()?.into_iter().flatten().collect())
    }

    /// Distinct non-missing values of a column in first-appearance order.
    pub fn distinct_labels(&self, column: &str) -> PolarsResult<Vec<String>> {
        let series = self
            .df
            .column(column)?
            .cast(&DataType::String)?
            .as_materialized_series()
            .unique_stable()?;
        Ok(series
            .str()?
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect())
    }

    /// Sum of `value_column` per distinct `category_column` value, categories
    /// in first-appearance order.
    pub fn sums_by_category(
        &self,
        category_column: &str,
        value_column: &str,
    ) -> PolarsResult<Vec<(String, f64)>> {
        self.distinct_labels(category_column)?
            .into_iter()
            .map(|label| -> PolarsResult<(String, f64)> {
                let total: f64 = self
                    .numeric_values_where(value_column, category_column, &label)?
                    .iter()
                    .sum();
                Ok((label, total))
            })
            .collect()
    }

    /// First `n` rows formatted as strings; missing cells render empty.
    pub fn preview(&self, n: usize) -> PreviewTable {
        let head = self.df.head(Some(n));
        let headers = self.column_names();
        let mut rows = vec![Vec::with_capacity(headers.len()); head.height()];

        for info in &self.columns {
            let Ok(column) = head.column(&info.name) else {
                rows.iter_mut().for_each(|row| row.push(String::new()));
                continue;
            };
            let cells: Vec<String> = match info.kind {
                ColumnKind::Numeric => column
                    .f64()
                    .map(|ca| {
                        ca.into_iter()
                            .map(|v| v.map(format_number).unwrap_or_default())
                            .collect()
                    })
                    .unwrap_or_default(),
                ColumnKind::Categorical => column
                    .str()
                    .map(|ca| {
                        ca.into_iter()
                            .map(|v| v.unwrap_or_default().to_string())
                            .collect()
                    })
                    .unwrap_or_default(),
            };
            for (row, cell) in rows.iter_mut().zip(
                cells
                    .into_iter()
                    .chain(std::iter::repeat(String::new())),
            ) {
                row.push(cell);
            }
        }

        PreviewTable { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_table;

    #[test]
    fn numeric_values_skip_missing() {
        let table = sample_table();
        assert_eq!(table.numeric_values("Age").unwrap(), vec![20.0, 40.0, 30.0, 50.0]);
    }

    #[test]
    fn distinct_labels_in_first_appearance_order() {
        let table = sample_table();
        assert_eq!(
            table.distinct_labels("Class").unwrap(),
            vec!["Eco", "Business", "Eco Plus"]
        );
    }

    #[test]
    fn values_filtered_by_group() {
        let table = sample_table();
        assert_eq!(
            table.numeric_values_where("Age", "Class", "Eco").unwrap(),
            vec![20.0, 30.0]
        );
        assert!(table
            .numeric_values_where("Age", "Class", "Eco Plus")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sums_grouped_by_category() {
        let table = sample_table();
        let sums = table.sums_by_category("Class", "Age").unwrap();
        assert_eq!(
            sums,
            vec![
                ("Eco".to_string(), 50.0),
                ("Business".to_string(), 40.0),
                ("Eco Plus".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn preview_formats_rows() {
        let table = sample_table();
        let preview = table.preview(4);
        assert_eq!(preview.headers, vec!["Class", "Age"]);
        assert_eq!(preview.rows.len(), 4);
        assert_eq!(preview.rows[0], vec!["Eco", "20"]);
        assert_eq!(preview.rows[3], vec!["", "50"]);
    }

    #[test]
    fn pattern_like_headers_are_looked_up_literally() {
        let df = DataFrame::new(vec![
            Series::new("^Cl.*$".into(), vec![Some("Eco"), Some("Business"), Some("Eco")]).into(),
            Series::new("*".into(), vec![Some(1.0), Some(2.0), Some(4.0)]).into(),
            Series::new("Age".into(), vec![Some(100.0), Some(200.0), Some(300.0)]).into(),
        ])
        .unwrap();
        let table = Table::new(
            "patterns.xlsx",
            df,
            vec![
                ColumnInfo {
                    name: "^Cl.*$".into(),
                    kind: ColumnKind::Categorical,
                },
                ColumnInfo {
                    name: "*".into(),
                    kind: ColumnKind::Numeric,
                },
                ColumnInfo {
                    name: "Age".into(),
                    kind: ColumnKind::Numeric,
                },
            ],
        );

        assert_eq!(
            table.numeric_values_where("*", "^Cl.*$", "Eco").unwrap(),
            vec![1.0, 4.0]
        );
        assert_eq!(
            table.sums_by_category("^Cl.*$", "*").unwrap(),
            vec![("Eco".to_string(), 5.0), ("Business".to_string(), 2.0)]
        );
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = sample_table();
        assert!(table.numeric_values("Nope").is_err());
    }
}
