//! Column Schema Inference
//! Normalises spreadsheet cells and classifies columns as numeric or categorical.

use calamine::Data;

/// Inferred kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Name and inferred kind of one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
}

/// A spreadsheet cell reduced to what the dashboard cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn from_cell(cell: &Data) -> Self {
        match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) if f.is_finite() => CellValue::Number(*f),
            Data::Float(_) => CellValue::Missing,
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(trimmed.to_string())
                }
            }
            Data::Bool(b) => CellValue::Text(if *b { "True" } else { "False" }.to_string()),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(ndt) => {
                    let text = ndt.to_string();
                    let text = text.strip_suffix(" 00:00:00").unwrap_or(&text).to_string();
                    CellValue::Text(text)
                }
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Missing,
        }
    }

    /// Numeric reading of the cell: numbers as-is, text only when it parses
    /// as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.parse::<f64>().ok().filter(|n| n.is_finite()),
            CellValue::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Numeric iff every non-missing value parses as a number. A column with no
/// values at all is numeric.
pub fn infer_kind<'a, I>(values: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let all_numeric = values
        .into_iter()
        .filter(|v| !v.is_missing())
        .all(|v| v.as_number().is_some());
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Column names split by kind, each list in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPartition {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnPartition {
    pub fn from_columns(columns: &[ColumnInfo]) -> Self {
        let mut partition = Self::default();
        for column in columns {
            match column.kind {
                ColumnKind::Numeric => partition.numeric.push(column.name.clone()),
                ColumnKind::Categorical => partition.categorical.push(column.name.clone()),
            }
        }
        partition
    }

    pub fn columns_of(&self, kind: ColumnKind) -> &[String] {
        match kind {
            ColumnKind::Numeric => &self.numeric,
            ColumnKind::Categorical => &self.categorical,
        }
    }
}

/// Header names following the spreadsheet reader conventions: blank headers
/// become `Unnamed: <index>` and repeated names get `.1`, `.2`, ... suffixes.
pub fn header_names(raw: &[CellValue]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for (idx, cell) in raw.iter().enumerate() {
        let base = cell
            .as_text()
            .unwrap_or_else(|| format!("Unnamed: {}", idx));
        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(name);
    }
    names
}

/// Whole numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn numbers_and_numeric_text_are_numeric() {
        let values = vec![CellValue::Number(3.0), text("4.5"), CellValue::Missing];
        assert_eq!(infer_kind(&values), ColumnKind::Numeric);
    }

    #[test]
    fn any_non_numeric_text_makes_column_categorical() {
        let values = vec![CellValue::Number(1.0), text("Male")];
        assert_eq!(infer_kind(&values), ColumnKind::Categorical);
    }

    #[test]
    fn all_missing_column_is_numeric() {
        let values = vec![CellValue::Missing, CellValue::Missing];
        assert_eq!(infer_kind(&values), ColumnKind::Numeric);
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        assert_eq!(text("inf").as_number(), None);
        assert_eq!(text("NaN").as_number(), None);
    }

    #[test]
    fn cells_are_normalised() {
        assert_eq!(CellValue::from_cell(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(CellValue::from_cell(&Data::String("  ".into())), CellValue::Missing);
        assert_eq!(CellValue::from_cell(&Data::String(" Eco ".into())), text("Eco"));
        assert_eq!(CellValue::from_cell(&Data::Bool(true)), text("True"));
        assert_eq!(CellValue::from_cell(&Data::Empty), CellValue::Missing);
    }

    #[test]
    fn blank_and_duplicate_headers_are_renamed() {
        let raw = vec![text("Age"), CellValue::Missing, text("Age"), text("Age")];
        assert_eq!(
            header_names(&raw),
            vec!["Age", "Unnamed: 1", "Age.1", "Age.2"]
        );
    }

    #[test]
    fn partition_keeps_table_order() {
        let columns = vec![
            ColumnInfo {
                name: "Gender".into(),
                kind: ColumnKind::Categorical,
            },
            ColumnInfo {
                name: "Age".into(),
                kind: ColumnKind::Numeric,
            },
            ColumnInfo {
                name: "Class".into(),
                kind: ColumnKind::Categorical,
            },
            ColumnInfo {
                name: "Flight Distance".into(),
                kind: ColumnKind::Numeric,
            },
        ];
        let partition = ColumnPartition::from_columns(&columns);
        assert_eq!(partition.numeric, vec!["Age", "Flight Distance"]);
        assert_eq!(partition.categorical, vec!["Gender", "Class"]);
    }

    #[test]
    fn whole_numbers_format_without_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }
}
