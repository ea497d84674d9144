//! Chart Requests
//! Chart kinds, the column slots each kind needs, and the plot-ready data
//! computed from a table.

use crate::data::{ColumnKind, Table};
use crate::stats::{BoxStats, HistogramBin, StatsCalculator};
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Column '{0}' is not in the current table")]
    MissingColumn(String),
    #[error("Failed to compute chart data: {0}")]
    Frame(#[from] PolarsError),
}

/// User-selectable visualization type. Ordering is the on-page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKind {
    Histogram,
    BoxPlot,
    BarPlot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Histogram, ChartKind::BoxPlot, ChartKind::BarPlot];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::BoxPlot => "Box Plot",
            ChartKind::BarPlot => "Bar Plot",
        }
    }

    /// Column pickers of this kind, in display order.
    pub fn slots(self) -> &'static [ColumnSlot] {
        match self {
            ChartKind::Histogram => &[ColumnSlot::HistogramColumn],
            ChartKind::BoxPlot => &[ColumnSlot::BoxValue, ColumnSlot::BoxGroup],
            ChartKind::BarPlot => &[ColumnSlot::BarCategory, ColumnSlot::BarValue],
        }
    }
}

/// One column picker of a chart section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnSlot {
    HistogramColumn,
    BoxValue,
    BoxGroup,
    BarCategory,
    BarValue,
}

impl ColumnSlot {
    pub fn label(self) -> &'static str {
        match self {
            ColumnSlot::HistogramColumn => "Select a numerical column:",
            ColumnSlot::BoxValue => "Select a column for Box Plot (y-axis):",
            ColumnSlot::BoxGroup => "Select a column for Box Plot (x-axis):",
            ColumnSlot::BarCategory => "Select x-axis (categorical):",
            ColumnSlot::BarValue => "Select y-axis (numerical):",
        }
    }

    /// Kind of column this picker offers.
    pub fn accepts(self) -> ColumnKind {
        match self {
            ColumnSlot::HistogramColumn | ColumnSlot::BoxValue | ColumnSlot::BarValue => {
                ColumnKind::Numeric
            }
            ColumnSlot::BoxGroup | ColumnSlot::BarCategory => ColumnKind::Categorical,
        }
    }
}

/// A chart kind with every column it needs chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    Histogram { column: String },
    BoxPlot { value: String, group: String },
    BarPlot { category: String, value: String },
}

impl ChartRequest {
    /// Assemble a request from resolved picker values; `None` while any
    /// required column is unchosen.
    pub fn from_selection<F>(kind: ChartKind, mut column_for: F) -> Option<Self>
    where
        F: FnMut(ColumnSlot) -> Option<String>,
    {
        match kind {
            ChartKind::Histogram => Some(ChartRequest::Histogram {
                column: column_for(ColumnSlot::HistogramColumn)?,
            }),
            ChartKind::BoxPlot => Some(ChartRequest::BoxPlot {
                value: column_for(ColumnSlot::BoxValue)?,
                group: column_for(ColumnSlot::BoxGroup)?,
            }),
            ChartKind::BarPlot => Some(ChartRequest::BarPlot {
                category: column_for(ColumnSlot::BarCategory)?,
                value: column_for(ColumnSlot::BarValue)?,
            }),
        }
    }

    /// Compute the plot data for this request.
    pub fn build(&self, table: &Table, histogram_bins: usize) -> Result<ChartSpec, ChartError> {
        match self {
            ChartRequest::Histogram { column } => {
                Self::require(table, column)?;
                let values = table.numeric_values(column)?;
                Ok(ChartSpec::Histogram(HistogramSpec {
                    column: column.clone(),
                    bins: StatsCalculator::histogram(&values, histogram_bins),
                }))
            }
            ChartRequest::BoxPlot { value, group } => {
                Self::require(table, value)?;
                Self::require(table, group)?;
                let mut groups = Vec::new();
                for label in table.distinct_labels(group)? {
                    let values = table.numeric_values_where(value, group, &label)?;
                    groups.push(BoxGroup {
                        stats: StatsCalculator::compute_box_stats(&values),
                        label,
                    });
                }
                Ok(ChartSpec::BoxPlot(BoxPlotSpec {
                    value_column: value.clone(),
                    group_column: group.clone(),
                    groups,
                }))
            }
            ChartRequest::BarPlot { category, value } => {
                Self::require(table, category)?;
                Self::require(table, value)?;
                let bars = table
                    .sums_by_category(category, value)?
                    .into_iter()
                    .map(|(label, total)| BarEntry { label, total })
                    .collect();
                Ok(ChartSpec::BarPlot(BarPlotSpec {
                    category_column: category.clone(),
                    value_column: value.clone(),
                    bars,
                }))
            }
        }
    }

    fn require(table: &Table, column: &str) -> Result<(), ChartError> {
        table
            .column_kind(column)
            .map(|_| ())
            .ok_or_else(|| ChartError::MissingColumn(column.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// One box of a box plot. `stats` is `None` when the group has no numeric
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub stats: Option<BoxStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSpec {
    pub value_column: String,
    pub group_column: String,
    pub groups: Vec<BoxGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPlotSpec {
    pub category_column: String,
    pub value_column: String,
    pub bars: Vec<BarEntry>,
}

/// Plot-ready data for one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Histogram(HistogramSpec),
    BoxPlot(BoxPlotSpec),
    BarPlot(BarPlotSpec),
}

impl ChartSpec {
    pub fn title(&self) -> String {
        match self {
            ChartSpec::Histogram(h) => format!("Histogram of {}", h.column),
            ChartSpec::BoxPlot(b) => format!("Box Plot: {} vs {}", b.value_column, b.group_column),
            ChartSpec::BarPlot(b) => {
                format!("Bar Plot: {} by {}", b.value_column, b.category_column)
            }
        }
    }

    /// File name suggested when saving the chart.
    pub fn file_stem(&self) -> String {
        self.title()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }
}
