//! Stats module - descriptive statistics and chart summaries

mod calculator;
mod summary;

pub use calculator::{BoxStats, DescriptiveStats, HistogramBin, StatsCalculator};
pub use summary::SummaryTable;
