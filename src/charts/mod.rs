//! Charts module - chart requests, interactive plots and PNG export

mod plotter;
mod renderer;
mod request;

pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderError};
pub use request::{
    BarEntry, BarPlotSpec, BoxGroup, BoxPlotSpec, ChartError, ChartKind, ChartRequest, ChartSpec,
    ColumnSlot, HistogramSpec,
};
