//! Page Router
//! Maps the selected page and the session to the view model drawn by the GUI.
//!
//! Data pages never touch the table when none is loaded; they resolve to
//! `PageView::AwaitingData` instead.

use crate::charts::{ChartKind, ChartRequest, ChartSpec, ColumnSlot};
use crate::config::DashboardConfig;
use crate::data::{ColumnPartition, PreviewTable, Table};
use crate::session::{ImageSlot, Session};
use crate::stats::SummaryTable;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Sidebar page choices, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    DataOverview,
    ExploratoryDataAnalysis,
    Extras,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::DataOverview,
        Page::ExploratoryDataAnalysis,
        Page::Extras,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DataOverview => "Data Overview",
            Page::ExploratoryDataAnalysis => "Exploratory Data Analysis",
            Page::Extras => "Extras",
        }
    }
}

/// Widget state of the exploration page: ticked chart kinds and the column
/// last picked in each slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSelections {
    kinds: BTreeSet<ChartKind>,
    columns: BTreeMap<ColumnSlot, String>,
}

impl ChartSelections {
    pub fn set_selected(&mut self, kind: ChartKind, selected: bool) {
        if selected {
            self.kinds.insert(kind);
        } else {
            self.kinds.remove(&kind);
        }
    }

    /// Ticked kinds, always in on-page order.
    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn select_column(&mut self, slot: ColumnSlot, column: impl Into<String>) {
        self.columns.insert(slot, column.into());
    }

    pub fn column(&self, slot: ColumnSlot) -> Option<&str> {
        self.columns.get(&slot).map(String::as_str)
    }
}

/// One dropdown of a chart section.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPicker {
    pub slot: ColumnSlot,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl ColumnPicker {
    /// The user's choice wins while it is still offered; otherwise the
    /// dropdown falls back to its first entry.
    fn resolve(
        slot: ColumnSlot,
        partition: &ColumnPartition,
        selections: &ChartSelections,
    ) -> Self {
        let options = partition.columns_of(slot.accepts()).to_vec();
        let selected = selections
            .column(slot)
            .filter(|choice| options.iter().any(|o| o == choice))
            .map(str::to_string)
            .or_else(|| options.first().cloned());
        Self {
            slot,
            label: slot.label(),
            options,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Ready(ChartSpec),
    /// Some picker has nothing to offer.
    AwaitingColumns,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub kind: ChartKind,
    pub pickers: Vec<ColumnPicker>,
    pub outcome: ChartOutcome,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub image: ImageSlot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub source_name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub preview: PreviewTable,
    pub summary: SummaryTable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationView {
    pub partition: ColumnPartition,
    pub sections: Vec<ChartSection>,
}

/// A data page requested while no table is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AwaitingData {
    pub page: Page,
    pub failure: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PageView {
    Home(HomeView),
    DataOverview(OverviewView),
    Exploration(ExplorationView),
    Extras,
    AwaitingData(AwaitingData),
}

impl PageView {
    pub fn has_content(&self) -> bool {
        !matches!(self, PageView::AwaitingData(_))
    }

    pub fn page(&self) -> Page {
        match self {
            PageView::Home(_) => Page::Home,
            PageView::DataOverview(_) => Page::DataOverview,
            PageView::Exploration(_) => Page::ExploratoryDataAnalysis,
            PageView::Extras => Page::Extras,
            PageView::AwaitingData(awaiting) => awaiting.page,
        }
    }
}

/// Build the view for `page`.
pub fn route(
    page: Page,
    session: &Session,
    selections: &ChartSelections,
    config: &DashboardConfig,
) -> PageView {
    debug!(page = page.label(), "routing page");
    match page {
        Page::Home => PageView::Home(HomeView {
            image: session.image.clone(),
        }),
        Page::Extras => PageView::Extras,
        Page::DataOverview | Page::ExploratoryDataAnalysis => {
            let Some(table) = session.table() else {
                return PageView::AwaitingData(AwaitingData {
                    page,
                    failure: session.data.failure().map(str::to_string),
                });
            };
            if page == Page::DataOverview {
                PageView::DataOverview(overview(table, config))
            } else {
                PageView::Exploration(exploration(table, selections, config))
            }
        }
    }
}

fn overview(table: &Table, config: &DashboardConfig) -> OverviewView {
    OverviewView {
        source_name: table.source_name().to_string(),
        row_count: table.row_count(),
        column_count: table.column_count(),
        preview: table.preview(config.preview_rows),
        summary: SummaryTable::describe(table),
    }
}

fn exploration(
    table: &Table,
    selections: &ChartSelections,
    config: &DashboardConfig,
) -> ExplorationView {
    let partition = table.partition();
    let sections = selections
        .kinds()
        .map(|kind| chart_section(kind, table, &partition, selections, config))
        .collect();
    ExplorationView {
        partition,
        sections,
    }
}

fn chart_section(
    kind: ChartKind,
    table: &Table,
    partition: &ColumnPartition,
    selections: &ChartSelections,
    config: &DashboardConfig,
) -> ChartSection {
    let pickers: Vec<ColumnPicker> = kind
        .slots()
        .iter()
        .map(|&slot| ColumnPicker::resolve(slot, partition, selections))
        .collect();

    let request = ChartRequest::from_selection(kind, |slot| {
        pickers
            .iter()
            .find(|p| p.slot == slot)
            .and_then(|p| p.selected.clone())
    });

    let outcome = match request {
        None => ChartOutcome::AwaitingColumns,
        Some(request) => match request.build(table, config.histogram_bins) {
            Ok(spec) => ChartOutcome::Ready(spec),
            Err(e) => {
                warn!(chart = kind.label(), error = %e, "chart could not be built");
                ChartOutcome::Failed(e.to_string())
            }
        },
    };

    ChartSection {
        kind,
        pickers,
        outcome,
    }
}
