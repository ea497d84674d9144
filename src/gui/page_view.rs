//! Page View Widget
//! Central panel drawing whichever page the router produced.

use super::{ACCENT_COLOR, ERROR_COLOR};
use crate::charts::{ChartKind, ChartPlotter, ChartSpec, ColumnSlot};
use crate::content;
use crate::data::{ColumnKind, PreviewTable};
use crate::router::{
    AwaitingData, ChartOutcome, ChartSection, ColumnPicker, ExplorationView, HomeView,
    OverviewView, PageView,
};
use crate::session::ImageSlot;
use crate::stats::SummaryTable;
use egui::load::SizedTexture;
use egui::{Color32, ComboBox, Grid, RichText, ScrollArea, TextureHandle};

const SECTION_SPACING: f32 = 15.0;
const CELL_WIDTH: f32 = 90.0;

/// Draws a `PageView`. Holds no state; everything it shows comes from the view.
pub struct PageViewer;

impl PageViewer {
    pub fn show(ui: &mut egui::Ui, view: &PageView, image: Option<&TextureHandle>) -> PageAction {
        let mut action = PageAction::None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match view {
                PageView::Home(home) => Self::draw_home(ui, home, image, &mut action),
                PageView::DataOverview(overview) => Self::draw_overview(ui, overview),
                PageView::Exploration(exploration) => {
                    Self::draw_exploration(ui, exploration, &mut action)
                }
                PageView::Extras => Self::draw_extras(ui),
                PageView::AwaitingData(awaiting) => Self::draw_awaiting(ui, awaiting),
            });

        action
    }

    fn title(ui: &mut egui::Ui, text: &str) {
        ui.add_space(5.0);
        ui.label(RichText::new(text).size(26.0).strong().color(ACCENT_COLOR));
        ui.add_space(10.0);
    }

    fn heading(ui: &mut egui::Ui, text: &str) {
        ui.add_space(SECTION_SPACING);
        ui.label(RichText::new(text).size(18.0).strong());
        ui.add_space(5.0);
    }

    fn draw_home(
        ui: &mut egui::Ui,
        home: &HomeView,
        texture: Option<&TextureHandle>,
        action: &mut PageAction,
    ) {
        Self::title(ui, content::HOME_TITLE);
        ui.label(RichText::new(content::HOME_WELCOME).size(16.0).strong());
        ui.label(content::HOME_DESCRIPTION);

        Self::heading(ui, content::HOME_IMAGE_HEADING);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_text = match &home.image {
                        ImageSlot::Empty => "No image selected",
                        ImageSlot::Loaded(image) => image.name.as_str(),
                        ImageSlot::Failed { file_name, .. } => file_name.as_str(),
                    };
                    ui.label(RichText::new(file_text).size(12.0));
                    if ui.button("📂 Browse").clicked() {
                        *action = PageAction::BrowseImage;
                    }
                    if !matches!(home.image, ImageSlot::Empty) && ui.small_button("✖").clicked() {
                        *action = PageAction::ClearImage;
                    }
                });
                ui.label(RichText::new("png, jpg, jpeg").size(11.0).color(Color32::GRAY));
            });

        match (&home.image, texture) {
            (ImageSlot::Loaded(_), Some(texture)) => {
                ui.add_space(10.0);
                let size = texture.size_vec2();
                let width = ui.available_width();
                let scaled = egui::vec2(width, size.y * width / size.x.max(1.0));
                ui.vertical_centered(|ui| {
                    ui.image(SizedTexture::new(texture.id(), scaled));
                    ui.label(RichText::new(content::IMAGE_CAPTION).size(12.0).color(Color32::GRAY));
                });
            }
            (ImageSlot::Failed { reason, .. }, _) => {
                ui.add_space(5.0);
                ui.label(RichText::new(format!("Error: {}", reason)).color(ERROR_COLOR));
            }
            _ => {}
        }
    }

    fn draw_overview(ui: &mut egui::Ui, overview: &OverviewView) {
        Self::title(ui, content::OVERVIEW_TITLE);

        Self::heading(ui, content::OVERVIEW_ABOUT);
        ui.label(content::OVERVIEW_INTRO);
        for (attribute, description) in content::COLUMN_GUIDE {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(RichText::new(format!("{}:", attribute)).strong());
                ui.label(description);
            });
        }

        Self::heading(ui, content::PREVIEW_HEADING);
        ui.label(
            RichText::new(format!(
                "{}: {} rows × {} columns",
                overview.source_name, overview.row_count, overview.column_count
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );
        Self::draw_preview(ui, &overview.preview);

        Self::heading(ui, content::SUMMARY_HEADING);
        Self::draw_summary(ui, &overview.summary);
    }

    fn draw_preview(ui: &mut egui::Ui, preview: &PreviewTable) {
        ScrollArea::horizontal()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                Grid::new("preview_grid")
                    .striped(true)
                    .min_col_width(CELL_WIDTH)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("");
                        for header in &preview.headers {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for (i, row) in preview.rows.iter().enumerate() {
                            ui.label(RichText::new(i.to_string()).color(Color32::GRAY));
                            for cell in row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &SummaryTable) {
        let caption = match summary.kind() {
            Some(ColumnKind::Numeric) => "Numerical columns",
            Some(ColumnKind::Categorical) => "No numerical columns; categorical columns shown",
            None => {
                ui.label(RichText::new("No columns to summarise").color(Color32::GRAY));
                return;
            }
        };
        ui.label(RichText::new(caption).size(11.0).color(Color32::GRAY));

        ScrollArea::horizontal()
            .id_salt("summary_scroll")
            .show(ui, |ui| {
                Grid::new("summary_grid")
                    .striped(true)
                    .min_col_width(CELL_WIDTH)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("");
                        for name in summary.column_names() {
                            ui.label(RichText::new(name).strong());
                        }
                        ui.end_row();

                        for label in summary.row_labels() {
                            ui.label(RichText::new(*label).strong());
                            for value in summary.row(label) {
                                ui.label(value);
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn draw_exploration(ui: &mut egui::Ui, exploration: &ExplorationView, action: &mut PageAction) {
        Self::title(ui, content::EDA_TITLE);
        ui.label(
            RichText::new(format!(
                "{} numerical, {} categorical columns",
                exploration.partition.numeric.len(),
                exploration.partition.categorical.len()
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        Self::heading(ui, content::EDA_SELECT_HEADING);
        ui.label(content::EDA_SELECT_LABEL);
        ui.horizontal(|ui| {
            for kind in ChartKind::ALL {
                let mut ticked = exploration.sections.iter().any(|s| s.kind == kind);
                if ui.checkbox(&mut ticked, kind.label()).changed() {
                    *action = PageAction::ToggleChart(kind, ticked);
                }
            }
        });

        for section in &exploration.sections {
            ui.add_space(SECTION_SPACING);
            ui.separator();
            Self::draw_section(ui, section, action);
        }
    }

    fn draw_section(ui: &mut egui::Ui, section: &ChartSection, action: &mut PageAction) {
        ui.label(RichText::new(section.kind.label()).size(18.0).strong());
        ui.add_space(5.0);

        for picker in &section.pickers {
            Self::draw_picker(ui, picker, action);
        }
        ui.add_space(8.0);

        match &section.outcome {
            ChartOutcome::Ready(spec) => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(spec.title()).size(14.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("💾 Save PNG").clicked() {
                            *action = PageAction::SaveChart(spec.clone());
                        }
                    });
                });
                ChartPlotter::draw(ui, &format!("chart_{:?}", section.kind), spec);
            }
            ChartOutcome::AwaitingColumns => {
                ui.label(
                    RichText::new("No suitable columns in this dataset").color(Color32::GRAY),
                );
            }
            ChartOutcome::Failed(reason) => {
                ui.label(RichText::new(format!("Error: {}", reason)).color(ERROR_COLOR));
            }
        }
    }

    fn draw_picker(ui: &mut egui::Ui, picker: &ColumnPicker, action: &mut PageAction) {
        ui.horizontal(|ui| {
            ui.label(picker.label);
            let selected = picker.selected.as_deref().unwrap_or("");
            ComboBox::from_id_salt(format!("picker_{:?}", picker.slot))
                .width(220.0)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for option in &picker.options {
                        if ui.selectable_label(selected == option.as_str(), option).clicked() {
                            *action = PageAction::SelectColumn(picker.slot, option.clone());
                        }
                    }
                });
        });
    }

    fn draw_extras(ui: &mut egui::Ui) {
        Self::title(ui, content::EXTRAS_TITLE);
        ui.label(RichText::new(content::EXTRAS_HEADLINE).size(16.0).strong());
        for paragraph in content::EXTRAS_BODY {
            ui.add_space(8.0);
            ui.label(paragraph);
        }
    }

    fn draw_awaiting(ui: &mut egui::Ui, awaiting: &AwaitingData) {
        Self::title(ui, awaiting.page.label());
        ui.label(RichText::new(content::AWAITING_DATA).size(14.0).color(Color32::GRAY));
        if let Some(reason) = &awaiting.failure {
            ui.add_space(5.0);
            ui.label(RichText::new(content::SIDEBAR_UPLOAD_ERROR).color(ERROR_COLOR));
            ui.label(RichText::new(reason).size(11.0).color(Color32::GRAY));
        }
    }
}

/// Actions triggered from the page body
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    BrowseImage,
    ClearImage,
    ToggleChart(ChartKind, bool),
    SelectColumn(ColumnSlot, String),
    SaveChart(ChartSpec),
}
