//! Sidebar Widget
//! Left side panel with page navigation and the spreadsheet upload.

use super::{ACCENT_COLOR, ERROR_COLOR, SUCCESS_COLOR};
use crate::content;
use crate::router::Page;
use crate::session::DataState;
use egui::{Color32, ComboBox, RichText};

/// Left side panel: page selector, spreadsheet upload and status line.
pub struct Sidebar {
    pub page: Page,
    pub status: String,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            page: Page::default(),
            status: "Ready".to_string(),
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui, data: &DataState) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("✈ {}", content::APP_TITLE))
                    .size(20.0)
                    .color(ACCENT_COLOR),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new(content::SIDEBAR_PAGE_LABEL).size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("page_select")
            .width(ui.available_width())
            .selected_text(self.page.label())
            .show_ui(ui, |ui| {
                for page in Page::ALL {
                    if ui.selectable_label(self.page == page, page.label()).clicked()
                        && self.page != page
                    {
                        self.page = page;
                        action = SidebarAction::PageChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Spreadsheet Upload =====
        ui.label(RichText::new(content::SIDEBAR_UPLOAD_LABEL).size(14.0).strong());
        ui.label(RichText::new("xlsx, xls").size(11.0).color(Color32::GRAY));
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_text = data.file_name().unwrap_or("No file selected");
                    let file_color = if data.table().is_some() {
                        ui.visuals().strong_text_color()
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(file_text).size(12.0).color(file_color));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if data.file_name().is_some() && ui.small_button("✖").clicked() {
                            action = SidebarAction::ClearSpreadsheet;
                        }
                        if ui.button("📂 Browse").clicked() {
                            action = SidebarAction::BrowseSpreadsheet;
                        }
                    });
                });
            });

        ui.add_space(5.0);
        match data {
            DataState::Loaded(table) => {
                ui.label(
                    RichText::new(format!(
                        "{} rows, {} columns",
                        table.row_count(),
                        table.column_count()
                    ))
                    .size(11.0)
                    .color(SUCCESS_COLOR),
                );
            }
            DataState::LoadFailed { reason, .. } => {
                ui.label(RichText::new(content::SIDEBAR_UPLOAD_ERROR).color(ERROR_COLOR));
                ui.label(RichText::new(reason).size(11.0).color(Color32::GRAY));
            }
            DataState::NoDataLoaded => {}
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            ERROR_COLOR
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    PageChanged,
    BrowseSpreadsheet,
    ClearSpreadsheet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(sidebar: &mut Sidebar, data: &DataState) -> SidebarAction {
        let ctx = egui::Context::default();
        let mut action = SidebarAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = sidebar.show(ui, data);
            });
        });
        action
    }

    #[test]
    fn untouched_sidebar_keeps_page_and_reports_nothing() {
        let mut sidebar = Sidebar::new();
        let data = DataState::LoadFailed {
            file_name: "broken.xlsx".into(),
            reason: "not a workbook".into(),
        };
        assert_eq!(run_frame(&mut sidebar, &data), SidebarAction::None);
        assert_eq!(sidebar.page, Page::Home);
    }
}
