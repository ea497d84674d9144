//! Dashboard Main Application
//! Main window with the sidebar and the routed page.

use crate::charts::{ChartRenderer, ChartSpec};
use crate::config::DashboardConfig;
use crate::gui::{PageAction, PageViewer, Sidebar, SidebarAction};
use crate::router::{route, ChartSelections, PageView};
use crate::session::{ImageSlot, Session, SessionEvent, Upload};
use egui::{ColorImage, SidePanel, TextureHandle, TextureOptions};
use tracing::{info, warn};

/// Main application window.
///
/// The routed view is rebuilt only after an action changed the session, the
/// page or the chart selections.
pub struct DashboardApp {
    config: DashboardConfig,
    session: Session,
    selections: ChartSelections,
    sidebar: Sidebar,
    view: PageView,
    dirty: bool,
    image_texture: Option<TextureHandle>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let session = Session::default();
        let selections = ChartSelections::default();
        let sidebar = Sidebar::new();
        let view = route(sidebar.page, &session, &selections, &config);
        Self {
            config,
            session,
            selections,
            sidebar,
            view,
            dirty: false,
            image_texture: None,
        }
    }

    fn apply(&mut self, event: SessionEvent) {
        self.session = std::mem::take(&mut self.session).apply(event);
        self.dirty = true;
    }

    fn pick_upload(filter_name: &str, extensions: &[&str]) -> Option<Result<Upload, String>> {
        let path = rfd::FileDialog::new()
            .add_filter(filter_name, extensions)
            .pick_file()?;
        Some(
            Upload::from_path(&path)
                .map_err(|e| format!("Error reading {}: {}", path.display(), e)),
        )
    }

    /// Handle spreadsheet selection
    fn handle_browse_spreadsheet(&mut self) {
        match Self::pick_upload("Excel Files", &["xlsx", "xls"]) {
            Some(Ok(upload)) => {
                let name = upload.name.clone();
                self.apply(SessionEvent::SpreadsheetUploaded(upload));
                match self.session.table() {
                    Some(table) => self.sidebar.set_status(format!(
                        "Loaded {}: {} rows, {} columns",
                        name,
                        table.row_count(),
                        table.column_count()
                    )),
                    None => self.sidebar.set_status(format!("Error loading {}", name)),
                }
            }
            Some(Err(e)) => {
                warn!(error = %e, "spreadsheet upload unreadable");
                self.sidebar.set_status(e);
            }
            None => {}
        }
    }

    /// Handle image selection
    fn handle_browse_image(&mut self, ctx: &egui::Context) {
        match Self::pick_upload("Images", &["png", "jpg", "jpeg"]) {
            Some(Ok(upload)) => {
                self.apply(SessionEvent::ImageUploaded(upload));
                self.refresh_image_texture(ctx);
            }
            Some(Err(e)) => {
                warn!(error = %e, "image upload unreadable");
                self.sidebar.set_status(e);
            }
            None => {}
        }
    }

    /// Upload the session image to the GPU, or drop the old texture.
    fn refresh_image_texture(&mut self, ctx: &egui::Context) {
        self.image_texture = match &self.session.image {
            ImageSlot::Loaded(image) => {
                let pixels = ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                Some(ctx.load_texture(image.name.clone(), pixels, TextureOptions::LINEAR))
            }
            ImageSlot::Empty | ImageSlot::Failed { .. } => None,
        };
    }

    /// Render the chart off-screen and write it where the user chooses
    fn handle_save_chart(&mut self, spec: &ChartSpec) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", spec.file_stem()))
            .save_file()
        else {
            return;
        };

        let (width, height) = (self.config.export_width, self.config.export_height);
        let result = ChartRenderer::render_png(spec, width, height)
            .map_err(|e| e.to_string())
            .and_then(|png| std::fs::write(&path, png).map_err(|e| e.to_string()));

        match result {
            Ok(()) => {
                info!(path = %path.display(), chart = %spec.title(), "chart exported");
                self.sidebar.set_status(format!("Saved {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "chart export failed");
                self.sidebar.set_status(format!("Error saving chart: {}", e));
            }
        }
    }

    fn handle_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::PageChanged => self.dirty = true,
            SidebarAction::BrowseSpreadsheet => self.handle_browse_spreadsheet(),
            SidebarAction::ClearSpreadsheet => {
                self.apply(SessionEvent::SpreadsheetCleared);
                self.sidebar.set_status("Ready");
            }
            SidebarAction::None => {}
        }
    }

    fn handle_page_action(&mut self, ctx: &egui::Context, action: PageAction) {
        match action {
            PageAction::BrowseImage => self.handle_browse_image(ctx),
            PageAction::ClearImage => {
                self.apply(SessionEvent::ImageCleared);
                self.refresh_image_texture(ctx);
            }
            PageAction::ToggleChart(kind, selected) => {
                self.selections.set_selected(kind, selected);
                self.dirty = true;
            }
            PageAction::SelectColumn(slot, column) => {
                self.selections.select_column(slot, column);
                self.dirty = true;
            }
            PageAction::SaveChart(spec) => self.handle_save_chart(&spec),
            PageAction::None => {}
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Sidebar
        SidePanel::left("sidebar")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.sidebar.show(ui, &self.session.data);
                    self.handle_sidebar_action(action);
                });
            });

        // Central panel - routed page
        let page_action = egui::CentralPanel::default()
            .show(ctx, |ui| PageViewer::show(ui, &self.view, self.image_texture.as_ref()))
            .inner;
        self.handle_page_action(ctx, page_action);

        if self.dirty || self.view.page() != self.sidebar.page {
            self.view = route(self.sidebar.page, &self.session, &self.selections, &self.config);
            self.dirty = false;
            ctx.request_repaint();
        }
    }
}
