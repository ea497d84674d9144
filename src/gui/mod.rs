//! GUI module - sidebar navigation and page rendering

mod app;
mod page_view;
mod sidebar;

pub use app::DashboardApp;
pub use page_view::{PageAction, PageViewer};
pub use sidebar::{Sidebar, SidebarAction};

use egui::Color32;

const ACCENT_COLOR: Color32 = Color32::from_rgb(100, 149, 237);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
