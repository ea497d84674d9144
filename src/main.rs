//! Airline Satisfaction Dashboard
//!
//! A desktop dashboard for exploring the airline passenger satisfaction
//! survey: upload a spreadsheet, browse its summary and chart its columns.

mod charts;
mod config;
mod content;
mod data;
mod gui;
mod router;
mod session;
mod stats;

#[cfg(test)]
mod test_support;

use anyhow::anyhow;
use config::{DashboardConfig, CONFIG_FILE_NAME};
use eframe::egui;
use gui::DashboardApp;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Airline dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = DashboardConfig::load(Path::new(CONFIG_FILE_NAME)).unwrap_or_else(|e| {
        warn!(file = CONFIG_FILE_NAME, error = %e, "using default configuration");
        DashboardConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([config.min_window_width, config.min_window_height])
            .with_title(content::APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        content::APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("failed to start the dashboard window: {e}"))
}
