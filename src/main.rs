mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::CatalogInsightsApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Insights – Global Content Dashboard",
        options,
        Box::new(|cc| {
            // Charts use dark series colours; keep a light background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(CatalogInsightsApp::new(config)))
        }),
    )
}
