use anyhow::Context;
use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CatalogInsightsApp {
    pub state: AppState,
}

impl CatalogInsightsApp {
    /// Load the configured dataset (once per process) and build the state.
    ///
    /// A failed load is kept as a fatal error; the dashboard then shows only
    /// the error message.
    pub fn new(config: DashboardConfig) -> Self {
        let source = config.source.clone();
        let mut state = AppState::new(config);

        match loader::load_cached(&source).with_context(|| format!("loading dataset from {source}")) {
            Ok(catalog) => state.set_catalog(catalog),
            Err(e) => {
                log::error!("{e:#}");
                state.load_error = Some(format!("Error {e:#}"));
            }
        }

        Self { state }
    }
}

impl eframe::App for CatalogInsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        if let Some(err) = &self.state.load_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::load_error(ui, err);
            });
            return;
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui);
                    panels::metric_cards(ui, &self.state.snapshot);
                    ui.separator();
                    plot::dashboard_charts(ui, &self.state);
                    ui.separator();
                    ui.checkbox(&mut self.state.show_raw, "Show Raw Data");
                    if self.state.show_raw {
                        table::raw_data(ui, &self.state);
                    }
                });
        });
    }
}
