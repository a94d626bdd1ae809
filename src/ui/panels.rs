use std::sync::Arc;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::summary::Snapshot;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let Some(catalog) = state.catalog.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- Content type ----
    ui.strong("Select Content Type:");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    for kind in &catalog.kinds {
        let mut checked = state.criteria.selected_kinds.contains(kind);
        let text = RichText::new(kind).color(state.colors.color_for(kind));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_kind(kind);
        }
    }
    if state.criteria.selected_kinds.is_empty() {
        ui.label(RichText::new("No type selected – nothing to show.").italics());
    }

    ui.separator();

    // ---- Release year ----
    ui.strong("Select Release Year Range:");
    let Some((min, max)) = catalog.release_years else {
        ui.label("Dataset has no rows.");
        return;
    };

    let mut lo = state.criteria.years.lo();
    let mut hi = state.criteria.years.hi();
    let lo_changed = ui.add(egui::Slider::new(&mut lo, min..=max).text("From")).changed();
    let hi_changed = ui.add(egui::Slider::new(&mut hi, min..=max).text("To")).changed();

    // Dragging one handle past the other pushes the other along.
    if lo_changed {
        state.set_years(lo, hi.max(lo));
    } else if hi_changed {
        state.set_years(lo.min(hi), hi);
    }
}

// ---------------------------------------------------------------------------
// Central panel pieces
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new("🎬 Global Content Insights").size(26.0).strong());
    ui.label("Analyzing trends in Movies and TV Shows over the years.");
    ui.add_space(8.0);
}

/// Three KPI cards: total titles, countries, latest release year.
pub fn metric_cards(ui: &mut Ui, snapshot: &Snapshot) {
    let latest = snapshot
        .latest_release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "–".to_string());
    let cards = [
        ("Total Titles", snapshot.total_titles.to_string()),
        ("Countries Represented", snapshot.countries.to_string()),
        ("Latest Release Year", latest),
    ];

    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col, (label, value)) in cols.iter_mut().zip(cards.iter()) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(*label).color(Color32::DARK_GRAY));
                ui.label(RichText::new(value).size(30.0).strong());
            });
        }
    });
}

/// Shown instead of the dashboard when the dataset could not be loaded.
pub fn load_error(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("{message}\n\nUse File → Open local CSV… to load a copy of the dataset."))
                .color(Color32::RED)
                .size(16.0),
        );
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open local CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} titles loaded, {} in view",
                catalog.len(),
                state.snapshot.total_titles
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the session catalog with a local CSV. A failed load keeps the
/// current catalog and reports in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open catalog CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        let loaded = loader::load_file(&path).with_context(|| format!("loading {}", path.display()));
        match loaded {
            Ok(catalog) => {
                log::info!("Loaded {} titles from {}", catalog.len(), path.display());
                state.set_catalog(Arc::new(catalog));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
