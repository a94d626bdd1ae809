use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;
const COL_WIDTH: f32 = 140.0;

/// Leading rows of the filtered view, verbatim from the source file.
pub fn raw_data(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        return;
    };
    let rows = &state.snapshot.preview_rows;

    ui.label(format!(
        "Showing {} of {} titles in view",
        rows.len(),
        state.snapshot.total_titles
    ));

    egui::ScrollArea::horizontal()
        .id_salt("raw_data_hscroll")
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .id_salt("raw_data")
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::initial(COL_WIDTH).clip(true), catalog.headers.len())
                .min_scrolled_height(0.0)
                .max_scroll_height(400.0)
                .header(22.0, |mut header| {
                    for name in &catalog.headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let title = &catalog.titles[rows[row.index()]];
                        for cell in &title.cells {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
