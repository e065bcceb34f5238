use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// Large outputs are capped in the preview; the archive always holds
// every surviving row.
const PREVIEW_ROW_LIMIT: usize = 500;

// ---------------------------------------------------------------------------
// Processed-dataset preview (central panel)
// ---------------------------------------------------------------------------

/// Render the selected processed dataset as a table.
pub fn preview(ui: &mut Ui, state: &AppState) {
    let Some(processed) = state.selected.and_then(|i| state.processed.get(i)) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Add files and press Process to preview results");
        });
        return;
    };

    let dataset = &processed.dataset;
    let shown = dataset.len().min(PREVIEW_ROW_LIMIT);

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(processed.output_name());
        if shown < dataset.len() {
            ui.label(format!("(showing {shown} of {} rows)", dataset.len()));
        }
    });
    ui.separator();

    if dataset.columns.is_empty() {
        ui.label("No columns.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true).at_least(60.0), dataset.columns.len())
        .header(20.0, |mut header| {
            for col in &dataset.columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, shown, |mut row| {
                let cells = &dataset.rows[row.index()];
                for i in 0..dataset.columns.len() {
                    row.col(|ui| {
                        if let Some(cell) = cells.get(i) {
                            ui.label(cell.to_string());
                        }
                    });
                }
            });
        });
}
