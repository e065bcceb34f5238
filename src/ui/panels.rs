use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::normalize::MatchMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Add files…").clicked() {
                add_files_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.archive.is_some(), egui::Button::new("Save archive…"))
                .clicked()
            {
                save_archive_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Clear").clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .add_enabled(!state.queue.is_empty(), egui::Button::new("Process"))
            .clicked()
        {
            state.process();
        }

        let normalized = state.match_mode == MatchMode::Normalized;
        if ui
            .selectable_label(normalized, "Normalize keys")
            .on_hover_text("Strip separators before comparing (555-1234 = 5551234)")
            .clicked()
        {
            state.match_mode = if normalized {
                MatchMode::Raw
            } else {
                MatchMode::Normalized
            };
        }

        ui.separator();

        ui.label(format!(
            "{} queued, {} processed",
            state.queue.len(),
            state.processed.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – queue and run results
// ---------------------------------------------------------------------------

/// Render the priority queue and, after a run, the per-file outcomes.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Priority queue");
    ui.label("First file wins; later files lose matching rows.");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if state.queue.is_empty() {
                ui.label("No files queued.  (File → Add files…)");
            }
            for (i, path) in state.queue.iter().enumerate() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(format!("{}.  {name}", i + 1));
            }

            if state.processed.is_empty() && state.skipped.is_empty() {
                return;
            }

            ui.separator();
            ui.heading("Last run");

            let mut clicked = None;
            for (i, p) in state.processed.iter().enumerate() {
                let label = format!(
                    "{}  ({} rows kept)",
                    p.output_name(),
                    p.dataset.len()
                );
                if ui
                    .selectable_label(state.selected == Some(i), label)
                    .clicked()
                {
                    clicked = Some(i);
                }
            }
            if let Some(i) = clicked {
                state.selected = Some(i);
            }

            for (name, reason) in &state.skipped {
                ui.label(
                    RichText::new(format!("{name}  (skipped: {reason})"))
                        .color(Color32::GRAY),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn add_files_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Add files (first = highest priority)")
        .add_filter("Tabular files", &["csv", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"])
        .pick_files();

    if let Some(paths) = files {
        state.add_files(paths);
    }
}

pub fn save_archive_dialog(state: &mut AppState) {
    let target = rfd::FileDialog::new()
        .set_title("Save processed archive")
        .set_file_name("processed_files.zip")
        .add_filter("Zip archive", &["zip"])
        .save_file();

    if let Some(path) = target {
        state.save_archive(&path);
    }
}
