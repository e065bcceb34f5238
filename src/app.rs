use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustySieveApp {
    pub state: AppState,
}

impl eframe::App for RustySieveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: priority queue ----
        egui::SidePanel::left("queue_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: result preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::preview(ui, &self.state);
        });
    }
}
