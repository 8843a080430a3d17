use eframe::egui;

use crate::charts::panels;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisScopeApp {
    pub state: AppState,
}

impl IrisScopeApp {
    pub fn new(state: AppState) -> Self {
        IrisScopeApp { state }
    }
}

impl eframe::App for IrisScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: chart selector ----
        egui::SidePanel::left("chart_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected chart ----
        let selected = self.state.selected;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(selected.title());
            selected.show(ui, &self.state);
        });
    }
}
