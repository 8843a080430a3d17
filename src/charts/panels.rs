use eframe::egui::{RichText, ScrollArea, Ui};

use crate::charts::ChartKind;
use crate::data::model::IrisTable;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart selector and legend
// ---------------------------------------------------------------------------

/// Render the left panel: the fixed chart sequence, the species legend, and
/// dataset counts.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Charts");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, &kind) in ChartKind::SEQUENCE.iter().enumerate() {
                let label = format!("{}. {}", idx + 1, kind.title());
                if ui
                    .selectable_label(state.selected == kind, label)
                    .clicked()
                {
                    state.selected = kind;
                }
            }

            ui.separator();
            ui.strong("Species");
            for (label, color) in state.colors.legend_entries() {
                ui.label(RichText::new(label).color(color));
            }

            ui.separator();
            ui.strong("Dataset");
            ui.label(format!("{} observations", state.table.len()));
            for (species, count) in &state.analysis.species_counts {
                ui.label(format!("{species}: {count}"));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Iris Scope");
        ui.separator();
        ui.label(format!(
            "{} rows x {} columns",
            state.table.len(),
            IrisTable::COLUMN_COUNT
        ));
        ui.separator();
        ui.label(format!(
            "Chart {}/{}",
            state.selected_position(),
            ChartKind::SEQUENCE.len()
        ));
    });
}
