use eframe::egui::{Align2, Color32, Stroke, Ui};
use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::charts::category_label;
use crate::color::diverging_color;
use crate::data::model::Measure;
use crate::state::AppState;

/// Annotation colour that stays readable on both pale and saturated cells.
fn annotation_color(r: f64) -> Color32 {
    if r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::DARK_GRAY
    }
}

/// Correlation matrix as filled cells on a diverging ramp, each annotated
/// with its coefficient. First measure on the top row, matching the printed
/// column order left to right.
pub fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    let matrix = &state.analysis.correlation;
    let n = Measure::ALL.len();

    let x_names: Vec<&str> = Measure::ALL.iter().map(|m| m.column_name()).collect();
    let y_names: Vec<&str> = Measure::ALL
        .iter()
        .rev()
        .map(|m| m.column_name())
        .collect();

    Plot::new("correlation_heatmap")
        .data_aspect(1.0)
        .x_axis_formatter(move |mark, _range| category_label(&x_names, mark.value))
        .y_axis_formatter(move |mark, _range| category_label(&y_names, mark.value))
        .show_grid(false)
        .show(ui, |plot_ui| {
            for (i, row) in matrix.iter().enumerate() {
                for (j, &r) in row.iter().enumerate() {
                    let x = j as f64;
                    let y = (n - 1 - i) as f64;

                    let cell: PlotPoints = vec![
                        [x - 0.5, y - 0.5],
                        [x + 0.5, y - 0.5],
                        [x + 0.5, y + 0.5],
                        [x - 0.5, y + 0.5],
                    ]
                    .into();
                    plot_ui.polygon(
                        Polygon::new(cell)
                            .fill_color(diverging_color(r))
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), format!("{r:.2}"))
                            .color(annotation_color(r))
                            .anchor(Align2::CENTER_CENTER),
                    );
                }
            }
        });
}
