use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::data::model::Measure;
use crate::state::AppState;

const LINE_COLOR: Color32 = Color32::LIGHT_BLUE;

/// Sepal length sorted ascending, plotted against observation rank. The
/// sorted view is transient; the table itself stays in row order.
pub fn trend_line(ui: &mut Ui, state: &AppState) {
    let sorted = state.table.sorted_column(Measure::SepalLength);

    let line_points: PlotPoints = sorted
        .iter()
        .enumerate()
        .map(|(rank, &value)| [rank as f64, value])
        .collect();
    let marker_points: PlotPoints = sorted
        .iter()
        .enumerate()
        .map(|(rank, &value)| [rank as f64, value])
        .collect();

    Plot::new("trend_line")
        .x_axis_label("Observation Rank")
        .y_axis_label(Measure::SepalLength.axis_label())
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(line_points).color(LINE_COLOR).width(1.5));
            plot_ui.points(Points::new(marker_points).color(LINE_COLOR).radius(2.0));
        });
}
