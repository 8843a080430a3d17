use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::data::model::{Measure, Species};
use crate::state::AppState;

/// Sepal length against petal length, one colour per species.
pub fn scatter(ui: &mut Ui, state: &AppState) {
    Plot::new("scatter")
        .legend(Legend::default())
        .x_axis_label(Measure::SepalLength.axis_label())
        .y_axis_label(Measure::PetalLength.axis_label())
        .show(ui, |plot_ui| {
            for &species in &Species::ALL {
                let points: PlotPoints = state
                    .table
                    .species_rows(species)
                    .map(|obs| [obs.sepal_length, obs.petal_length])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(species.label())
                        .color(state.colors.color_for(species))
                        .radius(2.5),
                );
            }
        });
}
