use eframe::egui::{Align2, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::charts::category_label;
use crate::data::model::Measure;
use crate::state::AppState;

const BAR_WIDTH: f64 = 0.6;
/// Vertical gap between a bar top and its value annotation, in cm.
const ANNOTATION_GAP: f64 = 0.08;

/// Mean petal length per species, the value annotated above each bar.
pub fn species_bars(ui: &mut Ui, state: &AppState) {
    let means = &state.analysis.petal_length_means;

    let mut bars = Vec::with_capacity(means.len());
    let mut annotations = Vec::with_capacity(means.len());
    let mut names = Vec::with_capacity(means.len());
    for (i, (&species, &mean)) in means.iter().enumerate() {
        bars.push(
            Bar::new(i as f64, mean)
                .width(BAR_WIDTH)
                .name(species.label())
                .fill(state.colors.color_for(species)),
        );
        annotations.push((i as f64, mean, format!("{mean:.2}")));
        names.push(species.label());
    }

    Plot::new("species_bars")
        .x_axis_label("Species")
        .y_axis_label(Measure::PetalLength.axis_label())
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (x, y, label) in annotations {
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y + ANNOTATION_GAP), label)
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}
