use eframe::egui::{Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Legend, Plot};

use crate::charts::category_label;
use crate::data::model::{Measure, Species};
use crate::state::AppState;
use crate::stats::summary::{tukey_whiskers, SummaryStats};

/// Horizontal offset between species boxes within one measure group.
const GROUP_OFFSET: f64 = 0.25;
const BOX_WIDTH: f64 = 0.2;

/// All four measurements grouped by species: quartile boxes with Tukey
/// whiskers, one colour per species.
pub fn species_boxes(ui: &mut Ui, state: &AppState) {
    let names: Vec<&str> = Measure::ALL.iter().map(|m| m.column_name()).collect();

    Plot::new("species_boxes")
        .legend(Legend::default())
        .x_axis_label("Measurement")
        .y_axis_label("Value (cm)")
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .show(ui, |plot_ui| {
            for (s_idx, &species) in Species::ALL.iter().enumerate() {
                let color = state.colors.color_for(species);

                let mut elems = Vec::with_capacity(Measure::ALL.len());
                for (m_idx, &measure) in Measure::ALL.iter().enumerate() {
                    let mut values: Vec<f64> = state
                        .table
                        .species_rows(species)
                        .map(|obs| measure.of(obs))
                        .collect();
                    if values.is_empty() {
                        continue;
                    }
                    values.sort_by(f64::total_cmp);

                    let stats = SummaryStats::from_values(&values);
                    let (lo, hi) = tukey_whiskers(&values, stats.q1, stats.q3);

                    let x = m_idx as f64 + (s_idx as f64 - 1.0) * GROUP_OFFSET;
                    elems.push(
                        BoxElem::new(x, BoxSpread::new(lo, stats.q1, stats.median, stats.q3, hi))
                            .box_width(BOX_WIDTH)
                            .whisker_width(BOX_WIDTH * 0.6)
                            .fill(color.gamma_multiply(0.5))
                            .stroke(Stroke::new(1.0, color)),
                    );
                }

                plot_ui.box_plot(BoxPlot::new(elems).name(species.label()));
            }
        });
}
