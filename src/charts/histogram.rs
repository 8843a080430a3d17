use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, VLine};

use crate::data::model::Measure;
use crate::state::AppState;

/// Fixed bin count for the sepal length distribution.
pub const BIN_COUNT: usize = 15;

const BAR_COLOR: Color32 = Color32::from_rgb(110, 160, 210);
const MEAN_COLOR: Color32 = Color32::RED;

// ---------------------------------------------------------------------------
// Equal-width binning
// ---------------------------------------------------------------------------

/// Equal-width bin layout over the closed range of the input values.
pub(crate) struct Bins {
    pub start: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

/// Bin `values` into `bin_count` equal-width bins spanning [min, max]. The
/// maximum value lands in the last bin. Degenerate input (all values equal)
/// collapses into the first bin.
pub(crate) fn bin_values(values: &[f64], bin_count: usize) -> Bins {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if values.is_empty() || bin_count == 0 || span <= 0.0 {
        let mut counts = vec![0; bin_count.max(1)];
        counts[0] = values.len();
        return Bins {
            start: if values.is_empty() { 0.0 } else { min },
            width: 1.0,
            counts,
        };
    }

    let width = span / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &value in values {
        let idx = (((value - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }
    Bins {
        start: min,
        width,
        counts,
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Histogram of sepal length with a dashed marker at the overall mean.
pub fn histogram(ui: &mut Ui, state: &AppState) {
    let values = state.table.column(Measure::SepalLength);
    let bins = bin_values(&values, BIN_COUNT);
    let mean = state.analysis.summary(Measure::SepalLength).mean;

    let bars: Vec<Bar> = bins
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = bins.start + (i as f64 + 0.5) * bins.width;
            Bar::new(center, count as f64)
                .width(bins.width * 0.95)
                .fill(BAR_COLOR)
        })
        .collect();

    Plot::new("histogram")
        .legend(Legend::default())
        .x_axis_label(Measure::SepalLength.axis_label())
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            plot_ui.vline(
                VLine::new(mean)
                    .name(format!("Mean: {mean:.2}"))
                    .color(MEAN_COLOR)
                    .style(LineStyle::dashed_loose())
                    .width(1.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_sum_to_input_length() {
        let values: Vec<f64> = (0..100).map(|i| 4.0 + i as f64 * 0.04).collect();
        let bins = bin_values(&values, BIN_COUNT);
        assert_eq!(bins.counts.len(), BIN_COUNT);
        assert_eq!(bins.counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn maximum_value_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = bin_values(&values, 5);
        assert_eq!(bins.counts[4], 2);
    }

    #[test]
    fn identical_values_collapse_into_first_bin() {
        let values = [3.0, 3.0, 3.0];
        let bins = bin_values(&values, 4);
        assert_eq!(bins.counts[0], 3);
        assert_eq!(bins.counts[1..].iter().sum::<usize>(), 0);
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let bins = bin_values(&[], 15);
        assert_eq!(bins.counts.iter().sum::<usize>(), 0);
    }
}
