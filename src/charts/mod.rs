//! Chart layer: the fixed sequence of views rendered from the table and
//! the precomputed analysis.

pub mod bars;
pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod line;
pub mod panels;
pub mod scatter;

use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// ChartKind – the fixed presentation sequence
// ---------------------------------------------------------------------------

/// The six charts, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TrendLine,
    SpeciesBars,
    Histogram,
    Scatter,
    CorrelationHeatmap,
    BoxPlot,
}

impl ChartKind {
    pub const SEQUENCE: [ChartKind; 6] = [
        ChartKind::TrendLine,
        ChartKind::SpeciesBars,
        ChartKind::Histogram,
        ChartKind::Scatter,
        ChartKind::CorrelationHeatmap,
        ChartKind::BoxPlot,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::TrendLine => "Trend of Sepal Length (Sorted)",
            ChartKind::SpeciesBars => "Average Petal Length by Species",
            ChartKind::Histogram => "Distribution of Sepal Length",
            ChartKind::Scatter => "Sepal Length vs Petal Length",
            ChartKind::CorrelationHeatmap => "Correlation of Measurements",
            ChartKind::BoxPlot => "Measurements by Species",
        }
    }

    /// Render this chart into the central panel.
    pub fn show(self, ui: &mut Ui, state: &AppState) {
        match self {
            ChartKind::TrendLine => line::trend_line(ui, state),
            ChartKind::SpeciesBars => bars::species_bars(ui, state),
            ChartKind::Histogram => histogram::histogram(ui, state),
            ChartKind::Scatter => scatter::scatter(ui, state),
            ChartKind::CorrelationHeatmap => heatmap::correlation_heatmap(ui, state),
            ChartKind::BoxPlot => boxplot::species_boxes(ui, state),
        }
    }
}

/// Axis label for integer category positions, blank between them.
pub(crate) fn category_label(names: &[&str], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 0.05 || idx < 0.0 {
        return String::new();
    }
    names
        .get(idx as usize)
        .map(|name| name.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sequence_has_six_unique_charts() {
        assert_eq!(ChartKind::SEQUENCE.len(), 6);
        for (i, a) in ChartKind::SEQUENCE.iter().enumerate() {
            for b in &ChartKind::SEQUENCE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn category_labels_only_at_integer_positions() {
        let names = ["setosa", "versicolor", "virginica"];
        assert_eq!(category_label(&names, 0.0), "setosa");
        assert_eq!(category_label(&names, 2.01), "virginica");
        assert_eq!(category_label(&names, 0.5), "");
        assert_eq!(category_label(&names, -1.0), "");
        assert_eq!(category_label(&names, 7.0), "");
    }
}
