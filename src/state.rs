use crate::charts::ChartKind;
use crate::color::SpeciesColors;
use crate::data::model::IrisTable;
use crate::stats::Analysis;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the chart viewer needs. The table and analysis are computed
/// before the window opens and never change afterwards; only the chart
/// selection is mutable.
pub struct AppState {
    /// Loaded dataset.
    pub table: IrisTable,

    /// Statistics computed once after load.
    pub analysis: Analysis,

    /// Fixed per-species colours shared by every chart.
    pub colors: SpeciesColors,

    /// Chart currently shown in the central panel.
    pub selected: ChartKind,
}

impl AppState {
    pub fn new(table: IrisTable, analysis: Analysis) -> Self {
        AppState {
            table,
            analysis,
            colors: SpeciesColors::new(),
            selected: ChartKind::SEQUENCE[0],
        }
    }

    /// 1-based position of the selected chart in the fixed sequence.
    pub fn selected_position(&self) -> usize {
        ChartKind::SEQUENCE
            .iter()
            .position(|&kind| kind == self.selected)
            .map(|idx| idx + 1)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::sample_table;

    #[test]
    fn starts_on_the_first_chart() {
        let table = sample_table();
        let analysis = Analysis::compute(&table);
        let state = AppState::new(table, analysis);
        assert_eq!(state.selected, ChartKind::SEQUENCE[0]);
        assert_eq!(state.selected_position(), 1);
    }
}
