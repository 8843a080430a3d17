//! Analysis layer: descriptive statistics, grouped aggregates, and the
//! correlation matrix. Everything here is a pure function of the table.

pub mod correlate;
pub mod groups;
pub mod summary;

use std::collections::BTreeMap;

use crate::data::model::{IrisTable, Measure, Species};
use correlate::correlation_matrix;
use groups::{species_counts, species_means};
use summary::SummaryStats;

// ---------------------------------------------------------------------------
// Analysis – everything derived from the table, computed once after load
// ---------------------------------------------------------------------------

/// All derived statistics the report and the charts read. Computed once per
/// run; the table itself is never touched again after this.
pub struct Analysis {
    /// Per-column summary, keyed by measure.
    pub summaries: BTreeMap<Measure, SummaryStats>,
    /// Missing cells per column (name, count). All zero for the reference
    /// dataset.
    pub missing: Vec<(&'static str, usize)>,
    /// Observation count per species.
    pub species_counts: BTreeMap<Species, usize>,
    /// Mean sepal length per species.
    pub sepal_length_means: BTreeMap<Species, f64>,
    /// Mean petal length per species.
    pub petal_length_means: BTreeMap<Species, f64>,
    /// Pairwise Pearson correlations, `Measure::ALL` order.
    pub correlation: [[f64; correlate::SIZE]; correlate::SIZE],
}

impl Analysis {
    pub fn compute(table: &IrisTable) -> Self {
        let summaries = Measure::ALL
            .iter()
            .map(|&m| (m, SummaryStats::from_values(&table.column(m))))
            .collect();

        Analysis {
            summaries,
            missing: table.missing_counts(),
            species_counts: species_counts(table),
            sepal_length_means: species_means(table, Measure::SepalLength),
            petal_length_means: species_means(table, Measure::PetalLength),
            correlation: correlation_matrix(table),
        }
    }

    /// Summary for one column. Present for every measure after `compute`.
    pub fn summary(&self, measure: Measure) -> SummaryStats {
        self.summaries
            .get(&measure)
            .copied()
            .unwrap_or_else(|| SummaryStats::from_values(&[]))
    }
}
