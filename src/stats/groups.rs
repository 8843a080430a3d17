use std::collections::BTreeMap;

use crate::data::model::{IrisTable, Measure, Species};

// ---------------------------------------------------------------------------
// Grouped aggregates keyed by species
// ---------------------------------------------------------------------------

/// Mean of one measure per species. Species absent from the table are
/// absent from the map.
pub fn species_means(table: &IrisTable, measure: Measure) -> BTreeMap<Species, f64> {
    let mut sums: BTreeMap<Species, (f64, usize)> = BTreeMap::new();
    for obs in table.rows() {
        let entry = sums.entry(obs.species).or_insert((0.0, 0));
        entry.0 += measure.of(obs);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(species, (sum, n))| (species, sum / n as f64))
        .collect()
}

/// Observation count per species.
pub fn species_counts(table: &IrisTable) -> BTreeMap<Species, usize> {
    let mut counts: BTreeMap<Species, usize> = BTreeMap::new();
    for obs in table.rows() {
        *counts.entry(obs.species).or_default() += 1;
    }
    counts
}
