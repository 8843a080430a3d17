use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Species – the categorical column
// ---------------------------------------------------------------------------

/// Iris species. Ordering follows the declaration order, which for this
/// dataset is also the ascending order of every grouped measurement mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Lowercase label as it appears in the CSV.
    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Measure – the four numeric columns
// ---------------------------------------------------------------------------

/// One of the four numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measure {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Measure {
    pub const ALL: [Measure; 4] = [
        Measure::SepalLength,
        Measure::SepalWidth,
        Measure::PetalLength,
        Measure::PetalWidth,
    ];

    /// Column name as it appears in the CSV header.
    pub fn column_name(self) -> &'static str {
        match self {
            Measure::SepalLength => "sepal_length",
            Measure::SepalWidth => "sepal_width",
            Measure::PetalLength => "petal_length",
            Measure::PetalWidth => "petal_width",
        }
    }

    /// Axis label used on charts.
    pub fn axis_label(self) -> &'static str {
        match self {
            Measure::SepalLength => "Sepal Length (cm)",
            Measure::SepalWidth => "Sepal Width (cm)",
            Measure::PetalLength => "Petal Length (cm)",
            Measure::PetalWidth => "Petal Width (cm)",
        }
    }

    /// Value of this column for one observation.
    pub fn of(self, obs: &Observation) -> f64 {
        match self {
            Measure::SepalLength => obs.sepal_length,
            Measure::SepalWidth => obs.sepal_width,
            Measure::PetalLength => obs.petal_length,
            Measure::PetalWidth => obs.petal_width,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the table
// ---------------------------------------------------------------------------

/// A single observation (one row of the source CSV).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

// ---------------------------------------------------------------------------
// IrisTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once at load time and never mutated;
/// charts and statistics only read column views derived from it.
#[derive(Debug, Clone, Default)]
pub struct IrisTable {
    rows: Vec<Observation>,
}

impl IrisTable {
    /// Numeric columns plus the species column.
    pub const COLUMN_COUNT: usize = Measure::ALL.len() + 1;

    pub fn new(rows: Vec<Observation>) -> Self {
        IrisTable { rows }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Values of one numeric column, in row order.
    pub fn column(&self, measure: Measure) -> Vec<f64> {
        self.rows.iter().map(|obs| measure.of(obs)).collect()
    }

    /// Values of one numeric column, sorted ascending.
    pub fn sorted_column(&self, measure: Measure) -> Vec<f64> {
        let mut values = self.column(measure);
        values.sort_by(f64::total_cmp);
        values
    }

    /// Observations belonging to one species, in row order.
    pub fn species_rows(&self, species: Species) -> impl Iterator<Item = &Observation> {
        self.rows.iter().filter(move |obs| obs.species == species)
    }

    /// Missing cells per column: NaN counts for the numeric columns, and a
    /// fixed zero for `species` (enum-typed, present whenever the row parsed).
    /// All zero for the reference dataset.
    pub fn missing_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Measure::ALL
            .iter()
            .map(|&m| {
                let nan_count = self.rows.iter().filter(|obs| m.of(obs).is_nan()).count();
                (m.column_name(), nan_count)
            })
            .collect();
        counts.push(("species", 0));
        counts
    }
}

// ---------------------------------------------------------------------------
// Shared test fixture
// ---------------------------------------------------------------------------

/// Small table with hand-computable statistics: four observations per
/// species, group means ordered setosa < versicolor < virginica.
#[cfg(test)]
pub(crate) fn sample_table() -> IrisTable {
    fn obs(sl: f64, sw: f64, pl: f64, pw: f64, species: Species) -> Observation {
        Observation {
            sepal_length: sl,
            sepal_width: sw,
            petal_length: pl,
            petal_width: pw,
            species,
        }
    }

    IrisTable::new(vec![
        obs(5.0, 3.5, 1.4, 0.2, Species::Setosa),
        obs(4.8, 3.3, 1.6, 0.2, Species::Setosa),
        obs(5.2, 3.7, 1.4, 0.4, Species::Setosa),
        obs(5.0, 3.5, 1.6, 0.2, Species::Setosa),
        obs(6.0, 2.8, 4.0, 1.2, Species::Versicolor),
        obs(5.8, 2.6, 4.2, 1.4, Species::Versicolor),
        obs(6.2, 3.0, 4.4, 1.4, Species::Versicolor),
        obs(6.0, 2.8, 4.2, 1.2, Species::Versicolor),
        obs(6.6, 3.0, 5.4, 2.0, Species::Virginica),
        obs(6.4, 2.8, 5.6, 2.2, Species::Virginica),
        obs(6.8, 3.2, 5.8, 2.4, Species::Virginica),
        obs(6.6, 3.0, 5.6, 2.2, Species::Virginica),
    ])
}
