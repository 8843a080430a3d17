use crate::data::model::{IrisTable, Measure};

// ---------------------------------------------------------------------------
// Pairwise Pearson correlation over the numeric columns
// ---------------------------------------------------------------------------

/// Side length of the correlation matrix.
pub const SIZE: usize = Measure::ALL.len();

/// Pairwise Pearson correlations over the numeric columns. Row and column
/// order follows `Measure::ALL`. Symmetric with a 1.0 diagonal; NaN where a
/// column has zero variance.
pub fn correlation_matrix(table: &IrisTable) -> [[f64; SIZE]; SIZE] {
    let columns: Vec<Vec<f64>> = Measure::ALL.iter().map(|&m| table.column(m)).collect();

    let mut matrix = [[1.0; SIZE]; SIZE];
    for i in 0..SIZE {
        for j in (i + 1)..SIZE {
            let r = pearson(&columns[i], &columns[j]).unwrap_or(f64::NAN);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

/// Pearson correlation coefficient between two columns. `None` when the
/// slices differ in length, are empty, or either has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let numerator: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let denom_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    let denom_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
    let denominator = (denom_x * denom_y).sqrt();

    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
