// ---------------------------------------------------------------------------
// Descriptive statistics for a single numeric column
// ---------------------------------------------------------------------------

/// Summary of one numeric column: count, mean, sample standard deviation,
/// min, quartiles, max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Compute from raw values. An empty input yields a zeroed summary.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return SummaryStats {
                count: 0,
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                q1: 0.0,
                median: 0.0,
                q3: 0.0,
                max: 0.0,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        SummaryStats {
            count,
            mean,
            std: sample_std(values, mean),
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Sample standard deviation (n − 1 denominator). Zero for fewer than
/// two values.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Linear-interpolated percentile over an ascending slice, `p` in [0, 1].
/// NaN for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let frac = idx - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Whisker bounds for a box plot: the furthest data points still within
/// 1.5 IQR of the quartile box. Falls back to the quartiles themselves when
/// no point qualifies.
pub fn tukey_whiskers(sorted: &[f64], q1: f64, q3: f64) -> (f64, f64) {
    let iqr = q3 - q1;
    let lo_bound = q1 - 1.5 * iqr;
    let hi_bound = q3 + 1.5 * iqr;
    let lo = sorted
        .iter()
        .copied()
        .find(|v| *v >= lo_bound)
        .unwrap_or(q1);
    let hi = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= hi_bound)
        .unwrap_or(q3);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_of_one_to_five() {
        // Mean 3, sample variance 10/4 = 2.5, std ≈ 1.5811.
        let stats = SummaryStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.count, 5);
        assert!(close(stats.mean, 3.0));
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-9);
        assert!(close(stats.min, 1.0));
        assert!(close(stats.q1, 2.0));
        assert!(close(stats.median, 3.0));
        assert!(close(stats.q3, 4.0));
        assert!(close(stats.max, 5.0));
    }

    #[test]
    fn summary_handles_unsorted_input() {
        let stats = SummaryStats::from_values(&[5.0, 1.0, 3.0, 2.0, 4.0]);
        assert!(close(stats.min, 1.0));
        assert!(close(stats.max, 5.0));
        assert!(close(stats.median, 3.0));
    }

    #[test]
    fn summary_of_empty_input_is_zeroed() {
        let stats = SummaryStats::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn std_of_identical_values_is_zero() {
        let stats = SummaryStats::from_values(&[4.0, 4.0, 4.0, 4.0]);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        // Quartile index 0.25 * 3 = 0.75 → between 1.0 and 2.0.
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(close(percentile(&sorted, 0.25), 1.75));
        assert!(close(percentile(&sorted, 0.5), 2.5));
        assert!(close(percentile(&sorted, 0.75), 3.25));
        assert!(close(percentile(&sorted, 0.0), 1.0));
        assert!(close(percentile(&sorted, 1.0), 4.0));
    }

    #[test]
    fn whiskers_stay_within_data_without_outliers() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        let (lo, hi) = tukey_whiskers(&sorted, 2.0, 4.0);
        assert_eq!((lo, hi), (1.0, 5.0));
    }

    #[test]
    fn whiskers_exclude_outliers() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 100.0];
        let (lo, hi) = tukey_whiskers(&sorted, 2.0, 4.0);
        assert_eq!(lo, 1.0);
        // 100 sits beyond q3 + 1.5 * IQR = 7.
        assert_eq!(hi, 4.0);
    }

    #[test]
    fn spread_is_ordered() {
        let values = [2.2, 9.1, 4.4, 6.3, 1.5, 7.7, 3.9, 5.0];
        let stats = SummaryStats::from_values(&values);
        assert!(stats.min <= stats.q1);
        assert!(stats.q1 <= stats.median);
        assert!(stats.median <= stats.q3);
        assert!(stats.q3 <= stats.max);
    }
}
