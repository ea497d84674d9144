//! Statistics Calculator Module
//! Descriptive statistics, box plot summaries and histogram binning.

use statrs::statistics::Statistics;

/// `describe()`-style statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Default for DescriptiveStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Five-number summary plus outliers for one box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// One histogram bin covering `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values. Sample standard
    /// deviation (n - 1), NaN when fewer than two values.
    pub fn compute_descriptive_stats(values: &[f64]) -> DescriptiveStats {
        let n = values.len();
        if n == 0 {
            return DescriptiveStats::default();
        }

        let sorted = Self::sorted(values);
        let std = if n > 1 { values.std_dev() } else { f64::NAN };

        DescriptiveStats {
            count: n,
            mean: values.mean(),
            std,
            min: Statistics::min(values),
            q1: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q3: Self::percentile(&sorted, 75.0),
            max: Statistics::max(values),
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Box summary with whiskers at the most extreme values inside 1.5 IQR.
    pub fn compute_box_stats(values: &[f64]) -> Option<BoxStats> {
        if values.is_empty() {
            return None;
        }
        let sorted = Self::sorted(values);
        let q1 = Self::percentile(&sorted, 25.0);
        let median = Self::percentile(&sorted, 50.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(BoxStats {
            count: sorted.len(),
            mean: values.mean(),
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }

    /// Bin values for a histogram.
    ///
    /// Integer-valued data spanning at most `bins` distinct integers gets one
    /// unit-wide bin per integer; a constant column gets a single unit-wide
    /// bin; anything else gets `bins` equal-width bins.
    pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
        if values.is_empty() {
            return Vec::new();
        }
        let bins = bins.max(1);
        let min = Statistics::min(values);
        let max = Statistics::max(values);
        let integral = values.iter().all(|v| v.fract() == 0.0);

        let (start, width, count) = if min == max {
            (min - 0.5, 1.0, 1)
        } else if integral && (max - min) < bins as f64 {
            (min - 0.5, 1.0, (max - min) as usize + 1)
        } else {
            (min, (max - min) / bins as f64, bins)
        };

        let mut result: Vec<HistogramBin> = (0..count)
            .map(|i| HistogramBin {
                lower: start + i as f64 * width,
                upper: start + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = (((v - start) / width).floor() as usize).min(count - 1);
            result[idx].count += 1;
        }

        result
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn descriptive_stats_match_describe() {
        let stats = StatsCalculator::compute_descriptive_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert!(close(stats.mean, 2.5));
        assert!(close(stats.std, 1.2909944487358056));
        assert!(close(stats.min, 1.0));
        assert!(close(stats.q1, 1.75));
        assert!(close(stats.median, 2.5));
        assert!(close(stats.q3, 3.25));
        assert!(close(stats.max, 4.0));
    }

    #[test]
    fn single_value_has_undefined_std() {
        let stats = StatsCalculator::compute_descriptive_stats(&[7.0]);
        assert_eq!(stats.count, 1);
        assert!(stats.std.is_nan());
        assert!(close(stats.median, 7.0));
    }

    #[test]
    fn empty_values_give_nan_stats() {
        let stats = StatsCalculator::compute_descriptive_stats(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted = [10.0, 20.0, 30.0];
        assert!(close(StatsCalculator::percentile(&sorted, 50.0), 20.0));
        assert!(close(StatsCalculator::percentile(&sorted, 25.0), 15.0));
        assert!(close(StatsCalculator::percentile(&sorted, 100.0), 30.0));
    }

    #[test]
    fn box_stats_separate_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let b = StatsCalculator::compute_box_stats(&values).unwrap();
        assert!(close(b.q1, 2.25));
        assert!(close(b.q3, 4.75));
        assert!(close(b.lower_whisker, 1.0));
        assert!(close(b.upper_whisker, 5.0));
        assert_eq!(b.outliers, vec![100.0]);
        assert_eq!(b.count, 6);
    }

    #[test]
    fn box_stats_of_nothing_is_none() {
        assert!(StatsCalculator::compute_box_stats(&[]).is_none());
    }

    #[test]
    fn small_integer_range_gets_unit_bins() {
        let bins = StatsCalculator::histogram(&[0.0, 1.0, 1.0, 3.0, 5.0], 30);
        assert_eq!(bins.len(), 6);
        assert!(close(bins[0].lower, -0.5));
        assert_eq!(bins[1].count, 2);
        assert_eq!(bins[2].count, 0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 5);
    }

    #[test]
    fn continuous_values_use_requested_bins() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let bins = StatsCalculator::histogram(&values, 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        // max lands in the closed last bin
        assert!(bins[9].count > 0);
    }

    #[test]
    fn constant_column_is_one_bin() {
        let bins = StatsCalculator::histogram(&[4.0, 4.0, 4.0], 30);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }
}
