//! Periodic-bias detection over column-statistic series.
//!
//! A block-based encoder that biases certain columns does so at a fixed
//! period (16 pixels for macroblock-aligned artifacts). Bucketing a
//! difference series by `index % period` and comparing the bucket means
//! exposes that structure: a high [`PeriodicityReport::phase_rms`] means one
//! phase diverges systematically from the others, which row averaging alone
//! cannot produce.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Mean value.
    pub mean: f64,
    /// Population RMS deviation around the mean (divide by length, not
    /// length − 1).
    pub rms: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl SeriesStats {
    /// Compute statistics for a slice of values.
    ///
    /// Returns `None` if the slice is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use artifact_eval::periodicity::SeriesStats;
    ///
    /// let s = SeriesStats::compute(&[1.0, 3.0]).unwrap();
    /// assert_eq!(s.mean, 2.0);
    /// assert_eq!(s.rms, 1.0);
    /// assert_eq!(s.min, 1.0);
    /// assert_eq!(s.max, 3.0);
    /// ```
    #[must_use]
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let rms = (values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n).sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self { mean, rms, min, max })
    }
}

/// Partition a series by `index % period` and average each bucket.
///
/// Returns the `period` bucket means and the population RMS of those means
/// around their own mean. `None` if the series is empty, the period is zero,
/// or the period exceeds the series length (an empty bucket has no mean).
#[must_use]
pub fn phase_means(series: &[f64], period: u32) -> Option<(Vec<f64>, f64)> {
    let period = period as usize;
    if series.is_empty() || period == 0 || period > series.len() {
        return None;
    }

    let mut acc = vec![0.0f64; period];
    let mut cnt = vec![0u32; period];
    for (i, x) in series.iter().enumerate() {
        acc[i % period] += x;
        cnt[i % period] += 1;
    }

    let means: Vec<f64> = acc
        .iter()
        .zip(cnt.iter())
        .map(|(a, c)| a / f64::from(*c))
        .collect();

    let m = means.iter().sum::<f64>() / period as f64;
    let rms = (means.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / period as f64).sqrt();

    Some((means, rms))
}

/// Full periodicity analysis of one series at one candidate period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicityReport {
    /// Statistics over the raw series.
    pub global: SeriesStats,
    /// Candidate period in columns.
    pub period: u32,
    /// Mean per phase bucket; exactly `period` entries.
    pub phase_means: Vec<f64>,
    /// Population RMS of the bucket means around their own mean. Distinct
    /// from `global.rms`, which is over the raw series.
    pub phase_rms: f64,
}

impl PeriodicityReport {
    /// Analyze `series` at `period`.
    ///
    /// Returns `None` under the same conditions as [`phase_means`].
    #[must_use]
    pub fn analyze(series: &[f64], period: u32) -> Option<Self> {
        let global = SeriesStats::compute(series)?;
        let (means, phase_rms) = phase_means(series, period)?;
        Some(Self {
            global,
            period,
            phase_means: means,
            phase_rms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty() {
        assert!(SeriesStats::compute(&[]).is_none());
    }

    #[test]
    fn test_stats_population_rms() {
        // Deviations from mean 2.0 are -2, 0, +2: rms = sqrt(8/3).
        let s = SeriesStats::compute(&[0.0, 2.0, 4.0]).unwrap();
        assert_eq!(s.mean, 2.0);
        assert!((s.rms - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn test_phase_means_rejects_degenerate_input() {
        assert!(phase_means(&[], 4).is_none());
        assert!(phase_means(&[1.0, 2.0], 0).is_none());
        assert!(phase_means(&[1.0, 2.0], 3).is_none());
    }

    #[test]
    fn test_phase_means_bucket_count() {
        for period in 1..=8u32 {
            let series: Vec<f64> = (0..32).map(|i| f64::from(i)).collect();
            let (means, _) = phase_means(&series, period).unwrap();
            assert_eq!(means.len(), period as usize);
        }
    }

    #[test]
    fn test_phase_partition_conserves_sum() {
        // Each sample lands in exactly one bucket, so weighted bucket sums
        // recover the series sum.
        let series: Vec<f64> = (0..37).map(|i| f64::from(i * i % 11)).collect();
        let period = 5u32;
        let (means, _) = phase_means(&series, period).unwrap();

        let mut counts = vec![0u32; period as usize];
        for i in 0..series.len() {
            counts[i % period as usize] += 1;
        }
        let weighted: f64 = means
            .iter()
            .zip(counts.iter())
            .map(|(m, c)| m * f64::from(*c))
            .sum();
        let total: f64 = series.iter().sum();
        assert!((weighted - total).abs() < 1e-9);
    }

    #[test]
    fn test_period_one_has_zero_phase_rms() {
        let series = vec![3.0, -1.0, 4.0, -1.5, 5.0];
        let (means, rms) = phase_means(&series, 1).unwrap();
        assert_eq!(means.len(), 1);
        assert_eq!(rms, 0.0);
    }

    #[test]
    fn test_uniform_series_has_zero_phase_rms() {
        let series = vec![7.25; 64];
        for period in [1, 2, 7, 16] {
            let (means, rms) = phase_means(&series, period).unwrap();
            assert!(means.iter().all(|&m| m == 7.25));
            assert_eq!(rms, 0.0);
        }
    }

    #[test]
    fn test_periodic_signal_detected() {
        // Every 4th entry is biased by +1; other phases sit at zero.
        let series: Vec<f64> = (0..64).map(|i| if i % 4 == 0 { 1.0 } else { 0.0 }).collect();
        let report = PeriodicityReport::analyze(&series, 4).unwrap();
        assert_eq!(report.phase_means.len(), 4);
        assert_eq!(report.phase_means[0], 1.0);
        assert_eq!(report.phase_means[1], 0.0);
        assert!(report.phase_rms > 0.4);

        // At a mismatched period the bias smears across buckets.
        let off = PeriodicityReport::analyze(&series, 3).unwrap();
        assert!(off.phase_rms < report.phase_rms / 5.0);
    }

    #[test]
    fn test_report_global_matches_stats() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        let report = PeriodicityReport::analyze(&series, 2).unwrap();
        assert_eq!(report.global, SeriesStats::compute(&series).unwrap());
        assert_eq!(report.period, 2);
    }
}
