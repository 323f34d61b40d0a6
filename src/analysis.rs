//! Banding analysis: the full reporting path over a reference/test pair.
//!
//! Compares per-column mean statistics of a test image against a reference
//! in every channel, and runs periodicity detection on the luma and chroma
//! diffs. The resulting report serializes to JSON; the raw per-column diff
//! series can be dumped to CSV for external plotting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colorspace::Channel;
use crate::column::{column_means, series_diff};
use crate::error::{Error, Result};
use crate::periodicity::{PeriodicityReport, SeriesStats};
use crate::ppm::RasterImage;

/// Default candidate period: the macroblock width of block-based codecs.
pub const MACROBLOCK_PERIOD: u32 = 16;

/// Per-channel column-mean difference (test minus reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDiff {
    /// Which channel this diff covers.
    pub channel: Channel,
    /// Statistics over the diff series.
    pub stats: SeriesStats,
    /// Phase analysis at the report's period; luma and chroma channels only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub periodicity: Option<PeriodicityReport>,
    /// Raw diff series, one entry per column. Not serialized to JSON; the
    /// CSV dump carries it.
    #[serde(skip)]
    pub series: Vec<f64>,
}

/// Banding analysis of one test image against a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandingReport {
    /// Label for the reference image (typically its path).
    pub reference: String,
    /// Label for the test image.
    pub test: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Candidate period used for phase analysis.
    pub period: u32,
    /// One entry per channel, in [`Channel::ALL`] order.
    pub channels: Vec<ChannelDiff>,
    /// When this report was generated.
    #[serde(with = "chrono_serde")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl BandingReport {
    /// Analyze `test` against `reference` at the given period.
    ///
    /// Fails if the images differ in dimensions or if the period is zero or
    /// wider than the image.
    pub fn analyze(reference: &RasterImage, test: &RasterImage, period: u32) -> Result<Self> {
        if !reference.same_dimensions(test) {
            return Err(Error::SizeMismatch {
                expected: reference.pixels().len(),
                actual: test.pixels().len(),
            });
        }

        let mut channels = Vec::with_capacity(Channel::ALL.len());
        for channel in Channel::ALL {
            let ref_series = column_means(reference, channel);
            let test_series = column_means(test, channel);
            let series = series_diff(&ref_series, &test_series);

            let stats = SeriesStats::compute(&series)
                .ok_or_else(|| Error::Analysis("empty column series".to_string()))?;

            let periodicity = if matches!(channel, Channel::Luma | Channel::Cb | Channel::Cr) {
                Some(PeriodicityReport::analyze(&series, period).ok_or_else(|| {
                    Error::Analysis(format!(
                        "period {period} invalid for width {}",
                        reference.width()
                    ))
                })?)
            } else {
                None
            };

            channels.push(ChannelDiff {
                channel,
                stats,
                periodicity,
                series,
            });
        }

        Ok(Self {
            reference: String::new(),
            test: String::new(),
            width: reference.width(),
            height: reference.height(),
            period,
            channels,
            timestamp: chrono::Utc::now(),
        })
    }

    /// Look up the diff for one channel.
    #[must_use]
    pub fn channel(&self, channel: Channel) -> Option<&ChannelDiff> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Serialize to pretty JSON and write with a single filesystem call.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Dump the raw per-column diff series as CSV, one row per column.
    pub fn write_series_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        let mut header = vec!["column".to_string()];
        header.extend(self.channels.iter().map(|c| c.channel.code().to_string()));
        wtr.write_record(&header)?;

        for col in 0..self.width as usize {
            let mut record = vec![col.to_string()];
            record.extend(self.channels.iter().map(|c| format!("{:.6}", c.series[col])));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

// RFC 3339 timestamps in reports.
mod chrono_serde {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dt.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> RasterImage {
        RasterImage::from_raw(width, height, vec![value; width as usize * height as usize * 3])
            .unwrap()
    }

    /// Test image with every `period`-th column brightened by `delta`.
    fn striped(width: u32, height: u32, period: u32, delta: u8) -> RasterImage {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _y in 0..height {
            for x in 0..width {
                let v = if x % period == 0 { 64 + delta } else { 64 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        RasterImage::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_identical_images_report_zero() {
        let img = uniform(32, 4, 80);
        let report = BandingReport::analyze(&img, &img, MACROBLOCK_PERIOD).unwrap();

        assert_eq!(report.channels.len(), Channel::ALL.len());
        for c in &report.channels {
            assert_eq!(c.stats.mean, 0.0);
            assert_eq!(c.stats.rms, 0.0);
            assert_eq!(c.series.len(), 32);
        }
        let luma = report.channel(Channel::Luma).unwrap();
        let phase = luma.periodicity.as_ref().unwrap();
        assert_eq!(phase.phase_means.len(), 16);
        assert_eq!(phase.phase_rms, 0.0);
    }

    #[test]
    fn test_periodic_bias_detected() {
        let reference = uniform(64, 4, 64);
        let test = striped(64, 4, 16, 32);
        let report = BandingReport::analyze(&reference, &test, 16).unwrap();

        let luma = report.channel(Channel::Luma).unwrap();
        let phase = luma.periodicity.as_ref().unwrap();
        // The bias sits entirely in phase 0.
        assert!(phase.phase_means[0] > 20.0);
        assert!(phase.phase_means[1].abs() < 1e-9);
        assert!(phase.phase_rms > 1.0);

        // RGB channels carry stats but no phase analysis.
        let red = report.channel(Channel::R).unwrap();
        assert!(red.periodicity.is_none());
        assert!(red.stats.mean > 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = uniform(32, 4, 10);
        let b = uniform(16, 8, 10);
        assert!(matches!(
            BandingReport::analyze(&a, &b, 16),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_period() {
        let img = uniform(8, 2, 10);
        assert!(matches!(
            BandingReport::analyze(&img, &img, 0),
            Err(Error::Analysis(_))
        ));
        assert!(matches!(
            BandingReport::analyze(&img, &img, 9),
            Err(Error::Analysis(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let img = uniform(16, 2, 50);
        let mut report = BandingReport::analyze(&img, &img, 8).unwrap();
        report.reference = "ref.ppm".to_string();
        report.test = "test.ppm".to_string();

        let json = serde_json::to_string(&report).unwrap();
        let back: BandingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reference, "ref.ppm");
        assert_eq!(back.period, 8);
        assert_eq!(back.channels.len(), report.channels.len());
        // The raw series is CSV-only.
        assert!(back.channels[0].series.is_empty());
    }

    #[test]
    fn test_write_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let img = uniform(16, 2, 50);
        let report = BandingReport::analyze(&img, &img, 4).unwrap();

        let json_path = dir.path().join("report.json");
        report.write_json(&json_path).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let csv_path = dir.path().join("series.csv");
        report.write_series_csv(&csv_path).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("column,y,r,g,b,cb,cr"));
        assert_eq!(lines.count(), 16);
    }
}
