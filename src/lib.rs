//! # artifact-eval
//!
//! Encoder artifact analysis and visualization library.
//!
//! Inspects raw pixel buffers produced by an image/video encoder under
//! evaluation: parses uncompressed PPM output, reduces it to per-column
//! statistics in several color spaces, detects periodic (macroblock-aligned)
//! bias, and renders diagnostic PNGs such as luma-difference heatmaps.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artifact_eval::{BandingReport, RasterImage, MACROBLOCK_PERIOD};
//!
//! let reference = RasterImage::read("frame.ref.ppm")?;
//! let test = RasterImage::read("frame_q30.ppm")?;
//!
//! let report = BandingReport::analyze(&reference, &test, MACROBLOCK_PERIOD)?;
//! let luma = report.channel(artifact_eval::Channel::Luma).unwrap();
//! println!("phase_rms = {:.4}", luma.periodicity.as_ref().unwrap().phase_rms);
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`ppm`]: Binary PPM (P6) reading and writing
//! - [`colorspace`]: Fixed-point luma/chroma conversion and channel dispatch
//! - [`column`]: Per-column mean statistics
//! - [`periodicity`]: Series statistics and phase-bucketed bias detection
//! - [`png`]: Minimal PNG serialization for visualization output
//! - [`diff`]: Luma-difference heatmaps
//! - [`metrics`]: PSNR between comparable rasters
//! - [`analysis`]: End-to-end banding reports (JSON/CSV)
//! - [`pattern`]: Deterministic synthetic test images

pub mod analysis;
pub mod colorspace;
pub mod column;
pub mod diff;
pub mod error;
pub mod metrics;
pub mod pattern;
pub mod periodicity;
pub mod png;
pub mod ppm;

// Re-export commonly used types
pub use analysis::{BandingReport, ChannelDiff, MACROBLOCK_PERIOD};
pub use colorspace::Channel;
pub use diff::{diff_heatmap, diff_luma_gray};
pub use error::{Error, Result};
pub use metrics::Psnr;
pub use pattern::TestPattern;
pub use periodicity::{PeriodicityReport, SeriesStats};
pub use ppm::RasterImage;
