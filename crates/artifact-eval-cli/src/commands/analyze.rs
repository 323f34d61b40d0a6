//! Banding analysis command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use artifact_eval::{BandingReport, Channel, RasterImage};

pub fn run(
    reference: PathBuf,
    tests: Vec<PathBuf>,
    period: u32,
    json: Option<PathBuf>,
    csv: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ref_img = RasterImage::read(&reference)
        .with_context(|| format!("Failed to read {}", reference.display()))?;
    if verbose {
        eprintln!(
            "reference: {} ({}x{})",
            reference.display(),
            ref_img.width(),
            ref_img.height()
        );
    }

    for out in [&json, &csv] {
        if let Some(path) = out {
            if tests.len() > 1 && !path.is_dir() {
                bail!("{} must be a directory when analyzing multiple tests", path.display());
            }
        }
    }

    let reports: Vec<Result<BandingReport>> = tests
        .par_iter()
        .map(|path| {
            let test_img = RasterImage::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut report = BandingReport::analyze(&ref_img, &test_img, period)
                .with_context(|| format!("Analysis failed for {}", path.display()))?;
            report.reference = reference.display().to_string();
            report.test = path.display().to_string();
            Ok(report)
        })
        .collect();

    for (path, result) in tests.iter().zip(reports) {
        let report = result?;
        print_report(&report);

        if let Some(base) = &json {
            let out = resolve_output(base, path, "banding.json");
            report
                .write_json(&out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            if verbose {
                eprintln!("wrote {}", out.display());
            }
        }
        if let Some(base) = &csv {
            let out = resolve_output(base, path, "series.csv");
            report
                .write_series_csv(&out)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            if verbose {
                eprintln!("wrote {}", out.display());
            }
        }
    }

    Ok(())
}

/// `base` itself when it is a plain file target; otherwise a per-test file
/// inside the `base` directory.
fn resolve_output(base: &Path, test: &Path, suffix: &str) -> PathBuf {
    if base.is_dir() {
        let stem = test
            .file_stem()
            .map_or_else(|| "out".to_string(), |s| s.to_string_lossy().into_owned());
        base.join(format!("{stem}.{suffix}"))
    } else {
        base.to_path_buf()
    }
}

fn print_report(report: &BandingReport) {
    println!("== {} ==", report.test);
    println!(
        "size={}x{} period={}",
        report.width, report.height, report.period
    );

    for diff in &report.channels {
        let phase = diff
            .periodicity
            .as_ref()
            .map_or(String::new(), |p| format!("  phase_rms={:.4}", p.phase_rms));
        println!(
            "{:<2} (test - ref col mean): mean={:+.3} rms={:.3} min={:+.3} max={:+.3}{}",
            diff.channel, diff.stats.mean, diff.stats.rms, diff.stats.min, diff.stats.max, phase
        );
    }

    if let Some(luma) = report.channel(Channel::Luma) {
        if let Some(p) = &luma.periodicity {
            println!("phase means (x % {}):", p.period);
            let line: Vec<String> = p.phase_means.iter().map(|x| format!("{x:+.3}")).collect();
            println!(" {}", line.join(" "));
        }
    }
    println!();
}
