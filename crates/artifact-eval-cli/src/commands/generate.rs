//! Synthetic test image command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use artifact_eval::TestPattern;

pub fn run(
    pattern: &str,
    width: u32,
    height: u32,
    output: PathBuf,
    seed: u32,
    verbose: bool,
) -> Result<()> {
    let pattern: TestPattern = pattern.parse()?;
    let img = pattern
        .render(width, height, seed)
        .with_context(|| format!("Cannot render {pattern} at {width}x{height}"))?;

    img.write(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    if verbose {
        eprintln!("wrote {} ({pattern}, {width}x{height})", output.display());
    }
    Ok(())
}
