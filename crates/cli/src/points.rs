//! Flat text files of real numbers, one per line.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Reads a point from `path`.
pub fn read(path: &Path) -> Result<Vec<f64>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading points {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing points {}", path.display()))
}

/// Parses newline-separated reals, skipping blank lines.
pub fn parse(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.trim()
                .parse::<f64>()
                .with_context(|| format!("line {}: invalid number {:?}", index + 1, line.trim()))
        })
        .collect()
}

/// Overwrites `path` with one coordinate per line in full precision.
pub fn write(path: &Path, point: &[f64]) -> Result<()> {
    fs::write(path, format(point)).with_context(|| format!("writing points {}", path.display()))
}

/// Formats each coordinate as `{:.17e}` on its own line.
pub fn format(point: &[f64]) -> String {
    point.iter().map(|x| format!("{x:.17e}\n")).collect()
}
