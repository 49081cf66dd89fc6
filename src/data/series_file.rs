// src/data/series_file.rs

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads a price or return series from a file.
pub fn load_series(path: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read series file {}", path.display()))?;
    let series =
        parse_series(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("loaded {} values from {}", series.len(), path.display());
    Ok(series)
}

/// Reads a series from any reader (stdin in the CLI).
pub fn read_series<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).context("Failed to read series")?;
    parse_series(&text)
}

/// Parses a JSON array of numbers (`null` reads as NaN) or plain numbers
/// separated by whitespace, commas or semicolons. `#` starts a comment line.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim_start();

    if trimmed.starts_with('[') {
        let values: Vec<Option<f64>> =
            serde_json::from_str(trimmed).context("Invalid JSON series")?;
        return Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect());
    }

    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
        {
            let value = token
                .parse::<f64>()
                .map_err(|_| anyhow!("Invalid number '{}' on line {}", token, line_no + 1))?;
            values.push(value);
        }
    }

    Ok(values)
}
