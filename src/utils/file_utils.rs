use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Appends a `name=value` record to a GitHub Actions output file, creating it if needed.
pub fn append_output(output_file: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_file)
        .with_context(|| format!("Failed to open output file {}", output_file.display()))?;

    writeln!(file, "{}={}", name, value)
        .with_context(|| format!("Failed to write output {} to {}", name, output_file.display()))?;

    Ok(())
}
