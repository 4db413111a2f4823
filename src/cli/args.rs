use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name=value` lines, appended to the output file when one is set
    Github,
    /// A single JSON object on stdout
    Json,
}

/// Calculates the next production and beta versions for a release.
// Every input falls back to the environment variable GitHub Actions sets for it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "LEVEL", env = "INPUT_RELEASE-LEVEL")]
    pub release_level: Option<String>,

    #[arg(long, value_name = "VERSION", env = "INPUT_LATEST-PRODUCTION-VERSION")]
    pub latest_production_version: Option<String>,

    #[arg(long, value_name = "VERSION", env = "INPUT_LATEST-BETA-VERSION")]
    pub latest_beta_version: Option<String>,

    #[arg(long, value_name = "PATH", env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Github)]
    pub format: OutputFormat,
}
