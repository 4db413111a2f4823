use anyhow::Result;

use super::{
    ActionRuntime, LATEST_BETA_VERSION_INPUT, LATEST_PRODUCTION_VERSION_INPUT,
    RELEASE_LEVEL_INPUT,
};
use crate::cli::{Args, OutputFormat};
use crate::utils::append_output;
use crate::versionning::NextVersions;

pub struct CliRuntime {
    args: Args,
}

impl CliRuntime {
    pub fn new(args: Args) -> Self {
        CliRuntime { args }
    }

    /// Prints the calculated versions when running with `--format json`.
    pub fn finish(&self, versions: &NextVersions) -> Result<()> {
        if self.args.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(versions)?);
        }
        Ok(())
    }
}

/// Escapes a workflow command value so it always stays on one line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

impl ActionRuntime for CliRuntime {
    fn get_input(&self, name: &str) -> String {
        let value = match name {
            RELEASE_LEVEL_INPUT => &self.args.release_level,
            LATEST_PRODUCTION_VERSION_INPUT => &self.args.latest_production_version,
            LATEST_BETA_VERSION_INPUT => &self.args.latest_beta_version,
            _ => return String::new(),
        };
        value.as_deref().unwrap_or_default().trim().to_string()
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match (self.args.format, &self.args.output_file) {
            // JSON mode reports everything at once from `finish`.
            (OutputFormat::Json, _) => {}
            (OutputFormat::Github, Some(output_file)) => append_output(output_file, name, value)?,
            (OutputFormat::Github, None) => println!("{}={}", name, value),
        }
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        println!("{}", error_command(message));
    }
}
