use anyhow::{bail, Result};

use crate::logging::{log_info, log_section, log_success, log_transition, log_warning};
use crate::versionning::{calculate_versions, NextVersions, ReleaseLevel};

pub use self::runtime::CliRuntime;

mod runtime;

pub const RELEASE_LEVEL_INPUT: &str = "release-level";
pub const LATEST_PRODUCTION_VERSION_INPUT: &str = "latest-production-version";
pub const LATEST_BETA_VERSION_INPUT: &str = "latest-beta-version";

pub const NEXT_PRODUCTION_VERSION_OUTPUT: &str = "next-production-version";
pub const NEXT_BETA_VERSION_OUTPUT: &str = "next-beta-version";

/// Where the action reads its inputs from and reports its results to.
#[cfg_attr(test, mockall::automock)]
pub trait ActionRuntime {
    /// Returns the named input, or an empty string when it is not set.
    fn get_input(&self, name: &str) -> String;
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
    fn set_failed(&mut self, message: &str);
}

/// Runs one version calculation against `runtime`.
///
/// Returns `None` after reporting the failure through `set_failed`.
pub fn run<R: ActionRuntime>(runtime: &mut R) -> Option<NextVersions> {
    match try_run(runtime) {
        Ok(versions) => Some(versions),
        Err(err) => {
            runtime.set_failed(&format!("{:#}", err));
            None
        }
    }
}

fn try_run<R: ActionRuntime>(runtime: &mut R) -> Result<NextVersions> {
    let release_level = runtime.get_input(RELEASE_LEVEL_INPUT);
    let latest_production_version = runtime.get_input(LATEST_PRODUCTION_VERSION_INPUT);
    let latest_beta_version = runtime.get_input(LATEST_BETA_VERSION_INPUT);

    if !ReleaseLevel::ALLOWED.contains(&release_level.as_str()) {
        bail!(
            "{}: '{}' invalid. Must be one of patch, minor or major",
            RELEASE_LEVEL_INPUT,
            release_level
        );
    }

    log_section(&format!("Calculating {} release", release_level));
    log_info(&format!(
        "Latest production: '{}', latest beta: '{}'",
        latest_production_version, latest_beta_version
    ));
    if latest_production_version.is_empty() {
        log_warning("No latest production version given, starting from v0.0.0");
    }
    if latest_beta_version.is_empty() {
        log_warning("No latest beta version given, starting from v0.0.0-beta.1");
    }

    let versions = calculate_versions(
        &release_level,
        non_empty(&latest_production_version),
        non_empty(&latest_beta_version),
    )?;

    log_transition(
        "Prod",
        &latest_production_version,
        &versions.next_production_version,
    );
    log_transition("Beta", &latest_beta_version, &versions.next_beta_version);

    runtime.set_output(
        NEXT_PRODUCTION_VERSION_OUTPUT,
        &versions.next_production_version,
    )?;
    runtime.set_output(NEXT_BETA_VERSION_OUTPUT, &versions.next_beta_version)?;

    log_success("Versions calculated");
    Ok(versions)
}

fn non_empty(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}
