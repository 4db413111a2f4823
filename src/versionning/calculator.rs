use serde::Serialize;

use super::{Version, VersionError};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct NextVersions {
    pub next_production_version: String,
    pub next_beta_version: String,
}

/// Bumps the production line by `release_level` and works out the beta that
/// follows it.
///
/// The beta line restarts at iteration 1 when the bumped production version is
/// ahead of the current beta's core, and otherwise keeps its core and moves to
/// the next iteration. Missing inputs default to `v0.0.0` and `v0.0.0-beta.1`.
pub fn calculate_versions(
    release_level: &str,
    latest_production_version: Option<&str>,
    latest_beta_version: Option<&str>,
) -> Result<NextVersions, VersionError> {
    let production = match latest_production_version {
        Some(version) => Version::parse_production_version(version)?,
        None => Version::new(0, 0, 0),
    };
    let new_production = production.increment_by_type(release_level)?;

    let beta = match latest_beta_version {
        Some(version) => Version::parse_beta_version(version)?,
        None => Version::beta(0, 0, 0, 1),
    };
    let new_beta = if new_production.is_higher_than(&beta) {
        new_production.to_beta()
    } else {
        beta.increment_pre_release()?
    };

    Ok(NextVersions {
        next_production_version: new_production.to_string(),
        next_beta_version: new_beta.to_string(),
    })
}
