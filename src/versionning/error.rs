use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid production version format: '{0}' (expected vMAJOR.MINOR.PATCH)")]
    InvalidProductionVersion(String),

    #[error("Invalid beta version format: '{0}' (expected vMAJOR.MINOR.PATCH-beta.N)")]
    InvalidBetaVersion(String),

    #[error("Invalid release level: '{0}'. Must be one of patch, minor or major")]
    InvalidReleaseLevel(String),

    #[error("Invalid pre-release version: '{0}' is not a pre-release")]
    InvalidPreReleaseState(String),

    #[error("Version overflow: '{0}' cannot be incremented any further")]
    VersionOverflow(String),
}
