pub use self::calculator::{calculate_versions, NextVersions};
pub use self::error::VersionError;
pub use self::version::{PreRelease, ReleaseLevel, Version, BETA_LABEL};

mod calculator;
mod error;
mod version;
