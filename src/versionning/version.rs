use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::VersionError;

pub const BETA_LABEL: &str = "beta";

lazy_static! {
    static ref PRODUCTION_VERSION: Regex = Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").unwrap();
    static ref BETA_VERSION: Regex = Regex::new(r"^v(\d+)\.(\d+)\.(\d+)-beta\.(\d+)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseLevel {
    Patch,
    Minor,
    Major,
}

impl ReleaseLevel {
    pub const ALLOWED: [&'static str; 3] = ["patch", "minor", "major"];
}

impl FromStr for ReleaseLevel {
    type Err = VersionError;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level {
            "patch" => Ok(ReleaseLevel::Patch),
            "minor" => Ok(ReleaseLevel::Minor),
            "major" => Ok(ReleaseLevel::Major),
            other => Err(VersionError::InvalidReleaseLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub label: String,
    pub iteration: u64,
}

/// A single version point, either a production release (`v1.2.3`) or a
/// beta of an upcoming one (`v1.2.3-beta.4`).
///
/// Values are never mutated: every increment returns a new `Version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<PreRelease>,
}

fn capture_number(captures: &Captures, index: usize) -> Option<u64> {
    captures.get(index)?.as_str().parse::<u64>().ok()
}

fn bump(value: u64, version: &Version) -> Result<u64, VersionError> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::VersionOverflow(version.to_string()))
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    pub fn beta(major: u64, minor: u64, patch: u64, iteration: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Some(PreRelease {
                label: BETA_LABEL.to_string(),
                iteration,
            }),
        }
    }

    pub fn parse_production_version(version: &str) -> Result<Version, VersionError> {
        let invalid = || VersionError::InvalidProductionVersion(version.to_string());
        let captures = PRODUCTION_VERSION.captures(version).ok_or_else(invalid)?;

        let major = capture_number(&captures, 1).ok_or_else(invalid)?;
        let minor = capture_number(&captures, 2).ok_or_else(invalid)?;
        let patch = capture_number(&captures, 3).ok_or_else(invalid)?;
        Ok(Version::new(major, minor, patch))
    }

    pub fn parse_beta_version(version: &str) -> Result<Version, VersionError> {
        let invalid = || VersionError::InvalidBetaVersion(version.to_string());
        let captures = BETA_VERSION.captures(version).ok_or_else(invalid)?;

        let major = capture_number(&captures, 1).ok_or_else(invalid)?;
        let minor = capture_number(&captures, 2).ok_or_else(invalid)?;
        let patch = capture_number(&captures, 3).ok_or_else(invalid)?;
        let iteration = capture_number(&captures, 4)
            .filter(|iteration| *iteration >= 1)
            .ok_or_else(invalid)?;
        Ok(Version::beta(major, minor, patch, iteration))
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Compares only major, minor and patch. Pre-release fields are ignored,
    /// so two versions with the same core are never higher than each other.
    pub fn is_higher_than(&self, other: &Version) -> bool {
        (self.major, self.minor, self.patch) > (other.major, other.minor, other.patch)
    }

    pub fn increment_major(&self) -> Result<Version, VersionError> {
        Ok(Version::new(bump(self.major, self)?, 0, 0))
    }

    pub fn increment_minor(&self) -> Result<Version, VersionError> {
        Ok(Version::new(self.major, bump(self.minor, self)?, 0))
    }

    pub fn increment_patch(&self) -> Result<Version, VersionError> {
        Ok(Version::new(self.major, self.minor, bump(self.patch, self)?))
    }

    pub fn increment(&self, level: ReleaseLevel) -> Result<Version, VersionError> {
        match level {
            ReleaseLevel::Major => self.increment_major(),
            ReleaseLevel::Minor => self.increment_minor(),
            ReleaseLevel::Patch => self.increment_patch(),
        }
    }

    pub fn increment_by_type(&self, level: &str) -> Result<Version, VersionError> {
        self.increment(level.parse()?)
    }

    pub fn increment_pre_release(&self) -> Result<Version, VersionError> {
        match &self.pre_release {
            Some(pre_release) => Ok(Version {
                pre_release: Some(PreRelease {
                    label: pre_release.label.clone(),
                    iteration: bump(pre_release.iteration, self)?,
                }),
                ..self.clone()
            }),
            None => Err(VersionError::InvalidPreReleaseState(self.to_string())),
        }
    }

    pub fn to_beta(&self) -> Version {
        Version::beta(self.major, self.minor, self.patch, 1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}.{}", pre_release.label, pre_release.iteration)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_production_version() {
        assert_eq!(
            Version::parse_production_version("v1.2.3").unwrap(),
            Version::new(1, 2, 3)
        );
        assert_eq!(
            Version::parse_production_version("v10.0.42").unwrap(),
            Version::new(10, 0, 42)
        );

        for invalid in [
            "1.2.3",
            "v1.2",
            "v1.2.3.4",
            "v1.2.3-beta.1",
            " v1.2.3",
            "v1.2.3 ",
            "va.b.c",
            "",
        ] {
            assert_eq!(
                Version::parse_production_version(invalid),
                Err(VersionError::InvalidProductionVersion(invalid.to_string())),
                "{} should be rejected",
                invalid
            );
        }
    }

    #[test]
    fn test_parse_large_components() {
        assert_eq!(
            Version::parse_production_version("v4294967296.0.0").unwrap(),
            Version::new(4_294_967_296, 0, 0)
        );
        assert_eq!(
            Version::parse_beta_version("v0.0.1-beta.4294967296").unwrap(),
            Version::beta(0, 0, 1, 4_294_967_296)
        );

        // Digits past u64::MAX match the grammar but cannot be represented.
        assert!(matches!(
            Version::parse_production_version("v18446744073709551616.0.0"),
            Err(VersionError::InvalidProductionVersion(_))
        ));
    }

    #[test]
    fn test_parse_beta_version_rejects_iteration_zero() {
        assert_eq!(
            Version::parse_beta_version("v1.0.0-beta.0"),
            Err(VersionError::InvalidBetaVersion("v1.0.0-beta.0".to_string()))
        );
    }

    #[test]
    fn test_parse_beta_version() {
        let version = Version::parse_beta_version("v1.2.3-beta.4").unwrap();
        assert_eq!(version, Version::beta(1, 2, 3, 4));
        assert!(version.is_pre_release());
        assert_eq!(version.pre_release.unwrap().label, "beta");

        for invalid in [
            "v1.2.3",
            "v1.2.3-beta",
            "v1.2.3-alpha.1",
            "v1.2.3-beta.1.2",
            "1.2.3-beta.1",
            "invalid",
        ] {
            assert_eq!(
                Version::parse_beta_version(invalid),
                Err(VersionError::InvalidBetaVersion(invalid.to_string())),
                "{} should be rejected",
                invalid
            );
        }
    }

    #[test]
    fn test_display_matches_parse_grammar() {
        for raw in ["v0.0.0", "v1.2.3", "v12.0.7"] {
            let version = Version::parse_production_version(raw).unwrap();
            assert_eq!(version.to_string(), raw);
        }
        for raw in ["v0.0.0-beta.1", "v1.3.0-beta.5", "v3.0.0-beta.17"] {
            let version = Version::parse_beta_version(raw).unwrap();
            assert_eq!(version.to_string(), raw);
        }
    }

    #[test]
    fn test_is_higher_than() {
        let base = Version::new(1, 2, 3);

        assert!(Version::new(2, 0, 0).is_higher_than(&base));
        assert!(Version::new(1, 3, 0).is_higher_than(&base));
        assert!(Version::new(1, 2, 4).is_higher_than(&base));

        assert!(!Version::new(0, 9, 9).is_higher_than(&base));
        assert!(!Version::new(1, 1, 9).is_higher_than(&base));
        assert!(!Version::new(1, 2, 2).is_higher_than(&base));
    }

    #[test]
    fn test_is_higher_than_ignores_pre_release() {
        let production = Version::new(1, 2, 3);
        let beta = Version::beta(1, 2, 3, 7);

        assert!(!production.is_higher_than(&beta));
        assert!(!beta.is_higher_than(&production));
        assert!(!production.is_higher_than(&production));
    }

    #[test]
    fn test_increments_reset_lower_components() {
        let version = Version::beta(1, 2, 3, 4);

        assert_eq!(version.increment_major().unwrap(), Version::new(2, 0, 0));
        assert_eq!(version.increment_minor().unwrap(), Version::new(1, 3, 0));
        assert_eq!(version.increment_patch().unwrap(), Version::new(1, 2, 4));

        for next in [
            version.increment_major().unwrap(),
            version.increment_minor().unwrap(),
            version.increment_patch().unwrap(),
        ] {
            assert!(next.is_higher_than(&version));
            assert!(!next.is_pre_release());
        }
    }

    #[test]
    fn test_increments_past_u32_range() {
        let version = Version::new(u32::MAX as u64, u32::MAX as u64, u32::MAX as u64);

        assert_eq!(
            version.increment_patch().unwrap().to_string(),
            "v4294967295.4294967295.4294967296"
        );
        assert_eq!(
            version.increment_minor().unwrap().to_string(),
            "v4294967295.4294967296.0"
        );
        assert_eq!(version.increment_major().unwrap().to_string(), "v4294967296.0.0");
    }

    #[test]
    fn test_increments_fail_on_overflow() {
        let version = Version::new(u64::MAX, u64::MAX, u64::MAX);
        let overflow = || VersionError::VersionOverflow(version.to_string());

        assert_eq!(version.increment_major(), Err(overflow()));
        assert_eq!(version.increment_minor(), Err(overflow()));
        assert_eq!(version.increment_patch(), Err(overflow()));

        let beta = Version::beta(1, 0, 0, u64::MAX);
        assert_eq!(
            beta.increment_pre_release(),
            Err(VersionError::VersionOverflow(beta.to_string()))
        );
    }

    #[test]
    fn test_increment_by_type() {
        let version = Version::new(1, 2, 3);

        assert_eq!(version.increment_by_type("major").unwrap(), Version::new(2, 0, 0));
        assert_eq!(version.increment_by_type("minor").unwrap(), Version::new(1, 3, 0));
        assert_eq!(version.increment_by_type("patch").unwrap(), Version::new(1, 2, 4));

        let err = version.increment_by_type("Major").unwrap_err();
        assert_eq!(err, VersionError::InvalidReleaseLevel("Major".to_string()));
        assert!(err.to_string().contains("patch, minor or major"));
    }

    #[test]
    fn test_increment_pre_release() {
        let version = Version::beta(1, 3, 0, 4);
        assert_eq!(version.increment_pre_release().unwrap(), Version::beta(1, 3, 0, 5));

        assert_eq!(
            Version::new(1, 3, 0).increment_pre_release(),
            Err(VersionError::InvalidPreReleaseState("v1.3.0".to_string()))
        );
    }

    #[test]
    fn test_to_beta() {
        assert_eq!(Version::new(2, 0, 0).to_beta(), Version::beta(2, 0, 0, 1));
        assert_eq!(Version::beta(2, 0, 0, 9).to_beta().to_string(), "v2.0.0-beta.1");
    }

    #[test]
    fn test_release_level_from_str() {
        assert_eq!("patch".parse::<ReleaseLevel>().unwrap(), ReleaseLevel::Patch);
        assert_eq!("minor".parse::<ReleaseLevel>().unwrap(), ReleaseLevel::Minor);
        assert_eq!("major".parse::<ReleaseLevel>().unwrap(), ReleaseLevel::Major);
        assert!("".parse::<ReleaseLevel>().is_err());
        assert!(" patch".parse::<ReleaseLevel>().is_err());
    }
}
