//! BOSH release version parsing
//!
//! Accepted grammar is `MAJOR[.MINOR][+dev.PATCH]`; missing parts are zero.
//! The floating `latest` tag is not a version and is handled by the caller.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::AdapterError;

/// Floating release tag that is never version-ordered
pub const LATEST: &str = "latest";

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\+dev\.(\d+))?$").expect("version regex is valid")
});

/// A parsed release version, ordered by (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn is_latest(version: &str) -> bool {
        version == LATEST
    }
}

impl FromStr for ReleaseVersion {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AdapterError::InvalidReleaseVersion(s.to_string());
        let captures = VERSION_REGEX.captures(s).ok_or_else(invalid)?;

        let component = |index: usize| -> Result<u64, AdapterError> {
            match captures.get(index) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}+dev.{}", self.major, self.minor, self.patch)
    }
}
