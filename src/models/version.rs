use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use crate::utils::error::ReleaseError;

/// A strict `MAJOR.MINOR.PATCH` release version.
///
/// Components are kept as the validated digit strings they were written
/// with, so `01.2.3` is stamped as `01.2.3` and components of any length are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReleaseVersion {
    major: String,
    minor: String,
    patch: String,
}

impl ReleaseVersion {
    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Components in `[major, minor, patch]` order
    pub fn components(&self) -> [&str; 3] {
        [&self.major, &self.minor, &self.patch]
    }
}

impl FromStr for ReleaseVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReleaseError::InvalidVersionFormat(s.to_string());

        let parts: Vec<&str> = s.split('.').collect();
        let &[major, minor, patch] = parts.as_slice() else {
            return Err(invalid());
        };

        let component = |part: &str| -> Result<String, ReleaseError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            Ok(part.to_string())
        };

        Ok(Self {
            major: component(major)?,
            minor: component(minor)?,
            patch: component(patch)?,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
