use std::sync::LazyLock;
use regex::Regex;
use crate::models::version::ReleaseVersion;
use crate::utils::error::{ReleaseError, Result};

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+$").expect("tag pattern is valid"));

/// A release tag of the form `vMAJOR.MINOR.PATCH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    raw: String,
    version: ReleaseVersion,
}

impl ReleaseTag {
    /// Validate a tag against the naming convention
    pub fn parse(tag: &str) -> Result<Self> {
        if tag.is_empty() || !TAG_PATTERN.is_match(tag) {
            return Err(ReleaseError::InvalidTag(tag.to_string()));
        }

        let version: ReleaseVersion = tag.strip_prefix('v').unwrap_or(tag).parse()?;
        Ok(Self {
            raw: tag.to_string(),
            version,
        })
    }

    /// Read and validate the tag held by an environment variable
    pub fn from_env(variable: &str) -> Result<Self> {
        match std::env::var(variable) {
            Ok(tag) if !tag.is_empty() => Self::parse(&tag),
            _ => Err(ReleaseError::MissingTag(variable.to_string())),
        }
    }

    /// Tag exactly as given, including the `v` prefix
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn version(&self) -> &ReleaseVersion {
        &self.version
    }
}
