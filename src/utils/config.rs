// Configuration utilities and release.toml parsing

use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::utils::error::{ReleaseError, Result};

pub const CONFIG_FILE_NAME: &str = "release.toml";
pub const DEFAULT_MANIFEST_PATH: &str = "CMakeLists.txt";
pub const DEFAULT_HEADER_PATH: &str = "include/lexer/version.h";
pub const DEFAULT_TAG_VARIABLE: &str = "NEXT_RELEASE_TAG";

/// Resolved locations and settings for one release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Directory relative paths are resolved against
    pub work_dir: PathBuf,
    pub manifest: PathBuf,
    pub header: PathBuf,
    /// Environment variable holding the next release tag
    pub tag_variable: String,
}

impl ReleaseConfig {
    /// Built-in defaults rooted at `work_dir`
    pub fn defaults(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Self {
            manifest: work_dir.join(DEFAULT_MANIFEST_PATH),
            header: work_dir.join(DEFAULT_HEADER_PATH),
            tag_variable: DEFAULT_TAG_VARIABLE.to_string(),
            work_dir,
        }
    }

    /// Point the manifest at `path`, relative to the work directory
    #[must_use]
    pub fn with_manifest(mut self, path: impl AsRef<Path>) -> Self {
        self.manifest = self.work_dir.join(path);
        self
    }

    /// Point the header at `path`, relative to the work directory
    #[must_use]
    pub fn with_header(mut self, path: impl AsRef<Path>) -> Self {
        self.header = self.work_dir.join(path);
        self
    }
}

/// On-disk form of release.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReleaseToml {
    #[serde(default)]
    release: ReleaseSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReleaseSection {
    manifest: Option<PathBuf>,
    header: Option<PathBuf>,
    tag_variable: Option<String>,
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load the configuration for `work_dir`, falling back to defaults when
    /// no release.toml is present
    pub fn load<P: AsRef<Path>>(work_dir: P) -> Result<ReleaseConfig> {
        let work_dir = work_dir.as_ref();
        let config_path = work_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, work_dir.display());
            return Ok(ReleaseConfig::defaults(work_dir));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ReleaseError::Config(
                format!("Failed to read {}: {}", config_path.display(), e)
            ))?;

        Self::parse(work_dir, &content)
    }

    /// Parse release.toml contents on top of the defaults for `work_dir`
    pub fn parse(work_dir: &Path, content: &str) -> Result<ReleaseConfig> {
        let parsed: ReleaseToml = toml::from_str(content)
            .map_err(|e| ReleaseError::Config(format!("Invalid TOML syntax: {e}")))?;
        let section = parsed.release;

        let mut config = ReleaseConfig::defaults(work_dir);
        if let Some(manifest) = section.manifest {
            config = config.with_manifest(manifest);
        }
        if let Some(header) = section.header {
            config = config.with_header(header);
        }
        if let Some(tag_variable) = section.tag_variable {
            if tag_variable.trim().is_empty() {
                return Err(ReleaseError::Config("tag_variable cannot be empty".to_string()));
            }
            config.tag_variable = tag_variable;
        }

        Ok(config)
    }
}
