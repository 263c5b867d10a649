use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use regex::{NoExpand, Regex};
use crate::models::{ReleaseVersion, UpdateReport};
use crate::services::line_rewriter::{rewrite_file, rewrite_lines, LineRewriter};
use crate::utils::error::Result;

/// Line declaring the full library version
pub const LIB_VERSION_MARKER: &str = "set(LEXER_LIB_VERSION";
/// Line declaring the shared-object version
pub const LIB_SOVERSION_MARKER: &str = "set(LEXER_LIB_SOVERSION";
/// Opening of the CMake project declaration
pub const PROJECT_MARKER: &str = "project(";
/// Token that identifies the version line inside the project declaration
pub const PROJECT_VERSION_TOKEN: &str = "VERSION";

static DOTTED_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").expect("triple pattern is valid"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"));

/// Rewrites the version fields of a build manifest (`CMakeLists.txt`)
#[derive(Debug, Clone)]
pub struct ManifestVersionUpdater {
    version: String,
    major: String,
    inside_project_declaration: bool,
}

impl ManifestVersionUpdater {
    pub fn new(version: &ReleaseVersion) -> Self {
        Self {
            version: version.to_string(),
            major: version.major().to_string(),
            inside_project_declaration: false,
        }
    }

    /// Stamp `version` into the manifest at `path`
    pub fn update(version: &ReleaseVersion, path: &Path) -> Result<UpdateReport> {
        log::debug!("Stamping {} into manifest {}", version, path.display());
        let report = rewrite_file(path, Self::new(version))?;
        if !report.changed {
            log::warn!("No version fields changed in {}", path.display());
        }
        Ok(report)
    }

    /// Stamp `version` into manifest text without touching the file system
    pub fn rewrite(contents: &str, version: &ReleaseVersion) -> String {
        rewrite_lines(contents, Self::new(version)).contents
    }
}

impl LineRewriter for ManifestVersionUpdater {
    fn rewrite_line<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        if line.contains(LIB_VERSION_MARKER) {
            DOTTED_TRIPLE.replace(line, NoExpand(&self.version))
        } else if line.contains(LIB_SOVERSION_MARKER) {
            INTEGER.replace(line, NoExpand(&self.major))
        } else if line.contains(PROJECT_MARKER) {
            self.inside_project_declaration = true;
            Cow::Borrowed(line)
        } else if self.inside_project_declaration && line.contains(PROJECT_VERSION_TOKEN) {
            self.inside_project_declaration = false;
            DOTTED_TRIPLE.replace(line, NoExpand(&self.version))
        } else {
            Cow::Borrowed(line)
        }
    }
}
