use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use regex::{NoExpand, Regex};
use crate::models::{ReleaseVersion, UpdateReport};
use crate::services::line_rewriter::{rewrite_file, rewrite_lines, split_terminator, LineRewriter};
use crate::utils::error::Result;

/// Version macro definition
pub const VERSION_MACRO_MARKER: &str = "#define LEXER_VERSION";
/// Opening of the anonymous enum holding the numeric components
pub const ENUM_BLOCK_MARKER: &str = "enum {";
pub const MAJOR_CONSTANT: &str = "LEXER_VERSION_MAJOR";
pub const MINOR_CONSTANT: &str = "LEXER_VERSION_MINOR";
pub const REVISION_CONSTANT: &str = "LEXER_VERSION_REVISION";

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"));

/// Rewrites the version macro and enum constants of `version.h`
#[derive(Debug, Clone)]
pub struct HeaderVersionUpdater {
    version: String,
    components: [String; 3],
    // Never reset once set; the constants live in the file's only enum block
    inside_enum_block: bool,
}

impl HeaderVersionUpdater {
    pub fn new(version: &ReleaseVersion) -> Self {
        Self {
            version: version.to_string(),
            components: version.components().map(str::to_string),
            inside_enum_block: false,
        }
    }

    /// Stamp `version` into the header at `path`
    pub fn update(version: &ReleaseVersion, path: &Path) -> Result<UpdateReport> {
        log::debug!("Stamping {} into header {}", version, path.display());
        let report = rewrite_file(path, Self::new(version))?;
        if !report.changed {
            log::warn!("No version fields changed in {}", path.display());
        }
        Ok(report)
    }

    /// Stamp `version` into header text without touching the file system
    pub fn rewrite(contents: &str, version: &ReleaseVersion) -> String {
        rewrite_lines(contents, Self::new(version)).contents
    }

    fn macro_definition(&self, terminator: &str) -> String {
        format!("{VERSION_MACRO_MARKER} \"{}\"{terminator}", self.version)
    }
}

/// True when the line defines the version macro itself and not a longer
/// identifier such as the `LEXER_VERSION_H` include guard
fn is_version_macro(line: &str) -> bool {
    line.match_indices(VERSION_MACRO_MARKER).any(|(at, marker)| {
        line[at + marker.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace)
    })
}

impl LineRewriter for HeaderVersionUpdater {
    fn rewrite_line<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        if is_version_macro(line) {
            let (_, terminator) = split_terminator(line);
            return Cow::Owned(self.macro_definition(terminator));
        }

        if line.contains(ENUM_BLOCK_MARKER) {
            self.inside_enum_block = true;
            return Cow::Borrowed(line);
        }

        if !self.inside_enum_block {
            return Cow::Borrowed(line);
        }

        let trimmed = line.trim();
        let component = if trimmed.starts_with(MAJOR_CONSTANT) {
            &self.components[0]
        } else if trimmed.starts_with(MINOR_CONSTANT) {
            &self.components[1]
        } else if trimmed.starts_with(REVISION_CONSTANT) {
            &self.components[2]
        } else {
            return Cow::Borrowed(line);
        };

        INTEGER.replace(line, NoExpand(component))
    }
}
