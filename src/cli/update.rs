use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::models::{ReleaseTag, ReleaseVersion, UpdateReport};
use crate::services::{HeaderVersionUpdater, ManifestVersionUpdater};
use crate::utils::config::{ConfigParser, ReleaseConfig};
use crate::utils::error::{ReleaseError, Result};

/// Stamp the next release tag into both the header and the manifest
#[derive(Debug)]
pub struct UpdateCommand {
    pub tag: Option<String>,
    pub root: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub header: Option<PathBuf>,
    pub json: bool,
}

/// JSON response format for the update command
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub status: String,
    pub tag: String,
    pub version: ReleaseVersion,
    pub files: Vec<UpdateReport>,
}

impl UpdateCommand {
    /// Execute the update command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;

        let tag = match &self.tag {
            Some(tag) => ReleaseTag::parse(tag)?,
            None => ReleaseTag::from_env(&config.tag_variable)?,
        };
        let version = tag.version().clone();
        log::info!("Stamping release {} ({})", tag.as_str(), version);

        // Both targets must exist before either one is rewritten
        ensure_file(&config.header)?;
        ensure_file(&config.manifest)?;

        let files = vec![
            HeaderVersionUpdater::update(&version, &config.header)?,
            ManifestVersionUpdater::update(&version, &config.manifest)?,
        ];

        if self.json {
            let response = UpdateResponse {
                status: "success".to_string(),
                tag: tag.as_str().to_string(),
                version,
                files,
            };
            print_json(&response)?;
        } else {
            for report in &files {
                print_report(report, &version);
            }
        }

        Ok(())
    }

    fn resolve_config(&self) -> Result<ReleaseConfig> {
        let work_dir = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|e| ReleaseError::file_access(".", e))?,
        };

        let mut config = ConfigParser::load(&work_dir)?;
        if let Some(manifest) = &self.manifest {
            config = config.with_manifest(manifest);
        }
        if let Some(header) = &self.header {
            config = config.with_header(header);
        }
        Ok(config)
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| ReleaseError::file_access(path, e))?;
    if !metadata.is_file() {
        return Err(ReleaseError::file_access(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    Ok(())
}

/// Human-readable line for one stamped file
pub fn print_report(report: &UpdateReport, version: &ReleaseVersion) {
    if report.changed {
        println!(
            "Updated {} to {} ({} line(s) rewritten)",
            report.path.display(),
            version,
            report.lines_rewritten
        );
    } else {
        println!("No changes needed for {}", report.path.display());
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)
        .map_err(|e| ReleaseError::Config(format!("Failed to serialize JSON response: {e}")))?;
    println!("{json_output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn command(root: &Path, tag: &str) -> UpdateCommand {
        UpdateCommand {
            tag: Some(tag.to_string()),
            root: Some(root.to_path_buf()),
            manifest: None,
            header: None,
            json: false,
        }
    }

    #[test]
    fn test_run_rejects_bad_tag_before_reading_files() {
        let temp_dir = TempDir::new().unwrap();
        let err = command(temp_dir.path(), "1.2.3").run().unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidTag(_)));
    }

    #[test]
    fn test_run_requires_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let header_dir = temp_dir.path().join("include/lexer");
        fs::create_dir_all(&header_dir).unwrap();
        fs::write(header_dir.join("version.h"), "#define LEXER_VERSION \"1.0.0\"\n").unwrap();

        let err = command(temp_dir.path(), "v1.2.3").run().unwrap_err();

        assert!(matches!(err, ReleaseError::FileAccess { ref path, .. } if path.ends_with("CMakeLists.txt")));
        assert_eq!(
            fs::read_to_string(header_dir.join("version.h")).unwrap(),
            "#define LEXER_VERSION \"1.0.0\"\n"
        );
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let mut cmd = command(temp_dir.path(), "v1.0.0");
        cmd.header = Some(PathBuf::from("version.h"));

        let config = cmd.resolve_config().unwrap();

        assert_eq!(config.header, temp_dir.path().join("version.h"));
        assert_eq!(config.manifest, temp_dir.path().join("CMakeLists.txt"));
    }
}
