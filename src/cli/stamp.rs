use std::path::PathBuf;
use crate::cli::update::{print_json, print_report};
use crate::models::ReleaseVersion;
use crate::services::{HeaderVersionUpdater, ManifestVersionUpdater};
use crate::utils::error::Result;

/// Which kind of file a [`StampCommand`] rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampTarget {
    Manifest,
    Header,
}

/// Stamp a bare version into one file
#[derive(Debug)]
pub struct StampCommand {
    pub target: StampTarget,
    pub version: String,
    pub path: PathBuf,
    pub json: bool,
}

impl StampCommand {
    pub fn run(&self) -> Result<()> {
        // Parsed before the file is opened so a bad version never touches it
        let version: ReleaseVersion = self.version.parse()?;

        let report = match self.target {
            StampTarget::Manifest => ManifestVersionUpdater::update(&version, &self.path)?,
            StampTarget::Header => HeaderVersionUpdater::update(&version, &self.path)?,
        };

        if self.json {
            print_json(&report)
        } else {
            print_report(&report, &version);
            Ok(())
        }
    }
}
