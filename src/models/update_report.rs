use std::path::PathBuf;
use serde::Serialize;

/// Outcome of stamping one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// File that was processed
    pub path: PathBuf,
    /// Number of lines whose text changed
    pub lines_rewritten: usize,
    /// Whether the file was written back
    pub changed: bool,
}
