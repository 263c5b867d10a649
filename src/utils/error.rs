// Common error types for verstamp

use std::path::PathBuf;

/// Errors raised while stamping a release version
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    /// Version string is not a `MAJOR.MINOR.PATCH` triple
    #[error("Invalid version '{0}' (expected MAJOR.MINOR.PATCH)")]
    InvalidVersionFormat(String),

    /// Release tag variable is unset or empty
    #[error("Environment variable {0} is not set")]
    MissingTag(String),

    /// Release tag does not follow the `vMAJOR.MINOR.PATCH` convention
    #[error("Invalid release tag '{0}'")]
    InvalidTag(String),

    /// release.toml could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Target file could not be read or written
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReleaseError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Error as presented to the user on the command line
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Map a [`ReleaseError`] to a message, a hint and a process exit code
    pub fn from_release_error(err: &ReleaseError) -> Self {
        let (hint, exit_code) = match err {
            ReleaseError::InvalidVersionFormat(_) => (
                Some("Versions are three non-negative integers:\n  ✓ 1.2.3\n  ✓ 10.20.300\n  ✗ 1.2\n  ✗ v1.2.3".to_string()),
                2,
            ),
            ReleaseError::MissingTag(var) => (
                Some(format!("Export the next release tag before running:\n  {var}=v1.2.3 verstamp update")),
                2,
            ),
            ReleaseError::InvalidTag(_) => (
                Some("Release tags look like v1.2.3".to_string()),
                2,
            ),
            ReleaseError::Config(_) => (
                Some("Check the [release] table in release.toml".to_string()),
                2,
            ),
            ReleaseError::FileAccess { .. } => (None, 1),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
