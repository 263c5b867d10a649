// File system utilities

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::utils::error::{ReleaseError, Result};

/// Replace the contents of `path` in one step.
///
/// The data goes to a temporary file in the same directory, which is then
/// renamed over the target. The target's permissions are carried over.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)
        .map_err(|e| ReleaseError::file_access(path, e))?
        .permissions();

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ReleaseError::file_access(dir, e))?;
    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| ReleaseError::file_access(temp.path(), e))?;
    fs::set_permissions(temp.path(), permissions)
        .map_err(|e| ReleaseError::file_access(temp.path(), e))?;

    temp.persist(path)
        .map_err(|e| ReleaseError::file_access(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.h");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // no stray temporary files left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomically_requires_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert!(matches!(
            write_atomically(&path, b"data"),
            Err(ReleaseError::FileAccess { .. })
        ));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomically_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomically(&path, b"new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
