//! File-level artifact checks - icon and readme

mod icon;
mod readme;

pub use icon::*;
pub use readme::*;

use crate::error::ValidationError;
use std::path::{Path, PathBuf};

/// Resolve `file_name` under `dir`, failing with `FileNotFound` unless it is a
/// regular file. Symlinks are not followed.
pub(crate) fn require_file(dir: &Path, file_name: &str) -> Result<PathBuf, ValidationError> {
    let path = dir.join(file_name);
    match path.symlink_metadata() {
        Ok(meta) if meta.file_type().is_file() => Ok(path),
        Ok(_) => {
            tracing::debug!(path = %path.display(), "not a regular file");
            Err(ValidationError::file_not_found(file_name))
        }
        Err(_) => Err(ValidationError::file_not_found(file_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;

    #[test]
    fn regular_file_resolves() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# demo").unwrap();
        assert_eq!(
            require_file(dir.path(), "README.md").unwrap(),
            dir.path().join("README.md")
        );
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("README.md")).unwrap();
        let err = require_file(dir.path(), "README.md").unwrap_err();
        assert_eq!(err.kind, ErrorKind::FileNotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_outside_file_is_not_followed() {
        let outside = tempfile::tempdir().unwrap();
        let host = outside.path().join("host.json");
        fs::write(&host, "{}").unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(&host, dir.path().join("manifest.json")).unwrap();

        let err = require_file(dir.path(), "manifest.json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::FileNotFound);
        assert_eq!(err.subject, "manifest.json");
    }
}
