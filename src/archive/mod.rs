//! Submitted archive handling - container detection, extraction, cleanup

mod cleanup;
mod extract;

pub use cleanup::*;
pub use extract::*;

use crate::inspect::{MIME_GZIP, MIME_ZIP, sniff_file};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("File defined by input was not found.")]
    NotFound(PathBuf),

    #[error("File defined by input must be a ZIP file.")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read zip: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Container formats accepted for submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    Zip,
    TarGz,
}

impl ArchiveType {
    /// Identify the container from its leading bytes
    pub fn detect(path: &Path) -> Result<Option<Self>, ArchiveError> {
        Ok(match sniff_file(path)? {
            Some(MIME_ZIP) => Some(Self::Zip),
            Some(MIME_GZIP) => Some(Self::TarGz),
            _ => None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }
}

/// An archive unpacked into a private temporary directory.
///
/// The directory is removed when the value is dropped, whichever way the
/// validation run ends.
#[derive(Debug)]
pub struct ExtractedPackage {
    dir: TempDir,
    archive_type: ArchiveType,
}

impl ExtractedPackage {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn archive_type(&self) -> ArchiveType {
        self.archive_type
    }
}

impl Drop for ExtractedPackage {
    fn drop(&mut self) {
        let root = self.dir.path();
        match remove_dir_all_force(root) {
            Ok(()) => tracing::debug!(root = %root.display(), "removed extraction directory"),
            Err(e) => tracing::warn!(root = %root.display(), error = %e, "failed to remove extraction directory"),
        }
    }
}

/// Unpack `archive_path` into a fresh directory under `work_dir`
pub fn open_package(archive_path: &Path, work_dir: &Path) -> Result<ExtractedPackage, ArchiveError> {
    if !archive_path.is_file() {
        return Err(ArchiveError::NotFound(archive_path.to_path_buf()));
    }

    let archive_type = ArchiveType::detect(archive_path)?
        .ok_or_else(|| ArchiveError::UnsupportedFormat(archive_path.to_path_buf()))?;

    std::fs::create_dir_all(work_dir)?;
    let dir = tempfile::Builder::new()
        .prefix("packgate-")
        .tempdir_in(work_dir)?;
    let package = ExtractedPackage { dir, archive_type };

    tracing::info!(
        archive = %archive_path.display(),
        format = archive_type.as_str(),
        root = %package.root().display(),
        "extracting package"
    );
    extract_archive(archive_type, archive_path, package.root())?;

    Ok(package)
}

/// SHA-256 of a file as lowercase hex
pub fn file_sha256(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
