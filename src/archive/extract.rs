//! Archive extraction

use super::{ArchiveError, ArchiveType};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::Path;

/// Unpack `archive_path` into `target_dir`.
///
/// Entries whose paths would land outside `target_dir` are skipped, as are
/// tar symlinks and hard links.
pub fn extract_archive(
    archive_type: ArchiveType,
    archive_path: &Path,
    target_dir: &Path,
) -> Result<(), ArchiveError> {
    match archive_type {
        ArchiveType::Zip => extract_zip(archive_path, target_dir),
        ArchiveType::TarGz => extract_tar_gz(archive_path, target_dir),
    }
}

fn extract_tar_gz(archive_path: &Path, target_dir: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive_path)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_type = entry.header().entry_type();
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            tracing::warn!(
                entry = %entry.path_bytes().escape_ascii(),
                "skipping link entry in tar archive"
            );
            continue;
        }

        if !entry.unpack_in(target_dir)? {
            tracing::warn!(
                entry = %entry.path_bytes().escape_ascii(),
                "skipping tar entry outside the package root"
            );
        }
    }

    Ok(())
}

fn extract_zip(archive_path: &Path, target_dir: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let outpath = match entry.enclosed_name() {
            Some(path) => target_dir.join(path),
            None => {
                tracing::warn!(entry = entry.name(), "skipping zip entry outside the package root");
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&outpath)?;
        std::io::copy(&mut entry, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // directories keep default modes so later entries can still be written
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode & 0o777))?;
            }
        }
    }

    Ok(())
}
