//! Check command implementation

use super::{CliError, Report};
use crate::archive::{file_sha256, open_package};
use crate::manifest::load_manifest;
use crate::package::validate_package;
use std::path::Path;

/// Extract a submitted archive, validate it and build the report.
///
/// The extraction directory is gone by the time this returns.
pub fn check_package(archive_path: &Path, work_dir: &Path) -> Result<Report, CliError> {
    let package = open_package(archive_path, work_dir)?;
    let sha256 = file_sha256(archive_path)?;

    let outcome = validate_package(package.root());
    let manifest = match outcome {
        Ok(()) => load_manifest(package.root()),
        Err(_) => None,
    };

    let report = Report::new(archive_path, Some(sha256), outcome, manifest.as_ref());
    tracing::info!(
        archive = %archive_path.display(),
        valid = report.valid,
        "package checked"
    );
    Ok(report)
}
