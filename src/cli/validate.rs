//! Validate command implementation

use super::{CliError, Report};
use crate::manifest::load_manifest;
use crate::package::validate_package;
use std::path::Path;

/// Validate a package that is already unpacked at `dir`
pub fn validate_directory(dir: &Path) -> Result<Report, CliError> {
    if !dir.is_dir() {
        return Err(CliError::NotADirectory(dir.to_path_buf()));
    }

    let outcome = validate_package(dir);
    let manifest = match outcome {
        Ok(()) => load_manifest(dir),
        Err(_) => None,
    };

    Ok(Report::new(dir, None, outcome, manifest.as_ref()))
}
