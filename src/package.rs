//! Whole-package validation over an extracted directory

use crate::artifact::{ICON_FILE, README_FILE, validate_icon_with, validate_readme};
use crate::error::ValidationError;
use crate::inspect::{FileInspector, Inspector};
use crate::manifest::{MANIFEST_FILE, validate_manifest};
use std::path::Path;

/// Validate an extracted package root with on-disk inspection
pub fn validate_package(root: &Path) -> Result<(), ValidationError> {
    validate_package_with(root, &FileInspector)
}

/// Icon, then readme, then manifest; the first failure is the result
pub fn validate_package_with<I: Inspector + ?Sized>(
    root: &Path,
    inspector: &I,
) -> Result<(), ValidationError> {
    tracing::debug!(root = %root.display(), file = ICON_FILE, "checking icon");
    validate_icon_with(root, ICON_FILE, inspector)?;

    tracing::debug!(root = %root.display(), file = README_FILE, "checking readme");
    validate_readme(root, README_FILE)?;

    tracing::debug!(root = %root.display(), file = MANIFEST_FILE, "checking manifest");
    validate_manifest(root, MANIFEST_FILE)?;

    Ok(())
}
