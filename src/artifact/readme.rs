//! Readme validation

use super::require_file;
use crate::error::ValidationError;
use std::path::Path;

/// Conventional readme file name inside a package
pub const README_FILE: &str = "README.md";

/// Only existence is checked, content is free-form
pub fn validate_readme(dir: &Path, file_name: &str) -> Result<(), ValidationError> {
    require_file(dir, file_name).map(|_| ())
}
