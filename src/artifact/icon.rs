//! Icon validation

use super::require_file;
use crate::error::ValidationError;
use crate::inspect::{FileInspector, Inspector, MIME_PNG};
use std::path::Path;

/// Conventional icon file name inside a package
pub const ICON_FILE: &str = "icon.png";

/// Required icon edge length in pixels
pub const ICON_SIZE: u32 = 256;

/// Validate the icon at `dir/file_name` reading headers from disk
pub fn validate_icon(dir: &Path, file_name: &str) -> Result<(), ValidationError> {
    validate_icon_with(dir, file_name, &FileInspector)
}

/// Validate the icon: present, sniffed as PNG, exactly 256x256
pub fn validate_icon_with<I: Inspector + ?Sized>(
    dir: &Path,
    file_name: &str,
    inspector: &I,
) -> Result<(), ValidationError> {
    let path = require_file(dir, file_name)?;

    let mime = inspector.detect_mime(&path);
    if mime != Some(MIME_PNG) {
        tracing::debug!(file = file_name, ?mime, "icon is not a PNG");
        return Err(ValidationError::invalid_mime(file_name, MIME_PNG));
    }

    match inspector.decode_dimensions(&path) {
        Some(dims) if dims.width == ICON_SIZE && dims.height == ICON_SIZE => Ok(()),
        dims => {
            tracing::debug!(file = file_name, ?dims, "icon has wrong dimensions");
            Err(ValidationError::invalid_image_size(
                file_name, ICON_SIZE, ICON_SIZE,
            ))
        }
    }
}
