//! Content inspection - type sniffing and image header decoding

mod mime;
mod png;

pub use mime::*;
pub use png::*;

use std::path::Path;

/// Pixel size of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// What the validators need to know about a file's content
pub trait Inspector {
    /// Content type determined from the file bytes, never from its name
    fn detect_mime(&self, path: &Path) -> Option<&'static str>;

    /// Dimensions of a recognised image
    fn decode_dimensions(&self, path: &Path) -> Option<Dimensions>;
}

/// Inspector reading file headers straight from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileInspector;

impl Inspector for FileInspector {
    fn detect_mime(&self, path: &Path) -> Option<&'static str> {
        match sniff_file(path) {
            Ok(mime) => mime,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unable to sniff content type");
                None
            }
        }
    }

    fn decode_dimensions(&self, path: &Path) -> Option<Dimensions> {
        match png_dimensions(path) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unable to read image header");
                None
            }
        }
    }
}
