//! PNG header decoding

use super::Dimensions;
use super::mime::PNG_MAGIC;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Signature, IHDR length and tag, width, height
const HEADER_LEN: usize = 8 + 4 + 4 + 4 + 4;

/// Decode width and height from a PNG's IHDR chunk.
///
/// Returns `None` when the bytes are not a PNG or the header is cut short.
pub fn dimensions_from_header(head: &[u8]) -> Option<Dimensions> {
    if head.len() < HEADER_LEN || !head.starts_with(PNG_MAGIC) {
        return None;
    }
    if &head[12..16] != b"IHDR" {
        return None;
    }

    let width = u32::from_be_bytes([head[16], head[17], head[18], head[19]]);
    let height = u32::from_be_bytes([head[20], head[21], head[22], head[23]]);
    Some(Dimensions { width, height })
}

/// Read the IHDR of the PNG at `path`
pub fn png_dimensions(path: &Path) -> std::io::Result<Option<Dimensions>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut head)?;
    Ok(dimensions_from_header(&head))
}
