//! Magic-byte content type detection

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
pub const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
pub const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";
pub const GZIP_MAGIC: &[u8] = b"\x1f\x8b";

pub const MIME_PNG: &str = "image/png";
pub const MIME_ZIP: &str = "application/zip";
pub const MIME_GZIP: &str = "application/gzip";

/// Longest prefix any signature needs
const SNIFF_LEN: usize = 16;

/// Leading-byte signatures, checked in order
const SIGNATURES: &[(&[u8], &str)] = &[
    (PNG_MAGIC, MIME_PNG),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"%PDF-", "application/pdf"),
    (ZIP_MAGIC, MIME_ZIP),
    (ZIP_EMPTY_MAGIC, MIME_ZIP),
    (GZIP_MAGIC, MIME_GZIP),
    (b"BM", "image/bmp"),
];

/// Identify a content type from the leading bytes of a file
pub fn sniff_bytes(head: &[u8]) -> Option<&'static str> {
    // RIFF....WEBP carries its tag after the chunk size
    if head.len() >= 12 && &head[..4] == b"RIFF" && &head[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| head.starts_with(magic))
        .map(|(_, mime)| *mime)
}

/// Read the head of `path` and identify its content type
pub fn sniff_file(path: &Path) -> std::io::Result<Option<&'static str>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut head)?;
    Ok(sniff_bytes(&head))
}
