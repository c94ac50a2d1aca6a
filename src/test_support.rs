//! Shared fixtures for unit tests

use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// PNG signature followed by an IHDR chunk, enough for header decoding
pub fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(33);
    bytes.extend_from_slice(b"\x89PNG\r\n\x1a\n");
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    // bit depth, colour type, compression, filter, interlace
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    // CRC is never checked by the decoder
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

/// A manifest that passes every field rule
pub fn valid_manifest() -> Value {
    json!({
        "name": "Better_Lanterns",
        "description": "Brighter lanterns for the mines.",
        "version_number": "1.2.3",
        "dependencies": ["BepInEx-BepInExPack-5.4.2100"],
        "website_url": "https://github.com/example/better-lanterns"
    })
}

/// Write a complete, valid package tree into `root`
pub fn write_valid_package(root: &Path) {
    fs::write(root.join("icon.png"), png_header(256, 256)).unwrap();
    fs::write(root.join("README.md"), "# Better Lanterns\n").unwrap();
    write_manifest(root, &valid_manifest());
}

pub fn write_manifest(root: &Path, manifest: &Value) {
    fs::write(
        root.join("manifest.json"),
        serde_json::to_vec_pretty(manifest).unwrap(),
    )
    .unwrap();
}
