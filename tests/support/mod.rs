//! Archive fixtures for integration tests
//!
//! `png_header` and `valid_manifest` mirror `src/test_support.rs`, which is
//! `cfg(test)` only and not visible from here. Keep the two in step.

use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::{Value, json};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;

pub fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(33);
    bytes.extend_from_slice(b"\x89PNG\r\n\x1a\n");
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    // bit depth, colour type, compression, filter, interlace, then a zero CRC
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

pub fn valid_manifest() -> Value {
    json!({
        "name": "Better_Lanterns",
        "description": "Brighter lanterns for the mines.",
        "version_number": "1.2.3",
        "dependencies": ["BepInEx-BepInExPack-5.4.2100"],
        "website_url": "https://github.com/example/better-lanterns"
    })
}

/// Entries of a complete, valid package
pub fn valid_entries() -> Vec<(String, Vec<u8>)> {
    vec![
        ("icon.png".to_string(), png_header(256, 256)),
        ("README.md".to_string(), b"# Better Lanterns\n".to_vec()),
        (
            "manifest.json".to_string(),
            serde_json::to_vec_pretty(&valid_manifest()).unwrap(),
        ),
    ]
}

pub fn write_zip(path: &Path, entries: &[(String, Vec<u8>)]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    for (name, data) in entries {
        zip.start_file(name.as_str(), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_tar_gz(path: &Path, entries: &[(String, Vec<u8>)]) {
    let file = File::create(path).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, data.as_slice()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// Like [`write_tar_gz`], followed by a symlink entry `link_name -> target`
pub fn write_tar_gz_with_symlink(
    path: &Path,
    entries: &[(String, Vec<u8>)],
    link_name: &str,
    target: &Path,
) {
    let file = File::create(path).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, data.as_slice()).unwrap();
    }

    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Symlink);
    header.set_size(0);
    header.set_mode(0o777);
    builder.append_link(&mut header, link_name, target).unwrap();

    builder.into_inner().unwrap().finish().unwrap();
}
