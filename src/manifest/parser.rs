//! Manifest parsing functions

use super::schema::PackageManifest;
use crate::error::ValidationError;
use serde_json::{Map, Value};
use std::path::Path;

/// Conventional manifest file name inside a package
pub const MANIFEST_FILE: &str = "manifest.json";

/// Format named in `InvalidFormat` failures
pub const MANIFEST_FORMAT: &str = "JSON object";

/// Parsed manifest: field name to untyped value
pub type ManifestDocument = Map<String, Value>;

/// Parse raw manifest bytes into an object mapping.
///
/// Syntax errors and well-formed non-objects (arrays, scalars) are both
/// `InvalidFormat`.
pub fn parse_manifest_bytes(bytes: &[u8], file_name: &str) -> Result<ManifestDocument, ValidationError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => {
            tracing::debug!(file = file_name, kind = json_kind(&other), "manifest is not an object");
            Err(ValidationError::invalid_format(file_name, MANIFEST_FORMAT))
        }
        Err(e) => {
            tracing::debug!(file = file_name, error = %e, "manifest does not parse");
            Err(ValidationError::invalid_format(file_name, MANIFEST_FORMAT))
        }
    }
}

/// Read and parse the manifest at `path`
pub fn parse_manifest_file(path: &Path, file_name: &str) -> Result<ManifestDocument, ValidationError> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "manifest unreadable");
        ValidationError::invalid_format(file_name, MANIFEST_FORMAT)
    })?;
    parse_manifest_bytes(&bytes, file_name)
}

/// Typed view of a manifest that already passed validation
pub fn load_manifest(dir: &Path) -> Option<PackageManifest> {
    let content = std::fs::read(dir.join(MANIFEST_FILE)).ok()?;
    serde_json::from_slice(&content).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn object_parses() {
        let doc = parse_manifest_bytes(br#"{"name": "x", "extra": [1]}"#, MANIFEST_FILE).unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[rstest]
    #[case::syntax(b"{\"name\": ".as_slice())]
    #[case::array(b"[1, 2, 3]".as_slice())]
    #[case::string(b"\"name\"".as_slice())]
    #[case::number(b"42".as_slice())]
    #[case::null(b"null".as_slice())]
    #[case::empty(b"".as_slice())]
    fn non_objects_are_invalid_format(#[case] bytes: &[u8]) {
        let err = parse_manifest_bytes(bytes, MANIFEST_FILE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        assert_eq!(err.subject, MANIFEST_FILE);
        assert_eq!(err.message, "'manifest.json' is not a valid JSON object file.");
    }

    #[test]
    fn unreadable_path_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_manifest_file(dir.path(), MANIFEST_FILE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }

    #[test]
    fn load_typed_manifest() {
        let dir = tempfile::tempdir().unwrap();
        crate::test_support::write_valid_package(dir.path());

        let manifest = load_manifest(dir.path()).unwrap();
        assert_eq!(manifest.name, "Better_Lanterns");
        assert_eq!(manifest.version_number, "1.2.3");
        assert_eq!(manifest.dependencies.len(), 1);
    }
}
