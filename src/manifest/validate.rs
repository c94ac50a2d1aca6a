//! Manifest validation

use super::parser::{ManifestDocument, parse_manifest_file};
use super::schema::{FieldSpec, MANIFEST_FIELDS};
use crate::artifact::require_file;
use crate::assert::{length_between, match_pattern, require_present, require_type};
use crate::error::ValidationError;
use serde_json::Value;
use std::path::Path;

/// Validate the manifest at `dir/file_name`: present, a JSON object, and
/// every field in [`MANIFEST_FIELDS`] satisfied
pub fn validate_manifest(dir: &Path, file_name: &str) -> Result<(), ValidationError> {
    let path = require_file(dir, file_name)?;
    let document = parse_manifest_file(&path, file_name)?;
    validate_document(&document)
}

/// Apply the manifest schema to an already parsed document
pub fn validate_document(document: &ManifestDocument) -> Result<(), ValidationError> {
    apply_schema(document, MANIFEST_FIELDS)
}

/// Check `specs` in order, stopping at the first violation
pub fn apply_schema(document: &ManifestDocument, specs: &[FieldSpec]) -> Result<(), ValidationError> {
    for spec in specs {
        check_field(document, spec)?;
    }
    Ok(())
}

fn check_field(document: &ManifestDocument, spec: &FieldSpec) -> Result<(), ValidationError> {
    let value = require_present(document, spec.name)?;
    require_type(value, spec.value_type, spec.name)?;

    if spec.min_len.is_some() || spec.max_len.is_some() {
        length_between(
            value,
            spec.min_len.unwrap_or(0),
            spec.max_len.unwrap_or(usize::MAX),
            spec.name,
        )?;
    }

    if let (Some(pattern), Some(text)) = (spec.pattern, value.as_str()) {
        if spec.pattern_applies_to_empty || !text.is_empty() {
            match_pattern(text, pattern.regex(), spec.name)?;
        }
    }

    if let (Some(items), Value::Array(elements)) = (spec.items, value) {
        // every element is type-checked before any is pattern-checked
        for (index, element) in elements.iter().enumerate() {
            require_type(element, items.value_type, &item_subject(spec.name, index))?;
        }
        if let Some(pattern) = items.pattern {
            for (index, element) in elements.iter().enumerate() {
                if let Some(text) = element.as_str() {
                    match_pattern(text, pattern.regex(), &item_subject(spec.name, index))?;
                }
            }
        }
    }

    Ok(())
}

fn item_subject(field: &str, index: usize) -> String {
    format!("{}[{}]", field, index)
}
