//! Field assertion primitives
//!
//! Each primitive either returns normally or hands back the one
//! [`ValidationError`] describing the violation. Callers chain them with `?`
//! so the first failure stops the sequence.

use crate::error::ValidationError;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

/// Primitive JSON kinds a field can be declared as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Null => "null",
        }
    }

    /// Structural check, no coercion
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueType::String => value.is_string(),
            ValueType::Number => value.is_number(),
            ValueType::Boolean => value.is_boolean(),
            ValueType::Array => value.is_array(),
            ValueType::Object => value.is_object(),
            ValueType::Null => value.is_null(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up `key`, failing with `PropertyMissing` when absent
pub fn require_present<'a>(
    container: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    container
        .get(key)
        .ok_or_else(|| ValidationError::property_missing(key))
}

/// Fail with `PropertyWrongType` unless `value` is of `expected` kind
pub fn require_type(value: &Value, expected: ValueType, subject: &str) -> Result<(), ValidationError> {
    if expected.matches(value) {
        Ok(())
    } else {
        Err(ValidationError::property_wrong_type(subject, expected.as_str()))
    }
}

/// Length of a string (in characters) or array; `None` for other kinds
pub fn value_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Inclusive bounds check on strings and arrays.
///
/// Values without a length pass untouched; type checks run first.
pub fn length_between(
    value: &Value,
    min: usize,
    max: usize,
    subject: &str,
) -> Result<(), ValidationError> {
    let Some(len) = value_len(value) else {
        return Ok(());
    };

    if len < min {
        return Err(ValidationError::text_too_small(subject, min));
    }
    if len > max {
        return Err(ValidationError::text_too_big(subject, max));
    }
    Ok(())
}

/// Fail with `NoPatternMatch` unless `pattern` matches `value`.
///
/// Patterns are expected to be anchored (`^...$`) so the whole value has to
/// match.
pub fn match_pattern(value: &str, pattern: &Regex, subject: &str) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::no_pattern_match(subject, pattern.as_str()))
    }
}
