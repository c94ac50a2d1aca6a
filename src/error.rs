//! Validation failure taxonomy
//!
//! Every check in the pipeline reports through [`ValidationError`]: one
//! closed [`ErrorKind`], the file or field it concerns, and a rendered
//! sentence for humans.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Closed set of reasons a package can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A required file is missing
    FileNotFound,
    /// A document does not parse or has the wrong top-level shape
    #[serde(rename = "FILE_WRONG_FORMAT")]
    InvalidFormat,
    /// Sniffed content type differs from the expected one
    InvalidMime,
    /// Image dimensions differ from the expected ones
    InvalidImageSize,
    /// A required property is absent
    PropertyMissing,
    /// A property has the wrong JSON type
    PropertyWrongType,
    /// A text or list is shorter than allowed
    TextTooSmall,
    /// A text or list is longer than allowed
    TextTooBig,
    /// A value does not match its pattern
    #[serde(rename = "NO_REGEX_MATCH")]
    NoPatternMatch,
}

impl ErrorKind {
    pub fn all() -> &'static [ErrorKind] {
        &[
            ErrorKind::FileNotFound,
            ErrorKind::InvalidFormat,
            ErrorKind::InvalidMime,
            ErrorKind::InvalidImageSize,
            ErrorKind::PropertyMissing,
            ErrorKind::PropertyWrongType,
            ErrorKind::TextTooSmall,
            ErrorKind::TextTooBig,
            ErrorKind::NoPatternMatch,
        ]
    }

    /// Stable code for programmatic branching
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "FILE_NOT_FOUND",
            ErrorKind::InvalidFormat => "FILE_WRONG_FORMAT",
            ErrorKind::InvalidMime => "INVALID_MIME",
            ErrorKind::InvalidImageSize => "INVALID_IMAGE_SIZE",
            ErrorKind::PropertyMissing => "PROPERTY_MISSING",
            ErrorKind::PropertyWrongType => "PROPERTY_WRONG_TYPE",
            ErrorKind::TextTooSmall => "TEXT_TOO_SMALL",
            ErrorKind::TextTooBig => "TEXT_TOO_BIG",
            ErrorKind::NoPatternMatch => "NO_REGEX_MATCH",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single rejected check
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    #[serde(rename = "code")]
    pub kind: ErrorKind,
    pub subject: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(file: &str) -> Self {
        Self::new(
            ErrorKind::FileNotFound,
            file,
            format!("File '{}' was not found.", file),
        )
    }

    pub fn invalid_format(file: &str, expected_format: &str) -> Self {
        Self::new(
            ErrorKind::InvalidFormat,
            file,
            format!("'{}' is not a valid {} file.", file, expected_format),
        )
    }

    pub fn invalid_mime(file: &str, expected_mime: &str) -> Self {
        Self::new(
            ErrorKind::InvalidMime,
            file,
            format!("'{}' must be of type '{}'.", file, expected_mime),
        )
    }

    pub fn invalid_image_size(file: &str, width: u32, height: u32) -> Self {
        Self::new(
            ErrorKind::InvalidImageSize,
            file,
            format!("'{}' must be exactly {}x{}.", file, width, height),
        )
    }

    pub fn property_missing(property: &str) -> Self {
        Self::new(
            ErrorKind::PropertyMissing,
            property,
            format!("'{}' is missing.", property),
        )
    }

    pub fn property_wrong_type(property: &str, expected_type: &str) -> Self {
        Self::new(
            ErrorKind::PropertyWrongType,
            property,
            format!("'{}' must be of type {}.", property, expected_type),
        )
    }

    pub fn text_too_small(property: &str, minimum: usize) -> Self {
        Self::new(
            ErrorKind::TextTooSmall,
            property,
            format!("'{}' must be at least {} characters.", property, minimum),
        )
    }

    pub fn text_too_big(property: &str, maximum: usize) -> Self {
        Self::new(
            ErrorKind::TextTooBig,
            property,
            format!("'{}' must be at most {} characters.", property, maximum),
        )
    }

    pub fn no_pattern_match(property: &str, pattern: &str) -> Self {
        Self::new(
            ErrorKind::NoPatternMatch,
            property,
            format!(
                "'{}' must be valid for the following pattern: /{}/",
                property, pattern
            ),
        )
    }
}
