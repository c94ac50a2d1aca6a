//! Packgate - publication gate for mod packages
//!
//! Checks that an extracted package carries a 256x256 PNG icon, a readme and
//! a manifest whose fields satisfy a fixed schema. The first violated rule
//! is reported as a [`ValidationError`].

pub mod archive;
pub mod artifact;
pub mod assert;
pub mod cli;
pub mod error;
pub mod inspect;
pub mod manifest;
pub mod package;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ErrorKind, ValidationError};
pub use package::{validate_package, validate_package_with};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "packgate";
