//! CLI command handlers

mod check;
mod report;
mod validate;

pub use check::*;
pub use report::*;
pub use validate::*;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    ArchiveError(#[from] crate::archive::ArchiveError),

    #[error("Settings error: {0}")]
    SettingsError(#[from] crate::settings::SettingsError),

    #[error("Report error: {0}")]
    ReportError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl CliError {
    /// Operational failures are distinct from a rejected package
    pub const EXIT_CODE: u8 = 2;
}
