//! Validation report

use super::CliError;
use crate::error::ValidationError;
use crate::manifest::PackageManifest;
use crate::settings::ReportFormat;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name and version of an accepted package
#[derive(Debug, Clone, Serialize)]
pub struct ManifestSummary {
    pub name: String,
    pub version_number: String,
}

/// Outcome of one validation run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub package: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    pub checked_at: DateTime<Utc>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ManifestSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationError>,
}

impl Report {
    pub fn new(
        package: &Path,
        sha256: Option<String>,
        outcome: Result<(), ValidationError>,
        manifest: Option<&PackageManifest>,
    ) -> Self {
        Self {
            package: package.to_path_buf(),
            sha256,
            checked_at: Utc::now(),
            valid: outcome.is_ok(),
            manifest: manifest.map(|m| ManifestSummary {
                name: m.name.clone(),
                version_number: m.version_number.clone(),
            }),
            failure: outcome.err(),
        }
    }

    /// 0 when accepted, 1 when rejected
    pub fn exit_code(&self) -> u8 {
        if self.valid { 0 } else { 1 }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, CliError> {
        match format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        match &self.failure {
            None => {
                out.push_str("Package valid\n");
                if let Some(manifest) = &self.manifest {
                    out.push_str(&format!(
                        "  {} {}\n",
                        manifest.name, manifest.version_number
                    ));
                }
            }
            Some(failure) => {
                out.push_str(&format!("Package rejected: {}\n", failure.message));
                out.push_str(&format!("  code:    {}\n", failure.kind));
                out.push_str(&format!("  subject: {}\n", failure.subject));
            }
        }
        if let Some(sha256) = &self.sha256 {
            out.push_str(&format!("  sha256:  {}\n", sha256));
        }
        out
    }
}
