//! Report file writing
//!
//! The only side effect of a validation run: three markdown files
//! under `validation/reports/<app>/`. Concurrent runs against the same
//! directory are not coordinated; last writer wins.

use crate::render;
use speclint_checks::ValidationResult;
use speclint_document::BlueprintLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Gap report file name.
pub const GAP_REPORT: &str = "gap-report.md";
/// Contradiction report file name.
pub const CONTRADICTION_REPORT: &str = "contradiction-report.md";
/// Completeness score file name.
pub const SCORE_REPORT: &str = "completeness-score.md";

/// Failure to persist a report artifact.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem write or directory creation failed.
    #[error("failed to write report '{path}': {source}")]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Write all three report artifacts for a validation result.
///
/// Creates the per-app report directory if needed and overwrites any
/// previous reports. Returns the report directory.
pub fn write_reports(
    layout: &BlueprintLayout,
    result: &ValidationResult,
) -> Result<PathBuf, ReportError> {
    let report_dir = layout.report_dir(&result.app);
    fs::create_dir_all(&report_dir).map_err(|source| ReportError::Io {
        path: report_dir.clone(),
        source,
    })?;

    write_file(
        &report_dir.join(GAP_REPORT),
        &render::gap_report(&result.app, &result.findings.gaps),
    )?;
    write_file(
        &report_dir.join(CONTRADICTION_REPORT),
        &render::contradiction_report(&result.app, &result.findings.contradictions),
    )?;
    write_file(
        &report_dir.join(SCORE_REPORT),
        &render::score_report(&result.app, &result.scores, &result.findings),
    )?;

    info!(app = %result.app, dir = %report_dir.display(), "reports written");
    Ok(report_dir)
}

fn write_file(path: &Path, text: &str) -> Result<(), ReportError> {
    fs::write(path, text).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
