//! Cross-reference validation engine
//!
//! Checks a blueprint's documents for gaps (expected artifacts or
//! cross-references that are missing) and contradictions
//! (cross-references that disagree), then reduces per-check ratio
//! samples to three weighted axis scores and one overall score.
//!
//! # Pipeline
//!
//! ```text
//! BlueprintLayout → AppDocuments::load → checks::run_all → Scores::compute
//! ```
//!
//! The engine is fully synchronous and has no fatal errors: missing
//! documents load as empty text and surface as gaps, never as control
//! flow. Re-running on unchanged documents produces identical results.

pub mod checks;
pub mod context;
pub mod findings;
pub mod scoring;

pub use context::{AppDocuments, ComponentDoc, CoreFile, DocText, PageDoc};
pub use findings::{Axis, Findings, ScoreSample};
pub use scoring::{Readiness, Scores};

use serde::Serialize;
use speclint_document::BlueprintLayout;
use tracing::info;

/// Everything one validation run produces.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// App that was validated.
    pub app: String,
    /// Accumulated gaps, contradictions, and score samples.
    pub findings: Findings,
    /// Final axis and overall scores.
    pub scores: Scores,
}

/// Validate one app in a blueprint tree.
///
/// Reads all documents, runs the eleven checks, and computes final
/// scores. Infallible: absent inputs degrade to gaps and zero samples.
#[must_use]
pub fn validate_app(layout: &BlueprintLayout, app: &str) -> ValidationResult {
    info!(app, root = %layout.root().display(), "validating blueprint app");
    let docs = AppDocuments::load(layout, app);
    let findings = checks::run_all(&docs);
    let scores = Scores::compute(&findings.samples);
    info!(
        app,
        gaps = findings.gaps.len(),
        contradictions = findings.contradictions.len(),
        overall = scores.overall,
        "validation complete"
    );
    ValidationResult {
        app: app.to_string(),
        findings,
        scores,
    }
}
