//! Report artifacts
//!
//! Renders a validation run into three markdown files per app — a gap
//! report, a contradiction report, and a completeness score card — and
//! writes them under the blueprint's `validation/reports/<app>/`
//! directory, overwriting any previous run's output.
//!
//! Rendering is pure string construction; writing is the only fallible
//! operation in the whole pipeline.

pub mod render;
pub mod writer;

pub use render::{contradiction_report, gap_report, score_report};
pub use writer::{write_reports, ReportError};
