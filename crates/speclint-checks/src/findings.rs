//! The findings accumulator
//!
//! Every check returns a [`Findings`] value; the runner merges them in
//! check order. There is no shared mutable state: checks stay
//! independently testable and the merge is a plain concatenation.
//!
//! Gaps and contradictions are append-only and never deduplicated. A
//! defect is reported once per check that detects it, even when
//! several checks see facets of the same underlying problem.

use serde::Serialize;

/// Scoring axis a ratio sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Existence of expected artifacts (binary samples).
    Completeness,
    /// Agreement between artifacts.
    Consistency,
    /// Fraction of referenced items that are fully specified.
    Coverage,
}

/// One ratio in `[0, 1]` tagged with its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSample {
    /// Axis the sample contributes to.
    pub axis: Axis,
    /// `matched / total`; an empty applicable set is a perfect 1.0.
    pub ratio: f64,
}

/// Accumulated output of one or more checks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Findings {
    /// Expected artifacts or cross-references that are absent.
    pub gaps: Vec<String>,
    /// Cross-references that exist but disagree with their referent.
    pub contradictions: Vec<String>,
    /// Ratio samples consumed by the scoring aggregator.
    pub samples: Vec<ScoreSample>,
}

impl Findings {
    /// Empty accumulator.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gap.
    pub fn gap(&mut self, message: impl Into<String>) {
        self.gaps.push(message.into());
    }

    /// Record a contradiction.
    pub fn contradiction(&mut self, message: impl Into<String>) {
        self.contradictions.push(message.into());
    }

    /// Record a score sample.
    pub fn sample(&mut self, axis: Axis, ratio: f64) {
        self.samples.push(ScoreSample { axis, ratio });
    }

    /// Append another accumulator, preserving its internal order.
    pub fn extend(&mut self, other: Findings) {
        self.gaps.extend(other.gaps);
        self.contradictions.extend(other.contradictions);
        self.samples.extend(other.samples);
    }

    /// True when no gaps and no contradictions were recorded.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty() && self.contradictions.is_empty()
    }
}
