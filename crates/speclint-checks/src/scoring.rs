//! Scoring aggregator
//!
//! Reduces the ratio samples collected by the checks to three axis
//! percentages and one weighted overall score, all rounded to one
//! decimal place. An axis with no samples scores 0.0.

use crate::findings::{Axis, ScoreSample};
use serde::Serialize;

/// Weight of the completeness axis in the overall score.
pub const WEIGHT_COMPLETENESS: f64 = 0.40;
/// Weight of the consistency axis in the overall score.
pub const WEIGHT_CONSISTENCY: f64 = 0.35;
/// Weight of the coverage axis in the overall score.
pub const WEIGHT_COVERAGE: f64 = 0.25;

/// Final 0-100 scores for one app.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    /// Existence of expected artifacts.
    pub completeness: f64,
    /// Agreement between artifacts.
    pub consistency: f64,
    /// Fraction of referenced items that are fully specified.
    pub coverage: f64,
    /// Weighted combination of the three axes.
    pub overall: f64,
}

impl Scores {
    /// Reduce collected samples to final scores.
    ///
    /// The overall score is computed from the rounded axis values, so
    /// `overall == round(0.40·completeness + 0.35·consistency +
    /// 0.25·coverage, 1)` holds exactly for the reported numbers.
    #[must_use]
    pub fn compute(samples: &[ScoreSample]) -> Self {
        let completeness = round1(axis_mean(samples, Axis::Completeness) * 100.0);
        let consistency = round1(axis_mean(samples, Axis::Consistency) * 100.0);
        let coverage = round1(axis_mean(samples, Axis::Coverage) * 100.0);
        let overall = round1(
            WEIGHT_COMPLETENESS * completeness
                + WEIGHT_CONSISTENCY * consistency
                + WEIGHT_COVERAGE * coverage,
        );
        Self {
            completeness,
            consistency,
            coverage,
            overall,
        }
    }

    /// Human-guidance band for the overall score.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        if self.overall >= 90.0 {
            Readiness::ReadyForGeneration
        } else if self.overall >= 70.0 {
            Readiness::MostlyComplete
        } else {
            Readiness::NeedsWork
        }
    }
}

/// Banding of the overall score for human guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readiness {
    /// Overall >= 90: specification is ready for code generation.
    ReadyForGeneration,
    /// Overall >= 70: mostly complete, gaps remain.
    MostlyComplete,
    /// Everything else: needs significant work.
    NeedsWork,
}

impl Readiness {
    /// The banding sentence used in reports.
    #[must_use]
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::ReadyForGeneration => "Specification is ready for code generation.",
            Self::MostlyComplete => {
                "Specification is mostly complete. Address remaining gaps before generation."
            }
            Self::NeedsWork => {
                "Specification needs significant work. Review gap and contradiction reports."
            }
        }
    }
}

fn axis_mean(samples: &[ScoreSample], axis: Axis) -> f64 {
    let ratios: Vec<f64> = samples
        .iter()
        .filter(|s| s.axis == axis)
        .map(|s| s.ratio)
        .collect();
    if ratios.is_empty() {
        0.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(axis: Axis, ratio: f64) -> ScoreSample {
        ScoreSample { axis, ratio }
    }

    #[test]
    fn axis_with_no_samples_scores_zero() {
        let scores = Scores::compute(&[]);
        assert_eq!(scores.completeness, 0.0);
        assert_eq!(scores.consistency, 0.0);
        assert_eq!(scores.coverage, 0.0);
        assert_eq!(scores.overall, 0.0);
    }

    #[test]
    fn perfect_samples_score_one_hundred() {
        let samples = [
            sample(Axis::Completeness, 1.0),
            sample(Axis::Consistency, 1.0),
            sample(Axis::Coverage, 1.0),
        ];
        let scores = Scores::compute(&samples);
        assert_eq!(scores.overall, 100.0);
    }

    #[test]
    fn overall_is_weighted_mean_of_rounded_axes() {
        let samples = [
            sample(Axis::Completeness, 1.0),
            sample(Axis::Completeness, 0.0),
            sample(Axis::Consistency, 1.0),
            sample(Axis::Coverage, 0.5),
        ];
        let scores = Scores::compute(&samples);
        assert_eq!(scores.completeness, 50.0);
        assert_eq!(scores.consistency, 100.0);
        assert_eq!(scores.coverage, 50.0);
        // 0.40 * 50 + 0.35 * 100 + 0.25 * 50
        assert_eq!(scores.overall, 67.5);
    }

    #[test]
    fn scores_round_to_one_decimal() {
        let samples = [
            sample(Axis::Consistency, 1.0 / 3.0),
        ];
        let scores = Scores::compute(&samples);
        assert_eq!(scores.consistency, 33.3);
    }

    #[test]
    fn readiness_banding() {
        let mk = |overall| Scores {
            completeness: 0.0,
            consistency: 0.0,
            coverage: 0.0,
            overall,
        };
        assert_eq!(mk(95.0).readiness(), Readiness::ReadyForGeneration);
        assert_eq!(mk(90.0).readiness(), Readiness::ReadyForGeneration);
        assert_eq!(mk(75.0).readiness(), Readiness::MostlyComplete);
        assert_eq!(mk(42.0).readiness(), Readiness::NeedsWork);
    }
}
