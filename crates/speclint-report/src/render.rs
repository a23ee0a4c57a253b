//! Pure markdown rendering of validation results
//!
//! Output is deliberately stable: the same findings render to the same
//! bytes, so re-running on an unchanged tree rewrites identical files.
//! A zero-count state is always stated explicitly instead of omitting
//! the section.

use speclint_checks::{Findings, Scores};

/// Render the gap report.
#[must_use]
pub fn gap_report(app: &str, gaps: &[String]) -> String {
    let mut lines = vec![
        format!("# Gap Report — {app}\n"),
        format!("Total gaps found: {}\n", gaps.len()),
    ];
    if gaps.is_empty() {
        lines.push("No gaps detected. All expected artifacts are present.\n".to_string());
    } else {
        lines.push("## Missing Artifacts & Incomplete Sections\n".to_string());
        for (index, gap) in gaps.iter().enumerate() {
            lines.push(format!("{}. {gap}", index + 1));
        }
    }
    finish(lines)
}

/// Render the contradiction report.
#[must_use]
pub fn contradiction_report(app: &str, contradictions: &[String]) -> String {
    let mut lines = vec![
        format!("# Contradiction Report — {app}\n"),
        format!("Total contradictions found: {}\n", contradictions.len()),
    ];
    if contradictions.is_empty() {
        lines.push("No contradictions detected. All cross-references are consistent.\n".to_string());
    } else {
        lines.push("## Conflicting & Inconsistent Specs\n".to_string());
        for (index, contradiction) in contradictions.iter().enumerate() {
            lines.push(format!("{}. {contradiction}", index + 1));
        }
    }
    finish(lines)
}

/// Render the completeness score card, including the scoring
/// methodology and the banding sentence.
#[must_use]
pub fn score_report(app: &str, scores: &Scores, findings: &Findings) -> String {
    let mut lines = vec![
        format!("# Completeness Score — {app}\n"),
        "## Scores\n".to_string(),
        "| Metric        | Score  |".to_string(),
        "|---------------|--------|".to_string(),
        format!("| Completeness  | {:5.1}% |", scores.completeness),
        format!("| Consistency   | {:5.1}% |", scores.consistency),
        format!("| Coverage      | {:5.1}% |", scores.coverage),
        format!("| **Overall**   | **{:.1}%** |", scores.overall),
        String::new(),
        "## Scoring Methodology\n".to_string(),
        "- **Completeness** (40%): Ratio of existing artifacts to expected artifacts".to_string(),
        "- **Consistency** (35%): Ratio of valid cross-references to total cross-references"
            .to_string(),
        "- **Coverage** (25%): Ratio of fully specified items to total items".to_string(),
        String::new(),
        "## Summary\n".to_string(),
        format!("- Gaps found: {}", findings.gaps.len()),
        format!("- Contradictions found: {}", findings.contradictions.len()),
        format!("- Overall score: {:.1}%", scores.overall),
        String::new(),
    ];
    lines.push(scores.readiness().guidance().to_string());
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use speclint_checks::Axis;

    fn scores(completeness: f64, consistency: f64, coverage: f64, overall: f64) -> Scores {
        Scores {
            completeness,
            consistency,
            coverage,
            overall,
        }
    }

    #[test]
    fn gap_report_numbers_entries() {
        let gaps = vec!["first gap".to_string(), "second gap".to_string()];
        let report = gap_report("shop", &gaps);
        assert!(report.starts_with("# Gap Report — shop\n\nTotal gaps found: 2\n"));
        assert!(report.contains("\n1. first gap\n2. second gap\n"));
    }

    #[test]
    fn empty_gap_report_states_zero_count() {
        let report = gap_report("shop", &[]);
        assert_eq!(
            report,
            "# Gap Report — shop\n\nTotal gaps found: 0\n\n\
             No gaps detected. All expected artifacts are present.\n\n"
        );
    }

    #[test]
    fn empty_contradiction_report_states_zero_count() {
        let report = contradiction_report("shop", &[]);
        assert!(report.contains("Total contradictions found: 0"));
        assert!(report.contains("No contradictions detected. All cross-references are consistent."));
    }

    #[test]
    fn score_report_carries_table_and_banding() {
        let mut findings = Findings::new();
        findings.gap("one gap");
        findings.sample(Axis::Completeness, 1.0);
        let report = score_report("shop", &scores(91.7, 100.0, 85.0, 94.0), &findings);

        assert!(report.contains("| Completeness  |  91.7% |"));
        assert!(report.contains("| Consistency   | 100.0% |"));
        assert!(report.contains("| **Overall**   | **94.0%** |"));
        assert!(report.contains("- Gaps found: 1"));
        assert!(report.contains("Specification is ready for code generation."));
    }

    #[test]
    fn score_report_banding_for_low_scores() {
        let report = score_report("shop", &scores(10.0, 10.0, 10.0, 10.0), &Findings::new());
        assert!(report.contains("Specification needs significant work."));
    }

    #[test]
    fn rendering_is_deterministic() {
        let gaps = vec!["gap".to_string()];
        assert_eq!(gap_report("a", &gaps), gap_report("a", &gaps));
    }
}
