//! `speclint` binary: validate one app of a blueprint spec tree.

use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use speclint_checks::{validate_app, Readiness, Scores, ValidationResult};
use speclint_document::BlueprintLayout;
use speclint_report::write_reports;
use std::path::PathBuf;
use tracing::{error, info};

/// Console summaries list at most this many findings per section.
const SUMMARY_LIMIT: usize = 10;

#[derive(Serialize)]
struct JsonSummary<'a> {
    app: &'a str,
    scores: &'a Scores,
    readiness: Readiness,
    clean: bool,
    gaps: &'a [String],
    contradictions: &'a [String],
    report_dir: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("speclint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cross-reference validator for webapp blueprint specs")
        .subcommand_required(true)
        .subcommand(
            Command::new("validate")
                .about("Validate one app's spec documents")
                .arg(
                    Arg::new("spec-dir")
                        .long("spec-dir")
                        .default_value("./spec")
                        .help("Path to the blueprint spec directory"),
                )
                .arg(
                    Arg::new("app")
                        .long("app")
                        .required(true)
                        .help("App name to validate (must exist under apps/)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full result as JSON instead of a summary"),
                ),
        );

    let matches = cli.get_matches();
    match matches.subcommand() {
        Some(("validate", args)) => {
            let spec_dir = PathBuf::from(args.get_one::<String>("spec-dir").unwrap());
            let app = args.get_one::<String>("app").unwrap();
            let json = args.get_flag("json");
            validate(&spec_dir, app, json)
        }
        _ => unreachable!("subcommand required"),
    }
}

fn validate(spec_dir: &std::path::Path, app: &str, json: bool) -> anyhow::Result<()> {
    // Precondition failures, not validation outcomes: the engine never
    // reports on a tree that is not there at all.
    if !spec_dir.is_dir() {
        error!(path = %spec_dir.display(), "spec directory not found");
        eprintln!("ERROR: Spec directory not found: {}", spec_dir.display());
        std::process::exit(2);
    }
    let layout = BlueprintLayout::new(spec_dir);
    if !layout.app(app).dir().is_dir() {
        error!(path = %layout.app(app).dir().display(), "app directory not found");
        eprintln!("ERROR: App directory not found: {}", layout.app(app).dir().display());
        std::process::exit(2);
    }

    let result = validate_app(&layout, app);
    let report_dir = write_reports(&layout, &result)?;
    info!(
        app = %result.app,
        clean = result.findings.is_clean(),
        overall = result.scores.overall,
        report_dir = %report_dir.display(),
        "validation reports written"
    );

    if json {
        let summary = JsonSummary {
            app: &result.app,
            scores: &result.scores,
            readiness: result.scores.readiness(),
            clean: result.findings.is_clean(),
            gaps: &result.findings.gaps,
            contradictions: &result.findings.contradictions,
            report_dir: report_dir.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&result, &report_dir.display().to_string());
    }

    // Exit code stays 0 regardless of score; callers decide pass/fail
    // from the reported counts.
    Ok(())
}

fn print_summary(result: &ValidationResult, report_dir: &str) {
    let scores = &result.scores;
    println!("=== Validation Report for '{}' ===\n", result.app);
    println!("Completeness : {:5.1}%", scores.completeness);
    println!("Consistency  : {:5.1}%", scores.consistency);
    println!("Coverage     : {:5.1}%", scores.coverage);
    println!("Overall      : {:5.1}%\n", scores.overall);

    print_section("Gaps", &result.findings.gaps, "gap-report.md");
    if !result.findings.contradictions.is_empty() {
        println!();
        print_section(
            "Contradictions",
            &result.findings.contradictions,
            "contradiction-report.md",
        );
    }

    println!("\nReports written to: {report_dir}/");
}

fn print_section(label: &str, entries: &[String], report_name: &str) {
    if entries.is_empty() {
        return;
    }
    println!("{label} ({}):", entries.len());
    for entry in entries.iter().take(SUMMARY_LIMIT) {
        println!("  - {entry}");
    }
    if entries.len() > SUMMARY_LIMIT {
        println!(
            "  ... and {} more (see {report_name})",
            entries.len() - SUMMARY_LIMIT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn validate_writes_reports_for_existing_app() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("apps/shop")).unwrap();

        validate(root, "shop", false).unwrap();

        let report_dir = root.join("validation/reports/shop");
        for name in ["gap-report.md", "contradiction-report.md", "completeness-score.md"] {
            assert!(report_dir.join(name).is_file(), "missing {name}");
        }
    }

    #[test]
    fn json_summary_carries_clean_flag() {
        let mut findings = speclint_checks::Findings::new();
        findings.gap("authorization.md is missing");
        let scores = Scores::compute(&findings.samples);

        let summary = JsonSummary {
            app: "shop",
            scores: &scores,
            readiness: scores.readiness(),
            clean: findings.is_clean(),
            gaps: &findings.gaps,
            contradictions: &findings.contradictions,
            report_dir: "validation/reports/shop".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["clean"], serde_json::json!(false));
        assert_eq!(value["gaps"].as_array().unwrap().len(), 1);
    }
}
