//! Core file completeness: the fixed per-app document set.

use crate::context::CoreFile;
use crate::findings::{Axis, Findings};

/// Check 11: every required core document must exist.
///
/// Each missing file is a gap and a completeness sample of 0; each
/// present file a completeness sample of 1.
#[must_use]
pub fn core_file_completeness(core_files: &[CoreFile], app_name: &str) -> Findings {
    let mut findings = Findings::new();
    for file in core_files {
        if !file.present {
            findings.gap(format!(
                "Missing core spec file: apps/{}/{}",
                app_name, file.name
            ));
        }
        findings.sample(Axis::Completeness, if file.present { 1.0 } else { 0.0 });
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use speclint_document::CORE_FILES;

    #[test]
    fn empty_app_dir_yields_seven_gaps_and_zero_samples() {
        let files: Vec<CoreFile> = CORE_FILES
            .iter()
            .map(|name| CoreFile {
                name,
                present: false,
            })
            .collect();
        let findings = core_file_completeness(&files, "shop");
        assert_eq!(findings.gaps.len(), 7);
        assert!(findings.gaps[0].starts_with("Missing core spec file: apps/shop/"));
        assert_eq!(findings.samples.len(), 7);
        assert!(findings.samples.iter().all(|s| s.ratio == 0.0));
    }

    #[test]
    fn present_files_sample_one_without_gaps() {
        let files = vec![
            CoreFile {
                name: "ia-spec.md",
                present: true,
            },
            CoreFile {
                name: "authorization.md",
                present: false,
            },
        ];
        let findings = core_file_completeness(&files, "shop");
        assert_eq!(findings.gaps.len(), 1);
        assert!(findings.gaps[0].contains("authorization.md"));
        assert_eq!(findings.samples[0].ratio, 1.0);
        assert_eq!(findings.samples[1].ratio, 0.0);
    }
}
