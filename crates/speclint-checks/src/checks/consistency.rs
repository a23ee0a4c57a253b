//! Agreement checks: refinements against suite-level documents,
//! navigation edges against page files, token references against the
//! design system.

use crate::context::{ComponentDoc, DocText, PageDoc};
use crate::findings::{Axis, Findings};
use speclint_extract::{connected_pages, design_tokens, nav_slug, slug_matches};

/// App-level refinement entries are allowed to diverge from the suite
/// document only when the refinement text carries this marker.
const APP_SPECIFIC_MARKER: &str = "app-specific";

/// Check 1: every app entity must appear in the suite entity list.
///
/// Unmatched entities are contradictions, not gaps: they exist but
/// disagree with the higher-level model. The consistency sample is
/// only taken when the suite defines entities at all, so an empty
/// suite never produces a ratio.
#[must_use]
pub fn entity_consistency(
    suite_entities: &[String],
    app_entities: &[String],
    refinement: &DocText,
    app_name: &str,
) -> Findings {
    refinement_consistency(
        suite_entities,
        app_entities,
        refinement,
        &RefinementRule {
            fact: "Entity",
            plural: "entities",
            suite_doc: "suite/domain-model.md",
            app_doc: "domain-refinement.md",
            suite_label: "suite domain-model",
            app_label: "app domain-refinement",
        },
        app_name,
    )
}

/// Check 2: every app role must appear in the suite role matrix.
/// Same rule as [`entity_consistency`].
#[must_use]
pub fn role_consistency(
    suite_roles: &[String],
    app_roles: &[String],
    refinement: &DocText,
    app_name: &str,
) -> Findings {
    refinement_consistency(
        suite_roles,
        app_roles,
        refinement,
        &RefinementRule {
            fact: "Role",
            plural: "roles",
            suite_doc: "suite/role-permission-matrix.md",
            app_doc: "role-refinement.md",
            suite_label: "suite role-permission-matrix",
            app_label: "app role-refinement",
        },
        app_name,
    )
}

struct RefinementRule {
    fact: &'static str,
    plural: &'static str,
    suite_doc: &'static str,
    app_doc: &'static str,
    suite_label: &'static str,
    app_label: &'static str,
}

fn refinement_consistency(
    suite: &[String],
    app: &[String],
    refinement: &DocText,
    rule: &RefinementRule,
    app_name: &str,
) -> Findings {
    let mut findings = Findings::new();

    if suite.is_empty() {
        findings.gap(format!("No {} found in {}", rule.plural, rule.suite_doc));
    }
    if app.is_empty() && refinement.present {
        findings.gap(format!(
            "No {} found in apps/{}/{}",
            rule.plural, app_name, rule.app_doc
        ));
    }

    let marked_app_specific = refinement.text.to_lowercase().contains(APP_SPECIFIC_MARKER);
    for name in app {
        if !suite.contains(name) && !marked_app_specific {
            findings.contradiction(format!(
                "{} '{}' in {} is not in {} and not marked as app-specific",
                rule.fact, name, rule.app_label, rule.suite_label
            ));
        }
    }

    if !suite.is_empty() {
        let ratio = if app.is_empty() {
            1.0
        } else {
            let matched = app.iter().filter(|name| suite.contains(name)).count();
            matched as f64 / app.len() as f64
        };
        findings.sample(Axis::Consistency, ratio);
    }

    findings
}

/// Check 9: every connected-page target must resolve to a page spec.
///
/// Targets resolve via the same slug-substring rule used for
/// route-to-page matching, over lower-cased slugs and stems.
/// Unresolved targets are contradictions.
#[must_use]
pub fn navigation_consistency(pages: &[PageDoc]) -> Findings {
    let mut findings = Findings::new();
    let stems: Vec<String> = pages.iter().map(|p| p.stem.to_lowercase()).collect();

    let mut total = 0usize;
    let mut found = 0usize;
    for page in pages {
        for target in connected_pages(&page.text) {
            total += 1;
            let slug = nav_slug(&target);
            if stems.iter().any(|stem| slug_matches(&slug, stem)) {
                found += 1;
            } else {
                findings.contradiction(format!(
                    "Page '{}' references connected page '{}' which has no spec file",
                    page.file_name, target
                ));
            }
        }
    }

    if total > 0 {
        findings.sample(Axis::Consistency, found as f64 / total as f64);
    }
    findings
}

/// Check 10: design tokens referenced in component specs must exist in
/// the suite design system.
///
/// Skipped entirely when the design system defines no tokens: absence
/// of a token vocabulary is not itself flagged here. Token comparison
/// is lower-cased.
#[must_use]
pub fn design_token_compliance(
    defined_tokens: &[String],
    components: &[ComponentDoc],
) -> Findings {
    let mut findings = Findings::new();
    if defined_tokens.is_empty() {
        return findings;
    }

    let defined: Vec<String> = defined_tokens.iter().map(|t| t.to_lowercase()).collect();
    let mut component_text = String::new();
    for component in components {
        component_text.push_str(&component.text);
        component_text.push('\n');
    }
    let referenced = design_tokens(&component_text);

    let mut matched = 0usize;
    for token in &referenced {
        if defined.contains(&token.to_lowercase()) {
            matched += 1;
        } else {
            findings.contradiction(format!(
                "Component spec references design token '{token}' not found in design-system.md"
            ));
        }
    }

    if !referenced.is_empty() {
        findings.sample(Axis::Consistency, matched as f64 / referenced.len() as f64);
    }
    findings
}
