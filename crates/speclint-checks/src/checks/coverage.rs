//! Coverage checks: referenced artifacts must be specified somewhere.

use crate::context::{ComponentDoc, DocText, PageDoc};
use crate::findings::{Axis, Findings};
use speclint_extract::{route_slug, slug_matches};

/// Keywords every page spec must mention (case-insensitive).
const STATE_KEYWORDS: [&str; 3] = ["loading", "error", "empty"];

/// Check 3: the BDD feature directory must be non-empty.
#[must_use]
pub fn feature_coverage(feature_stems: &[String], app_name: &str) -> Findings {
    let mut findings = Findings::new();
    if feature_stems.is_empty() {
        findings.gap(format!("No .feature.md files in apps/{app_name}/features/"));
    }
    findings.sample(
        Axis::Completeness,
        if feature_stems.is_empty() { 0.0 } else { 1.0 },
    );
    findings
}

/// Check 4: every IA route must have a matching page spec.
///
/// A route matches a page when the route-derived slug and the page
/// stem contain one another (either direction). This tolerates naming
/// drift between IA routes and file names by design.
#[must_use]
pub fn page_coverage(ia_routes: &[String], pages: &[PageDoc]) -> Findings {
    let mut findings = Findings::new();
    let stems: Vec<&str> = pages.iter().map(|p| p.stem.as_str()).collect();

    if !ia_routes.is_empty() && pages.is_empty() {
        findings.gap(format!(
            "IA spec defines {} routes but no page specs exist",
            ia_routes.len()
        ));
    }

    let route_matches =
        |route: &str| stems.iter().any(|stem| slug_matches(&route_slug(route), stem));

    for route in ia_routes {
        let slug = route_slug(route);
        if !slug.is_empty() && !route_matches(route) {
            findings.gap(format!(
                "Route '{route}' from ia-spec.md has no matching page spec"
            ));
        }
    }

    if !ia_routes.is_empty() {
        let matched = ia_routes.iter().filter(|r| route_matches(r)).count();
        findings.sample(Axis::Coverage, matched as f64 / ia_routes.len() as f64);
    }
    findings.sample(Axis::Completeness, if pages.is_empty() { 0.0 } else { 1.0 });
    findings
}

/// Check 5: every component referenced in a page spec must have a
/// component spec, matched by lower-cased stem equality or substring
/// containment.
#[must_use]
pub fn component_coverage(component_refs: &[String], components: &[ComponentDoc]) -> Findings {
    let mut findings = Findings::new();
    let stems: Vec<String> = components.iter().map(|c| c.stem.to_lowercase()).collect();

    let mut matched = 0usize;
    for reference in component_refs {
        let lower = reference.to_lowercase();
        if stems.iter().any(|stem| stem.contains(&lower)) {
            matched += 1;
        } else {
            findings.gap(format!(
                "Component '{reference}' referenced in page specs has no matching component spec"
            ));
        }
    }

    if !component_refs.is_empty() {
        findings.sample(Axis::Coverage, matched as f64 / component_refs.len() as f64);
    }
    findings.sample(
        Axis::Completeness,
        if components.is_empty() { 0.0 } else { 1.0 },
    );
    findings
}

/// Check 6: endpoints referenced in page specs or the state document
/// must be declared in `api-contracts.md` (exact path match).
#[must_use]
pub fn api_coverage(
    referenced: &[String],
    declared: &[String],
    contracts: &DocText,
) -> Findings {
    let mut findings = Findings::new();

    let mut matched = 0usize;
    for endpoint in referenced {
        if declared.contains(endpoint) {
            matched += 1;
        } else {
            findings.gap(format!(
                "API endpoint '{endpoint}' referenced in specs but not defined in api-contracts.md"
            ));
        }
    }

    if !referenced.is_empty() {
        findings.sample(Axis::Consistency, matched as f64 / referenced.len() as f64);
    }
    findings.sample(
        Axis::Completeness,
        if contracts.present { 1.0 } else { 0.0 },
    );
    findings
}

/// Check 7: every route and declared endpoint must appear verbatim in
/// `authorization.md`.
///
/// Empty applicability: with zero routes and zero endpoints the check
/// contributes nothing at all, regardless of whether the authorization
/// document exists. When items do exist but the document is empty, a
/// single distinct gap is reported in addition to the per-item gaps.
#[must_use]
pub fn authorization_coverage(
    ia_routes: &[String],
    declared_endpoints: &[String],
    authorization: &DocText,
) -> Findings {
    let mut findings = Findings::new();
    let all_items: Vec<&String> = ia_routes.iter().chain(declared_endpoints).collect();
    if all_items.is_empty() {
        return findings;
    }

    if authorization.text.is_empty() {
        findings.gap("Routes and endpoints exist but authorization.md is empty or missing");
    }

    let mut matched = 0usize;
    for item in &all_items {
        if authorization.text.contains(item.as_str()) {
            matched += 1;
        } else {
            findings.gap(format!("Route/endpoint '{item}' not found in authorization.md"));
        }
    }

    findings.sample(Axis::Coverage, matched as f64 / all_items.len() as f64);
    findings.sample(
        Axis::Completeness,
        if authorization.present { 1.0 } else { 0.0 },
    );
    findings
}

/// Check 8: every page spec must mention all three state keywords.
///
/// Missing keywords are listed per page as one gap naming all of them
/// together.
#[must_use]
pub fn state_coverage(pages: &[PageDoc]) -> Findings {
    let mut findings = Findings::new();

    let mut found = 0usize;
    for page in pages {
        let text = page.text.to_lowercase();
        let missing: Vec<&str> = STATE_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| !text.contains(keyword))
            .collect();
        found += STATE_KEYWORDS.len() - missing.len();
        if !missing.is_empty() {
            findings.gap(format!(
                "Page spec '{}' missing state definitions: {}",
                page.file_name,
                missing.join(", ")
            ));
        }
    }

    if !pages.is_empty() {
        let total = pages.len() * STATE_KEYWORDS.len();
        findings.sample(Axis::Coverage, found as f64 / total as f64);
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn page(file_name: &str, stem: &str, text: &str) -> PageDoc {
        PageDoc {
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            text: text.to_string(),
        }
    }

    fn component(stem: &str) -> ComponentDoc {
        ComponentDoc {
            stem: stem.to_string(),
            text: String::new(),
        }
    }

    fn present(text: &str) -> DocText {
        DocText {
            text: text.to_string(),
            present: true,
        }
    }

    #[test]
    fn missing_features_gap_and_zero_completeness() {
        let findings = feature_coverage(&[], "shop");
        assert_eq!(findings.gaps, vec!["No .feature.md files in apps/shop/features/"]);
        assert_eq!(findings.samples[0].ratio, 0.0);
    }

    #[test]
    fn present_features_score_one() {
        let findings = feature_coverage(&strings(&["checkout"]), "shop");
        assert!(findings.gaps.is_empty());
        assert_eq!(findings.samples[0].ratio, 1.0);
    }

    #[test]
    fn route_matches_page_by_derived_slug() {
        let findings = page_coverage(
            &strings(&["/dashboard/settings"]),
            &[page("dashboard-settings.md", "dashboard-settings", "")],
        );
        assert!(findings.gaps.is_empty());
        let coverage: Vec<f64> = findings
            .samples
            .iter()
            .filter(|s| s.axis == Axis::Coverage)
            .map(|s| s.ratio)
            .collect();
        assert_eq!(coverage, vec![1.0]);
    }

    #[test]
    fn unmatched_route_is_a_gap() {
        let findings = page_coverage(
            &strings(&["/billing"]),
            &[page("dashboard.md", "dashboard", "")],
        );
        assert_eq!(
            findings.gaps,
            vec!["Route '/billing' from ia-spec.md has no matching page spec"]
        );
    }

    #[test]
    fn routes_without_pages_get_summary_gap() {
        let findings = page_coverage(&strings(&["/a-route", "/b-route"]), &[]);
        assert_eq!(findings.gaps[0], "IA spec defines 2 routes but no page specs exist");
        assert_eq!(findings.gaps.len(), 3);
    }

    #[test]
    fn component_reference_matches_case_insensitively() {
        let findings = component_coverage(
            &strings(&["OrderCard", "GhostModal"]),
            &[component("ordercard")],
        );
        assert_eq!(findings.gaps.len(), 1);
        assert!(findings.gaps[0].contains("GhostModal"));
        let coverage: Vec<f64> = findings
            .samples
            .iter()
            .filter(|s| s.axis == Axis::Coverage)
            .map(|s| s.ratio)
            .collect();
        assert_eq!(coverage, vec![0.5]);
    }

    #[test]
    fn undeclared_endpoint_is_a_gap() {
        let findings = api_coverage(
            &strings(&["/api/orders", "/api/ghost"]),
            &strings(&["/api/orders"]),
            &present("GET /api/orders"),
        );
        assert_eq!(findings.gaps.len(), 1);
        assert!(findings.gaps[0].contains("/api/ghost"));
        let consistency: Vec<f64> = findings
            .samples
            .iter()
            .filter(|s| s.axis == Axis::Consistency)
            .map(|s| s.ratio)
            .collect();
        assert_eq!(consistency, vec![0.5]);
    }

    #[test]
    fn authorization_empty_applicability_contributes_nothing() {
        let findings = authorization_coverage(&[], &[], &present("anything"));
        assert!(findings.gaps.is_empty());
        assert!(findings.samples.is_empty());

        let absent = DocText::default();
        let findings = authorization_coverage(&[], &[], &absent);
        assert!(findings.gaps.is_empty());
        assert!(findings.samples.is_empty());
    }

    #[test]
    fn empty_authorization_doc_adds_single_distinct_gap() {
        let findings = authorization_coverage(
            &strings(&["/dashboard"]),
            &strings(&["/api/orders"]),
            &DocText::default(),
        );
        assert_eq!(findings.gaps.len(), 3);
        assert_eq!(
            findings.gaps[0],
            "Routes and endpoints exist but authorization.md is empty or missing"
        );
    }

    #[test]
    fn verbatim_authorization_mentions_count_as_matched() {
        let findings = authorization_coverage(
            &strings(&["/dashboard"]),
            &strings(&["/api/orders"]),
            &present("- /dashboard: Admin only\n- GET /api/orders: any role\n"),
        );
        assert!(findings.gaps.is_empty());
        let coverage: Vec<f64> = findings
            .samples
            .iter()
            .filter(|s| s.axis == Axis::Coverage)
            .map(|s| s.ratio)
            .collect();
        assert_eq!(coverage, vec![1.0]);
    }

    #[test]
    fn page_without_state_keywords_gets_one_gap_naming_all_three() {
        let findings = state_coverage(&[page("dashboard.md", "dashboard", "nothing here")]);
        assert_eq!(
            findings.gaps,
            vec!["Page spec 'dashboard.md' missing state definitions: loading, error, empty"]
        );
        assert_eq!(findings.samples[0].ratio, 0.0);
    }

    #[test]
    fn state_keywords_match_case_insensitive_substrings() {
        let text = "Shows a Loading spinner, an ERROR banner, and an empty state.";
        let findings = state_coverage(&[page("d.md", "d", text)]);
        assert!(findings.gaps.is_empty());
        assert_eq!(findings.samples[0].ratio, 1.0);
    }

    #[test]
    fn state_coverage_without_pages_contributes_nothing() {
        let findings = state_coverage(&[]);
        assert!(findings.gaps.is_empty());
        assert!(findings.samples.is_empty());
    }
}
