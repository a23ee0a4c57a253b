//! The eleven cross-reference checks and their runner
//!
//! Each check is an independent pure function over extracted facts
//! returning its own [`Findings`]; [`run_all`] performs the fact
//! extraction once and merges the results in validation order. Gap and
//! contradiction ordering therefore equals check execution order.

pub mod completeness;
pub mod consistency;
pub mod coverage;

use crate::context::AppDocuments;
use crate::findings::Findings;
use speclint_extract as extract;
use tracing::debug;

pub use completeness::core_file_completeness;
pub use consistency::{design_token_compliance, entity_consistency, navigation_consistency, role_consistency};
pub use coverage::{
    api_coverage, authorization_coverage, component_coverage, feature_coverage, page_coverage,
    state_coverage,
};

/// Run every check against a loaded document snapshot.
#[must_use]
pub fn run_all(docs: &AppDocuments) -> Findings {
    let suite_entities = extract::entities(&docs.suite_domain_text);
    let app_entities = extract::entities(&docs.domain_refinement.text);
    let suite_roles = extract::roles(&docs.suite_role_text);
    let app_roles = extract::roles(&docs.role_refinement.text);
    let ia_routes = extract::routes(&docs.ia_text);
    let all_page_text = docs.all_page_text();
    let component_refs = extract::component_refs(&all_page_text);
    let referenced_endpoints =
        extract::api_endpoints(&format!("{}{}", all_page_text, docs.state_text));
    let declared_endpoints = extract::api_endpoints(&docs.api_contracts.text);
    let defined_tokens = extract::design_tokens(&docs.suite_design_text);

    debug!(
        app = %docs.app_name,
        suite_entities = suite_entities.len(),
        app_entities = app_entities.len(),
        routes = ia_routes.len(),
        components = component_refs.len(),
        endpoints = declared_endpoints.len(),
        "extracted facts"
    );

    let mut findings = Findings::new();
    findings.extend(entity_consistency(
        &suite_entities,
        &app_entities,
        &docs.domain_refinement,
        &docs.app_name,
    ));
    findings.extend(role_consistency(
        &suite_roles,
        &app_roles,
        &docs.role_refinement,
        &docs.app_name,
    ));
    findings.extend(feature_coverage(&docs.feature_stems, &docs.app_name));
    findings.extend(page_coverage(&ia_routes, &docs.pages));
    findings.extend(component_coverage(&component_refs, &docs.components));
    findings.extend(api_coverage(
        &referenced_endpoints,
        &declared_endpoints,
        &docs.api_contracts,
    ));
    findings.extend(authorization_coverage(
        &ia_routes,
        &declared_endpoints,
        &docs.authorization,
    ));
    findings.extend(state_coverage(&docs.pages));
    findings.extend(navigation_consistency(&docs.pages));
    findings.extend(design_token_compliance(&defined_tokens, &docs.components));
    findings.extend(core_file_completeness(&docs.core_files, &docs.app_name));

    debug!(
        gaps = findings.gaps.len(),
        contradictions = findings.contradictions.len(),
        samples = findings.samples.len(),
        "checks complete"
    );
    findings
}
