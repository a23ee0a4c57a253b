//! Heuristic fact extraction
//!
//! Pulls structured facts (entity names, role names, routes, API
//! endpoints, component references, design tokens, navigation edges)
//! out of loosely formatted markdown.
//!
//! This is deliberately pattern matching, not parsing: blueprint
//! documents are free-form prose, and the extractors must tolerate
//! malformed or partial markdown without failing. Each extractor is a
//! pure function `&str -> Vec<String>` whose matching policy is
//! documented on the function itself, so the rule set can be audited
//! and extended without touching the check layer.
//!
//! Every returned list is deduplicated preserving first occurrence in
//! the source text, and every entry is whitespace-trimmed. The same
//! text always yields the same list in the same order.

pub mod extractors;
pub mod normalize;

pub use extractors::{
    api_endpoints, component_refs, connected_pages, design_tokens, entities, roles, routes,
};
pub use normalize::{nav_slug, route_slug, slug_matches};
