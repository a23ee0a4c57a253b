//! Extraction rules, one named pattern per surface form
//!
//! Patterns are compiled once via [`once_cell::sync::Lazy`]. All
//! captures are trimmed and deduplicated preserving first-seen order.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("extraction pattern compiles")
}

/// Trim captures, drop empties, dedupe preserving first-seen order.
fn normalized<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen: IndexSet<String> = IndexSet::new();
    for item in items {
        let name = item.as_ref().trim();
        if !name.is_empty() {
            seen.insert(name.to_string());
        }
    }
    seen.into_iter().collect()
}

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

// H1-H4 heading with optional labelled prefix, name stays on the line.
static ENTITY_HEADING: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?mi)^#{1,4}[ \t]+(?:entity:[ \t]*)?(\w[\w \t-]*\w)"));
static ROLE_HEADING: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?mi)^#{1,4}[ \t]+(?:role:[ \t]*)?(\w[\w \t-]*\w)"));

// Bolded list item: - **Name**
static BOLD_ITEM: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^[ \t]*[-*][ \t]+\*\*(\w[\w \t-]*\w)\*\*"));

// First table row; cells are split out of the capture.
static TABLE_ROW: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^\|[^|\n]*\|(.+)\|"));

// Path-like token: /segment, /seg/:param, /a/b.c
static ROUTE: Lazy<Regex> = Lazy::new(|| pattern(r"(?:^|\s)(/[\w/:.\-]+)"));

// HTTP verb followed by a path-like token; verb is discarded.
static ENDPOINT: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)\b(?:GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)\s+(/[\w/:.\-]+)")
});

// Angle-bracket tag whose name ends in a known UI-component suffix.
// A nonempty prefix is required: <OrderCard> matches, <Card> does not.
static COMPONENT_TAG: Lazy<Regex> = Lazy::new(|| {
    pattern(concat!(
        r"<(\w+(?:Card|Button|Table|List|Form|Modal|Panel|Widget|Nav|Header|Footer|Sidebar",
        r"|Menu|Dialog|Drawer|Badge|Alert|Banner|Chart|Grid|Layout|Container|Section|View",
        r"|Page|Tab|Tabs|Input|Select|Dropdown|Picker|Search|Filter|Sort|Pagination|Avatar",
        r"|Icon|Image|Logo|Link|Tooltip|Popover|Snackbar|Toast|Spinner|Loader|Skeleton",
        r"|Placeholder|Divider|Separator|Breadcrumb|Stepper|Progress|Rating|Switch|Toggle",
        r"|Checkbox|Radio|Slider|Upload|Calendar|Timeline|Accordion|Carousel|Collapse|Tree",
        r")\w*)",
    ))
});
static COMPONENT_HEADING: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?mi)^#{1,4}[ \t]+component:[ \t]*(\w+)"));
static COMPONENT_TICK: Lazy<Regex> =
    Lazy::new(|| pattern(r"`(\w+(?:Component|Widget|Card|Table|List|Form|Modal|Panel))`"));

// `--token-name` and dotted list-item tokens like color.primary
static TOKEN_CSS: Lazy<Regex> = Lazy::new(|| pattern(r"`--([\w\-]+)`"));
static TOKEN_DOTTED: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^[ \t]*[-*][ \t]+`?([\w\-]+(?:\.[\w\-]+)+)`?"));

// Labelled navigation section followed by its list items.
static CONNECTED_SECTION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?i)(?:Connected\s+Pages|Navigation|Links\s+To)[:\s]*\n((?:\s*[-*].*\n)*)")
});
static CONNECTED_ITEM: Lazy<Regex> = Lazy::new(|| pattern(r"[-*]\s+\[?([^\]\n]+)\]?"));

/// Entity names from domain-model markdown.
///
/// Matches H1-H4 headings with an optional `Entity:` prefix
/// (case-insensitive) and bolded list items (`- **Order**`).
#[must_use]
pub fn entities(text: &str) -> Vec<String> {
    let mut found = captures(&ENTITY_HEADING, text);
    found.extend(captures(&BOLD_ITEM, text));
    normalized(found)
}

/// Role names from role/permission-matrix markdown.
///
/// Same heading/bold rules as [`entities`] with a `Role:` prefix, plus
/// the cell values of the first table row (implicit role columns in a
/// permission matrix header).
#[must_use]
pub fn roles(text: &str) -> Vec<String> {
    let mut found = captures(&ROLE_HEADING, text);
    found.extend(captures(&BOLD_ITEM, text));
    if let Some(caps) = TABLE_ROW.captures(text) {
        if let Some(row) = caps.get(1) {
            found.extend(row.as_str().split('|').map(|c| c.trim().to_string()));
        }
    }
    normalized(found)
}

/// Route paths: any token starting `/` over word characters, `/`, `:`,
/// `.`, `-` (covers literal and parameterized segments).
#[must_use]
pub fn routes(text: &str) -> Vec<String> {
    normalized(captures(&ROUTE, text))
}

/// API endpoint paths: an HTTP verb token immediately followed by a
/// path-like token. The verb is discarded; endpoint identity is
/// path-based, an intentional simplification.
#[must_use]
pub fn api_endpoints(text: &str) -> Vec<String> {
    normalized(captures(&ENDPOINT, text))
}

/// Component references from page-spec markdown.
///
/// Union of three surface forms: angle-bracket tags ending in a known
/// UI suffix, `Component:`-labelled headings, and back-ticked
/// identifiers ending in Component/Widget/Card/Table/List/Form/Modal/
/// Panel.
#[must_use]
pub fn component_refs(text: &str) -> Vec<String> {
    let mut found = captures(&COMPONENT_TAG, text);
    found.extend(captures(&COMPONENT_HEADING, text));
    found.extend(captures(&COMPONENT_TICK, text));
    normalized(found)
}

/// Design token names: back-ticked CSS custom properties (`--name`)
/// and dotted list-item tokens (`namespace.name`).
#[must_use]
pub fn design_tokens(text: &str) -> Vec<String> {
    let mut found = captures(&TOKEN_CSS, text);
    found.extend(captures(&TOKEN_DOTTED, text));
    normalized(found)
}

/// Navigation edge targets from a labelled section.
///
/// Locates a `Connected Pages` / `Navigation` / `Links To` section and
/// extracts the list-item targets beneath it until the list ends.
/// Absence of such a section yields an empty list, which is not a gap
/// by itself.
#[must_use]
pub fn connected_pages(text: &str) -> Vec<String> {
    let Some(caps) = CONNECTED_SECTION.captures(text) else {
        return Vec::new();
    };
    let section = caps.get(1).map_or("", |m| m.as_str());
    normalized(captures(&CONNECTED_ITEM, section))
}
