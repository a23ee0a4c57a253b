//! Loaded document context for one validation run
//!
//! All file I/O happens up front in [`AppDocuments::load`]; the checks
//! themselves are pure over this snapshot. Missing files load as empty
//! text with `present = false`, so absence is observable without
//! control-flow interruption.

use speclint_document::{list_files, read_text, stem_name, AppLayout, BlueprintLayout, CORE_FILES};

/// A core document's text and whether its file exists.
#[derive(Debug, Clone, Default)]
pub struct DocText {
    /// Raw text; empty when the file is missing or unreadable.
    pub text: String,
    /// Whether the file exists on disk.
    pub present: bool,
}

impl DocText {
    fn load(layout: &AppLayout, file_name: &str) -> Self {
        let path = layout.core_file(file_name);
        Self {
            text: read_text(&path),
            present: path.is_file(),
        }
    }
}

/// One page spec file.
#[derive(Debug, Clone)]
pub struct PageDoc {
    /// File name with extension, used in messages.
    pub file_name: String,
    /// File stem used for slug matching.
    pub stem: String,
    /// Raw text.
    pub text: String,
}

/// One component spec file.
#[derive(Debug, Clone)]
pub struct ComponentDoc {
    /// File stem used for reference matching.
    pub stem: String,
    /// Raw text.
    pub text: String,
}

/// Presence record for one required core file.
#[derive(Debug, Clone)]
pub struct CoreFile {
    /// Core file name, e.g. `ia-spec.md`.
    pub name: &'static str,
    /// Whether the file exists.
    pub present: bool,
}

/// Snapshot of every document a validation run reads.
#[derive(Debug, Clone)]
pub struct AppDocuments {
    /// App directory name under `apps/`.
    pub app_name: String,
    /// `suite/domain-model.md` text.
    pub suite_domain_text: String,
    /// `suite/role-permission-matrix.md` text.
    pub suite_role_text: String,
    /// `suite/design-system.md` text.
    pub suite_design_text: String,
    /// `domain-refinement.md` text and presence.
    pub domain_refinement: DocText,
    /// `role-refinement.md` text and presence.
    pub role_refinement: DocText,
    /// `ia-spec.md` text.
    pub ia_text: String,
    /// `state-interaction.md` text.
    pub state_text: String,
    /// `api-contracts.md` text and presence.
    pub api_contracts: DocText,
    /// `authorization.md` text and presence.
    pub authorization: DocText,
    /// Stems of `.feature.md` files under `features/`.
    pub feature_stems: Vec<String>,
    /// Page specs under `pages/`, sorted by file name.
    pub pages: Vec<PageDoc>,
    /// Component specs under `components/`, sorted by file name.
    pub components: Vec<ComponentDoc>,
    /// Presence of each required core file, in canonical order.
    pub core_files: Vec<CoreFile>,
}

impl AppDocuments {
    /// Read every document for `app` from the blueprint tree.
    #[must_use]
    pub fn load(layout: &BlueprintLayout, app: &str) -> Self {
        let app_layout = layout.app(app);

        let pages = list_files(&app_layout.pages_dir(), ".md")
            .into_iter()
            .map(|path| PageDoc {
                file_name: path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string(),
                stem: stem_name(&path),
                text: read_text(&path),
            })
            .collect();

        let components = list_files(&app_layout.components_dir(), ".md")
            .into_iter()
            .map(|path| ComponentDoc {
                stem: stem_name(&path),
                text: read_text(&path),
            })
            .collect();

        let feature_stems = list_files(&app_layout.features_dir(), ".feature.md")
            .iter()
            .map(|path| stem_name(path))
            .collect();

        let core_files = CORE_FILES
            .iter()
            .map(|name| CoreFile {
                name,
                present: app_layout.core_file(name).is_file(),
            })
            .collect();

        Self {
            app_name: app_layout.name().to_string(),
            suite_domain_text: read_text(&layout.suite_domain_model()),
            suite_role_text: read_text(&layout.suite_role_matrix()),
            suite_design_text: read_text(&layout.suite_design_system()),
            domain_refinement: DocText::load(&app_layout, "domain-refinement.md"),
            role_refinement: DocText::load(&app_layout, "role-refinement.md"),
            ia_text: read_text(&app_layout.core_file("ia-spec.md")),
            state_text: read_text(&app_layout.core_file("state-interaction.md")),
            api_contracts: DocText::load(&app_layout, "api-contracts.md"),
            authorization: DocText::load(&app_layout, "authorization.md"),
            feature_stems,
            pages,
            components,
            core_files,
        }
    }

    /// Concatenated text of every page spec, one per line group.
    #[must_use]
    pub fn all_page_text(&self) -> String {
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(&page.text);
            text.push('\n');
        }
        text
    }

    /// Concatenated text of every component spec.
    #[must_use]
    pub fn all_component_text(&self) -> String {
        let mut text = String::new();
        for component in &self.components {
            text.push_str(&component.text);
            text.push('\n');
        }
        text
    }
}
