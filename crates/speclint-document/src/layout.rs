//! Fixed blueprint directory layout
//!
//! A blueprint tree has a suite-level document set shared across apps
//! and one directory per app:
//!
//! ```text
//! spec/
//!   suite/
//!     domain-model.md
//!     role-permission-matrix.md
//!     design-system.md
//!   apps/<app>/
//!     archetype.md ... authorization.md   (core files)
//!     features/ pages/ components/
//!   validation/reports/<app>/             (validator output)
//! ```

use std::path::{Path, PathBuf};

/// Core per-app documents every app is expected to carry.
pub const CORE_FILES: [&str; 7] = [
    "archetype.md",
    "domain-refinement.md",
    "role-refinement.md",
    "ia-spec.md",
    "state-interaction.md",
    "api-contracts.md",
    "authorization.md",
];

/// Root of a blueprint tree and its suite-level document paths.
#[derive(Debug, Clone)]
pub struct BlueprintLayout {
    root: PathBuf,
}

impl BlueprintLayout {
    /// Layout rooted at `root` (the `--spec-dir`).
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Blueprint root directory.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Suite-level domain model document.
    #[must_use]
    pub fn suite_domain_model(&self) -> PathBuf {
        self.root.join("suite").join("domain-model.md")
    }

    /// Suite-level role/permission matrix document.
    #[must_use]
    pub fn suite_role_matrix(&self) -> PathBuf {
        self.root.join("suite").join("role-permission-matrix.md")
    }

    /// Suite-level design system document.
    #[must_use]
    pub fn suite_design_system(&self) -> PathBuf {
        self.root.join("suite").join("design-system.md")
    }

    /// Layout for one app under `apps/<name>/`.
    #[must_use]
    pub fn app(&self, name: &str) -> AppLayout {
        AppLayout {
            dir: self.root.join("apps").join(name),
            name: name.to_string(),
        }
    }

    /// Report directory for one app: `validation/reports/<name>/`.
    #[must_use]
    pub fn report_dir(&self, name: &str) -> PathBuf {
        self.root.join("validation").join("reports").join(name)
    }
}

/// Document paths for a single app.
#[derive(Debug, Clone)]
pub struct AppLayout {
    dir: PathBuf,
    name: String,
}

impl AppLayout {
    /// App name (the directory name under `apps/`).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// App directory.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a core document by file name.
    #[must_use]
    pub fn core_file(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// BDD feature file directory.
    #[must_use]
    pub fn features_dir(&self) -> PathBuf {
        self.dir.join("features")
    }

    /// Page spec directory.
    #[must_use]
    pub fn pages_dir(&self) -> PathBuf {
        self.dir.join("pages")
    }

    /// Component spec directory.
    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.dir.join("components")
    }
}
