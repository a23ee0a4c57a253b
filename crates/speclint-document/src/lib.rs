//! Blueprint document access
//!
//! The lowest layer of the validator: reading documents from the fixed
//! blueprint directory layout.
//!
//! # Core Operations
//!
//! - **Load**: read a document's text, degrading to `""` on absence
//! - **List**: enumerate spec files in a blueprint subdirectory
//! - **Locate**: resolve logical document names to concrete paths
//!
//! Absence of a file is never an error at this layer. Missing documents
//! become gap signals in the check layer; control flow is never
//! interrupted by a failed read.

pub mod layout;
pub mod loader;

pub use layout::{AppLayout, BlueprintLayout, CORE_FILES};
pub use loader::{list_files, read_text, stem_name};
