//! Documentation generation for arts.
//!
//! This module generates Markdown documentation from [`Art`](crate::Art)s,
//! including component pages, a catalog grouped by category, and a tags index.
//!
//! # Example
//!
//! ```rust
//! use vernis_atelier::ComponentKind;
//! use vernis_musea::component_art;
//! use vernis_musea::docs::{generate_component_doc, DocOptions};
//!
//! let art = component_art(ComponentKind::Badge);
//! let output = generate_component_doc(&art, &DocOptions::default());
//! assert!(output.markdown.starts_with("# Badge\n"));
//! assert_eq!(output.filename, "badge.md");
//! ```

mod catalog;
mod markdown;

pub use catalog::{generate_catalog, generate_category_index, generate_tags_index, CatalogEntry};
pub use markdown::{generate_component_doc, generate_variant_doc};

use serde::{Deserialize, Serialize};

/// Options for documentation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocOptions {
    /// Include the rendered HTML of each variant.
    #[serde(default = "default_true")]
    pub include_markup: bool,

    /// Include metadata (tags, category, status).
    #[serde(default = "default_true")]
    pub include_metadata: bool,

    /// Include a table of contents for arts with many variants.
    #[serde(default = "default_true")]
    pub include_toc: bool,

    /// Minimum number of variants to show the table of contents.
    #[serde(default = "default_toc_threshold")]
    pub toc_threshold: usize,

    /// Base path for component links.
    #[serde(default)]
    pub base_path: String,

    /// Custom catalog title.
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            include_markup: true,
            include_metadata: true,
            include_toc: true,
            toc_threshold: default_toc_threshold(),
            base_path: String::new(),
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_toc_threshold() -> usize {
    5
}

/// Output of documentation generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocOutput {
    /// Generated Markdown content.
    pub markdown: String,

    /// Suggested filename for the documentation.
    pub filename: String,

    pub title: String,

    pub category: Option<String>,

    /// Number of variants documented.
    pub variant_count: usize,
}

/// Output of catalog generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOutput {
    /// Generated Markdown content.
    pub markdown: String,

    /// Suggested filename.
    pub filename: String,

    /// Number of components in catalog.
    pub component_count: usize,

    /// Categories found.
    pub categories: Vec<String>,

    /// All tags found.
    pub tags: Vec<String>,
}
