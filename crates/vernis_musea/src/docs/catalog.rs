//! Catalog and index generation for art collections.

use super::{CatalogOutput, DocOptions};
use crate::slugify;
use crate::types::{Art, ArtStatus};
use serde::{Deserialize, Serialize};
use vernis_carton::FxHashMap;

/// Entry in a component catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: String,

    pub description: Option<String>,

    /// Category (e.g., "Forms", "Overlay").
    pub category: Option<String>,

    /// Tags for filtering.
    pub tags: Vec<String>,

    pub status: ArtStatus,

    /// Number of variants.
    pub variant_count: usize,

    /// Path to the component documentation.
    pub doc_path: String,

    /// Registry name, when the art documents a registry component.
    pub component: Option<String>,

    /// Display order.
    pub order: Option<u32>,
}

impl CatalogEntry {
    /// Create a catalog entry from an art.
    pub fn from_art(art: &Art, base_path: &str) -> Self {
        let slug = art.slug();
        let doc_path = if base_path.is_empty() {
            format!("{}.md", slug)
        } else {
            format!("{}/{}.md", base_path.trim_end_matches('/'), slug)
        };

        Self {
            title: art.title.clone(),
            description: art.description.clone(),
            category: art.category.clone(),
            tags: art.tags.clone(),
            status: art.status,
            variant_count: art.variants.len(),
            doc_path,
            component: art.component.map(|k| k.as_str().to_string()),
            order: art.order,
        }
    }
}

/// Generate the catalog landing page.
///
/// Categories keep the order in which they first appear in `entries`, so a
/// catalog built from [`crate::builtin_arts`] follows the registry order with
/// page sections last.
pub fn generate_catalog(entries: &[CatalogEntry], options: &DocOptions) -> CatalogOutput {
    let mut md = String::with_capacity(8192);

    md.push_str("# ");
    md.push_str(options.title.as_deref().unwrap_or("Component Catalog"));
    md.push_str("\n\n");

    let groups = group_by(entries, |e| e.category.as_deref().into_iter());
    let categories: Vec<String> = groups.iter().map(|(c, _)| c.to_string()).collect();
    md.push_str(&format!(
        "> **{}** components across **{}** categories ({})\n\n",
        entries.len(),
        categories.len(),
        status_summary(entries.iter())
    ));

    for (category, members) in &groups {
        md.push_str(&format!("## {}\n\n", category));
        md.push_str(&component_table(members));
    }

    let uncategorized: Vec<_> = entries.iter().filter(|e| e.category.is_none()).collect();
    if !uncategorized.is_empty() {
        md.push_str("## Uncategorized\n\n");
        md.push_str(&component_table(&uncategorized));
    }

    CatalogOutput {
        markdown: md,
        filename: "README.md".to_string(),
        component_count: entries.len(),
        categories,
        tags: sorted_tags(entries.iter()),
    }
}

/// Generate the index page of one category.
pub fn generate_category_index(
    entries: &[CatalogEntry],
    category: &str,
    options: &DocOptions,
) -> CatalogOutput {
    let members: Vec<_> = entries
        .iter()
        .filter(|e| e.category.as_deref() == Some(category))
        .collect();
    let tags = sorted_tags(members.iter().copied());

    let mut md = format!(
        "# {}\n\n> **{}** components ({})\n\n",
        category,
        members.len(),
        status_summary(members.iter().copied())
    );
    md.push_str(&component_table(&members));

    if options.include_metadata && !tags.is_empty() {
        let list: Vec<_> = tags.iter().map(|t| format!("`{}`", t)).collect();
        md.push_str(&format!("**Tags:** {}\n", list.join(" ")));
    }

    CatalogOutput {
        markdown: md,
        filename: format!("{}.md", slugify(category)),
        component_count: members.len(),
        categories: vec![category.to_string()],
        tags,
    }
}

/// Generate the tags index: one line per tag linking every tagged component.
pub fn generate_tags_index(entries: &[CatalogEntry]) -> CatalogOutput {
    let mut groups = group_by(entries, |e| e.tags.iter().map(String::as_str));
    groups.sort_unstable_by_key(|(tag, _)| *tag);

    let mut md = format!("# Tags Index\n\n> **{}** tags\n\n", groups.len());
    md.push_str("| Tag | Components |\n");
    md.push_str("|-----|------------|\n");
    for (tag, members) in &groups {
        let links: Vec<_> = members
            .iter()
            .map(|e| format!("[{}]({})", e.title, e.doc_path))
            .collect();
        md.push_str(&format!("| `{}` | {} |\n", tag, links.join(", ")));
    }
    md.push('\n');

    CatalogOutput {
        markdown: md,
        filename: "tags.md".to_string(),
        component_count: entries.len(),
        categories: vec![],
        tags: groups.iter().map(|(t, _)| t.to_string()).collect(),
    }
}

/// Table of entries, ordered ones first, then by title. The `Registry`
/// column names the component as `vernis render` expects it.
fn component_table(entries: &[&CatalogEntry]) -> String {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        (a.order.is_none(), a.order, &a.title).cmp(&(b.order.is_none(), b.order, &b.title))
    });

    let mut md = String::from("| Component | Registry | Description | Variants | Status |\n");
    md.push_str("|-----------|----------|-------------|----------|--------|\n");
    for entry in sorted {
        let registry = entry
            .component
            .as_deref()
            .map_or_else(|| "-".to_string(), |c| format!("`{}`", c));
        md.push_str(&format!(
            "| [{}]({}) | {} | {} | {} | {} |\n",
            entry.title,
            entry.doc_path,
            registry,
            short_description(entry.description.as_deref()),
            entry.variant_count,
            entry.status.as_str()
        ));
    }
    md.push('\n');
    md
}

const DESCRIPTION_WIDTH: usize = 50;

fn short_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return "-".to_string();
    };
    match description.char_indices().nth(DESCRIPTION_WIDTH) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

/// `"3 ready, 1 draft"`; statuses with no entries are omitted.
fn status_summary<'a>(entries: impl Iterator<Item = &'a CatalogEntry>) -> String {
    let mut counts = [0usize; 3];
    for entry in entries {
        counts[entry.status as usize] += 1;
    }
    [ArtStatus::Draft, ArtStatus::Ready, ArtStatus::Deprecated]
        .into_iter()
        .filter(|status| counts[*status as usize] > 0)
        .map(|status| format!("{} {}", counts[status as usize], status.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn sorted_tags<'a>(entries: impl Iterator<Item = &'a CatalogEntry>) -> Vec<String> {
    let mut tags: Vec<_> = entries.flat_map(|e| e.tags.iter().cloned()).collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Group entries under every key `keys` yields, in first-seen key order.
fn group_by<'a, K>(
    entries: &'a [CatalogEntry],
    keys: impl Fn(&'a CatalogEntry) -> K,
) -> Vec<(&'a str, Vec<&'a CatalogEntry>)>
where
    K: Iterator<Item = &'a str>,
{
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<&CatalogEntry>)> = Vec::new();
    for entry in entries {
        for key in keys(entry) {
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(entry);
        }
    }
    groups
}
