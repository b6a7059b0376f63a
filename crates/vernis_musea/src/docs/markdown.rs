//! Markdown generation for individual arts.

use super::{DocOptions, DocOutput};
use crate::slugify;
use crate::types::{Art, ArtStatus, ArtVariant};
use vernis_relief::{render_with_options, PropValue, RenderOptions};

/// Generate Markdown documentation for a single art.
///
/// Creates a complete documentation page with:
/// - Title and description
/// - Metadata (category, tags, status)
/// - Table of contents (for many variants)
/// - Variant documentation with rendered markup
pub fn generate_component_doc(art: &Art, options: &DocOptions) -> DocOutput {
    let mut md = String::with_capacity(4096);

    md.push_str("# ");
    md.push_str(&art.title);
    md.push_str("\n\n");

    if art.status != ArtStatus::Ready {
        md.push_str(&format_status_badge(art.status));
        md.push_str("\n\n");
    }

    if let Some(ref desc) = art.description {
        md.push_str(desc);
        md.push_str("\n\n");
    }

    if options.include_metadata {
        md.push_str(&generate_metadata_section(art));
    }

    if options.include_toc && art.variants.len() >= options.toc_threshold {
        md.push_str(&generate_toc(&art.variants));
    }

    md.push_str("## Variants\n\n");
    for (index, variant) in art.variants.iter().enumerate() {
        // Ids are seeded per variant so every snippet is reproducible on its own
        let seed = format!("{}-{}", art.slug(), index);
        md.push_str(&generate_variant_doc(variant, &seed, options));
    }

    if let Some(kind) = art.component {
        md.push_str("## Usage\n\n");
        md.push_str("```sh\n");
        md.push_str(&format!("vernis render {} --props '{{}}'\n", kind));
        md.push_str("```\n\n");
    }

    DocOutput {
        markdown: md,
        filename: format!("{}.md", art.slug()),
        title: art.title.clone(),
        category: art.category.clone(),
        variant_count: art.variants.len(),
    }
}

/// Generate Markdown documentation for a single variant.
pub fn generate_variant_doc(variant: &ArtVariant, seed: &str, options: &DocOptions) -> String {
    let mut md = String::with_capacity(512);

    md.push_str("### ");
    md.push_str(&variant.name);
    if variant.is_default {
        md.push_str(" `default`");
    }
    md.push_str("\n\n");

    if !variant.args.is_empty() {
        md.push_str("**Args:**\n\n");
        md.push_str("| Prop | Value |\n");
        md.push_str("|------|-------|\n");
        for (key, value) in variant.args.iter() {
            let value_str = match value {
                PropValue::Str(s) => format!("`\"{}\"`", s),
                PropValue::Bool(b) => format!("`{}`", b),
                PropValue::Number(n) => format!("`{}`", n),
                PropValue::Null => "`null`".to_string(),
            };
            md.push_str(&format!("| `{}` | {} |\n", key, value_str));
        }
        md.push('\n');
    }

    if options.include_markup {
        let html = render_with_options(&variant.node, RenderOptions::with_seed(seed));
        if !html.is_empty() {
            md.push_str("```html\n");
            md.push_str(&html);
            md.push_str("\n```\n\n");
        }
    }

    md.push_str("---\n\n");
    md
}

fn generate_metadata_section(art: &Art) -> String {
    let mut md = String::new();

    let has_metadata = art.category.is_some() || !art.tags.is_empty() || art.order.is_some();
    if !has_metadata {
        return md;
    }

    md.push_str("| | |\n");
    md.push_str("|---|---|\n");

    if let Some(ref category) = art.category {
        md.push_str(&format!("| **Category** | `{}` |\n", category));
    }

    if !art.tags.is_empty() {
        let tags: Vec<String> = art.tags.iter().map(|t| format!("`{}`", t)).collect();
        md.push_str(&format!("| **Tags** | {} |\n", tags.join(" ")));
    }

    if let Some(kind) = art.component {
        md.push_str(&format!("| **Component** | `{}` |\n", kind));
    }

    md.push_str(&format!("| **Variants** | {} |\n", art.variants.len()));
    md.push('\n');
    md
}

fn generate_toc(variants: &[ArtVariant]) -> String {
    let mut md = String::new();

    md.push_str("## Table of Contents\n\n");
    for variant in variants {
        md.push_str(&format!("- [{}](#{})", variant.name, slugify(&variant.name)));
        if variant.is_default {
            md.push_str(" *(default)*");
        }
        md.push('\n');
    }
    md.push('\n');
    md
}

fn format_status_badge(status: ArtStatus) -> String {
    match status {
        ArtStatus::Draft => "> **Status:** 🚧 Draft".to_string(),
        ArtStatus::Deprecated => "> **Status:** ⚠️ Deprecated".to_string(),
        ArtStatus::Ready => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtVariant;
    use vernis_atelier::ComponentKind;
    use vernis_relief::Props;

    #[test]
    fn test_format_status_badge() {
        assert!(format_status_badge(ArtStatus::Draft).contains("Draft"));
        assert!(format_status_badge(ArtStatus::Deprecated).contains("Deprecated"));
        assert!(format_status_badge(ArtStatus::Ready).is_empty());
    }

    #[test]
    fn test_variant_doc() {
        let variant = ArtVariant::from_registry(
            ComponentKind::Label,
            "Default",
            Props::new().with("for", "email"),
            Some("Email"),
        )
        .default_variant();
        let md = generate_variant_doc(&variant, "label-0", &DocOptions::default());
        insta::assert_snapshot!(md, @r#"
        ### Default `default`

        **Args:**

        | Prop | Value |
        |------|-------|
        | `for` | `"email"` |

        ```html
        <label data-slot="label" class="text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70" for="email">Email</label>
        ```

        ---
        "#);
    }

    #[test]
    fn test_markup_can_be_omitted() {
        let variant = ArtVariant::composed("Plain", "text");
        let options = DocOptions {
            include_markup: false,
            ..DocOptions::default()
        };
        let md = generate_variant_doc(&variant, "x", &options);
        assert_eq!(md, "### Plain\n\n---\n\n");
    }

    #[test]
    fn test_toc_threshold() {
        let mut art = Art::new("Many");
        for i in 0..5 {
            art = art.variant(ArtVariant::composed(&format!("Variant {i}"), "x"));
        }
        let doc = generate_component_doc(&art, &DocOptions::default());
        assert!(doc.markdown.contains("## Table of Contents"));
        assert!(doc.markdown.contains("- [Variant 3](#variant-3)"));

        let few = Art::new("Few").variant(ArtVariant::composed("Only", "x"));
        let doc = generate_component_doc(&few, &DocOptions::default());
        assert!(!doc.markdown.contains("## Table of Contents"));
    }

    #[test]
    fn test_draft_badge() {
        let art = Art::new("Wip").status(ArtStatus::Draft);
        let doc = generate_component_doc(&art, &DocOptions::default());
        assert!(doc.markdown.starts_with("# Wip\n\n> **Status:** 🚧 Draft\n\n"));
    }
}
