//! # vernis_musea
//!
//! Musea - Component gallery and documentation for Vernis.
//!
//! ## Name Origin
//!
//! **Musea** (plural of museum) represents a gallery space where art is
//! displayed and documented. Similarly, `vernis_musea` shows every Vernis
//! component family in isolation, one variant at a time.
//!
//! ## Concepts
//!
//! - **Art**: A documented component and its variations (replaces "story")
//! - **Variant**: One rendered variation, with the props it was built from
//! - **Gallery**: Standalone HTML page displaying every art
//! - **Catalog**: Markdown index of arts grouped by category
//!
//! ## Usage
//!
//! ```rust
//! use vernis_musea::{builtin_arts, render_gallery, GalleryOptions};
//!
//! let arts = builtin_arts();
//! let gallery = render_gallery(&arts, &GalleryOptions::default());
//! assert_eq!(gallery.filename, "index.html");
//! assert_eq!(gallery.art_count, arts.len());
//! ```

mod builtin;
pub mod docs;
pub mod gallery;
pub mod types;

pub use builtin::{builtin_arts, component_art};
pub use gallery::{render_gallery, GalleryOptions, GalleryOutput};
pub use types::{Art, ArtStatus, ArtVariant};

/// Convert a string to a URL-safe slug.
#[inline]
pub fn slugify(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docs::{generate_catalog, CatalogEntry, DocOptions};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Landing page"), "landing-page");
        assert_eq!(slugify("my-button"), "my-button");
        assert_eq!(slugify("Button_Primary"), "button-primary");
    }

    #[test]
    fn test_full_workflow() {
        let arts = builtin_arts();

        let entries: Vec<_> = arts
            .iter()
            .map(|art| CatalogEntry::from_art(art, "components"))
            .collect();
        let catalog = generate_catalog(&entries, &DocOptions::default());
        assert!(catalog.markdown.contains("[Button](components/button.md)"));
        assert!(catalog.categories.contains(&"Overlay".to_string()));

        let gallery = render_gallery(&arts, &GalleryOptions::default());
        assert!(gallery.html.contains("data-slot=\"dialog-trigger\""));
        assert!(gallery.html.contains("role=\"tablist\""));
    }
}
