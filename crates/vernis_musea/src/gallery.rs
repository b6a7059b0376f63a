//! Static HTML gallery.
//!
//! Renders every variant of every art into one standalone page, with a
//! table of contents linking to each art.

use crate::types::Art;
use serde::{Deserialize, Serialize};
use vernis_carton::{content_hash, escape_attr, escape_text};
use vernis_relief::{render_with_options, RenderFlags, RenderOptions};

/// Options for gallery rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryOptions {
    /// Page title
    pub title: String,

    /// Emit `data-slot` attributes in the rendered components
    pub data_slot: bool,

    /// Stylesheet linked from the page head
    pub stylesheet: Option<String>,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            title: "Vernis Gallery".to_string(),
            data_slot: true,
            stylesheet: None,
        }
    }
}

/// Output of gallery rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryOutput {
    /// Complete HTML document
    pub html: String,

    /// Suggested filename
    pub filename: String,

    pub art_count: usize,

    pub variant_count: usize,

    /// Content hash of `html`, for cache busting
    pub hash: String,
}

const GALLERY_STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;display:flex}\
nav.musea-toc{width:14rem;padding:1rem;border-right:1px solid #e5e7eb}\
main{flex:1;padding:2rem}\
figure.musea-variant{margin:0 0 1.5rem}\
figcaption{font-size:.75rem;color:#6b7280;margin-bottom:.5rem}\
.musea-preview{padding:1rem;border:1px dashed #e5e7eb;border-radius:.5rem}";

/// Render `arts` into a standalone HTML page.
pub fn render_gallery(arts: &[Art], options: &GalleryOptions) -> GalleryOutput {
    let mut html = String::with_capacity(64 * 1024);
    let title = escape_text(&options.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!("<style>{}</style>\n", GALLERY_STYLE));
    if let Some(ref href) = options.stylesheet {
        html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape_attr(href)));
    }
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_toc(arts));

    html.push_str("<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    let mut variant_count = 0;
    for art in arts {
        variant_count += art.variants.len();
        html.push_str(&render_art(art, options));
    }
    html.push_str("</main>\n</body>\n</html>\n");

    tracing::debug!(arts = arts.len(), variants = variant_count, bytes = html.len(), "gallery rendered");

    let hash = content_hash(&html);
    GalleryOutput {
        html,
        filename: "index.html".to_string(),
        art_count: arts.len(),
        variant_count,
        hash,
    }
}

fn render_toc(arts: &[Art]) -> String {
    let mut out = String::from("<nav class=\"musea-toc\" aria-label=\"Components\">\n<ul>\n");
    for art in arts {
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>\n",
            escape_attr(&art.slug()),
            escape_text(&art.title)
        ));
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

fn render_art(art: &Art, options: &GalleryOptions) -> String {
    let slug = art.slug();
    let mut out = format!(
        "<section id=\"{}\" class=\"musea-art\" data-status=\"{}\">\n<h2>{}</h2>\n",
        escape_attr(&slug),
        art.status.as_str(),
        escape_text(&art.title)
    );
    if let Some(ref description) = art.description {
        out.push_str(&format!("<p>{}</p>\n", escape_text(description)));
    }

    for (index, variant) in art.variants.iter().enumerate() {
        let mut render = RenderOptions::with_seed(&format!("{}-{}", slug, index));
        render.flags.set(RenderFlags::DATA_SLOT, options.data_slot);
        let markup = render_with_options(&variant.node, render);

        out.push_str("<figure class=\"musea-variant\"");
        if variant.is_default {
            out.push_str(" data-default");
        }
        out.push_str(&format!(
            ">\n<figcaption>{}</figcaption>\n<div class=\"musea-preview\">{}</div>\n</figure>\n",
            escape_text(&variant.name),
            markup
        ));
    }

    out.push_str("</section>\n");
    out
}
