//! HTML tag and attribute configuration.
//!
//! Compile-time tables consulted by the renderer (void elements, boolean
//! attributes) and by the prop sanitizer (attributes that carry semantics and
//! must always reach the DOM).

use phf::{phf_set, Set};

/// Elements that never have children or a closing tag.
static VOID_TAGS: Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
};

/// Attributes whose presence alone means `true`.
static BOOLEAN_ATTRS: Set<&'static str> = phf_set! {
    "allowfullscreen", "async", "autofocus", "autoplay", "checked", "controls",
    "default", "defer", "disabled", "formnovalidate", "hidden", "inert", "ismap",
    "itemscope", "loop", "multiple", "muted", "nomodule", "novalidate", "open",
    "playsinline", "readonly", "required", "reversed", "selected",
};

/// Attributes required for accessibility or form semantics.
///
/// None of these may ever be removed before an element reaches the DOM.
static SEMANTIC_ATTRS: Set<&'static str> = phf_set! {
    "disabled", "selected", "required", "readonly", "name", "value", "type",
    "id", "role", "tabindex", "href", "for", "title", "lang", "dir", "hidden",
    "placeholder", "autocomplete", "min", "max", "step", "form",
};

/// SVG elements the icon set uses; they render in the SVG namespace.
static SVG_TAGS: Set<&'static str> = phf_set! {
    "svg", "path", "circle", "line", "polyline", "polygon", "rect", "g",
};

/// Check if a tag is a void element.
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Check if an attribute is a boolean attribute.
#[inline]
pub fn is_boolean_attr(name: &str) -> bool {
    BOOLEAN_ATTRS.contains(name)
}

/// Check if an attribute carries accessibility or form semantics.
///
/// `aria-*` attributes always count as semantic.
#[inline]
pub fn is_semantic_attr(name: &str) -> bool {
    SEMANTIC_ATTRS.contains(name) || name.starts_with("aria-")
}

/// Check if a tag belongs to the SVG namespace.
#[inline]
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAGS.contains(tag)
}

/// Check if an attribute name is safe to emit during server rendering.
///
/// Rejects names containing whitespace, quotes, `>`, `/`, `=` or control
/// characters, which could break out of the tag.
pub fn is_safe_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'"' | b'\'' | b'>' | b'/' | b'=')
                && !b.is_ascii_control()
        })
}
