//! Server rendering.
//!
//! Rendering is two passes: [`expand`] turns components, providers and slots
//! into plain elements, then the writer serialises the expanded tree.

use crate::{
    merge_slot_attrs, Element, ElementHandle, Node, PropValue, RenderContext, RenderFlags,
    RenderOptions,
};
use vernis_carton::{escape_attr, escape_text, is_boolean_attr, is_safe_attr_name, is_void_tag};

/// Render with default options.
pub fn render_to_string(node: &Node) -> String {
    render_with_options(node, RenderOptions::default())
}

/// Render with explicit options.
pub fn render_with_options(node: &Node, options: RenderOptions) -> String {
    let flags = options.flags;
    let cx = RenderContext::new(options);
    let expanded = expand(node, &cx);
    let mut writer = HtmlWriter::new(flags);
    writer.write(&expanded);
    writer.finish()
}

/// Expand a tree without serialising it. Useful for inspecting output structure.
pub fn render_tree(node: &Node, options: RenderOptions) -> Node {
    let cx = RenderContext::new(options);
    expand(node, &cx)
}

/// Render every component in `node` and return the resulting element tree.
pub fn expand(node: &Node, cx: &RenderContext) -> Node {
    match node {
        Node::Empty => Node::Empty,
        Node::Text(_) | Node::Comment(_) => node.clone(),
        Node::Element(el) => Node::Element(Box::new(expand_element(el, cx))),
        Node::Fragment(children) => Node::Fragment(expand_children(children, cx)),
        Node::Component(component) => {
            let name = component.display_name();
            tracing::trace!(component = name, "render");
            let rendered = expand(&component.render(cx), cx);
            if cx.options().flags.contains(RenderFlags::DEBUG_NAMES) {
                Node::Fragment(vec![Node::Comment(name.into()), rendered])
            } else {
                rendered
            }
        }
        Node::Provide(provider) => {
            cx.push(provider.value.clone());
            let expanded = expand(&provider.child, cx);
            cx.pop();
            expanded
        }
        Node::Slot(slot) => {
            let mut child = expand(&slot.child, cx);
            match first_element_mut(&mut child) {
                Some(el) => {
                    merge_slot_attrs(&slot.attrs, el);
                    if let Some(node_ref) = &slot.node_ref {
                        node_ref.bind(handle_of(el));
                    }
                }
                None => {
                    tracing::warn!("asChild used without an element child; slot attributes dropped");
                }
            }
            child
        }
    }
}

fn expand_children(children: &[Node], cx: &RenderContext) -> Vec<Node> {
    children
        .iter()
        .map(|c| expand(c, cx))
        .filter(|c| !c.is_empty())
        .collect()
}

fn expand_element(el: &Element, cx: &RenderContext) -> Element {
    let expanded = Element {
        tag: el.tag.clone(),
        attrs: el.attrs.clone(),
        children: expand_children(&el.children, cx),
        node_ref: el.node_ref.clone(),
    };
    if let Some(node_ref) = &expanded.node_ref {
        node_ref.bind(handle_of(&expanded));
    }
    expanded
}

fn handle_of(el: &Element) -> ElementHandle {
    ElementHandle {
        tag: el.tag.clone(),
        id: el.attrs.get_str("id").map(Into::into),
        attrs: el.attrs.clone(),
    }
}

fn first_element_mut(node: &mut Node) -> Option<&mut Element> {
    match node {
        Node::Element(el) => Some(&mut **el),
        Node::Fragment(children) => children.iter_mut().find_map(first_element_mut),
        _ => None,
    }
}

/// HTML serialiser for expanded trees.
struct HtmlWriter {
    out: String,
    flags: RenderFlags,
}

impl HtmlWriter {
    fn new(flags: RenderFlags) -> Self {
        Self {
            out: String::with_capacity(1024),
            flags,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, node: &Node) {
        match node {
            Node::Empty => {}
            Node::Text(text) => self.out.push_str(&escape_text(text)),
            Node::Comment(text) => {
                self.out.push_str("<!--");
                self.out.push_str(&text.replace("--", "- -"));
                self.out.push_str("-->");
            }
            Node::Element(el) => self.write_element(el),
            Node::Fragment(children) => children.iter().for_each(|c| self.write(c)),
            Node::Component(c) => {
                tracing::warn!(component = c.display_name(), "unexpanded component skipped");
            }
            Node::Provide(_) | Node::Slot(_) => {
                tracing::warn!("unexpanded provider or slot skipped");
            }
        }
    }

    fn write_element(&mut self, el: &Element) {
        self.out.push('<');
        self.out.push_str(&el.tag);

        for (name, value) in el.attrs.iter() {
            if name == "data-slot" && !self.flags.contains(RenderFlags::DATA_SLOT) {
                continue;
            }
            if !is_safe_attr_name(name) {
                tracing::warn!(tag = %el.tag, attr = name, "unsafe attribute name dropped");
                continue;
            }
            self.write_attr(name, value);
        }

        self.out.push('>');

        if is_void_tag(&el.tag) {
            return;
        }

        for child in &el.children {
            self.write(child);
        }

        self.out.push_str("</");
        self.out.push_str(&el.tag);
        self.out.push('>');
    }

    fn write_attr(&mut self, name: &str, value: &PropValue) {
        match value {
            PropValue::Null => {}
            PropValue::Bool(on) if name.starts_with("aria-") => {
                self.push_attr(name, if *on { "true" } else { "false" });
            }
            PropValue::Bool(true) => {
                self.out.push(' ');
                self.out.push_str(name);
            }
            PropValue::Bool(false) => {}
            PropValue::Str(s) if s.is_empty() && is_boolean_attr(name) => {
                self.out.push(' ');
                self.out.push_str(name);
            }
            other => {
                if let Some(text) = other.to_attr_text() {
                    self.push_attr(name, &text);
                }
            }
        }
    }

    fn push_attr(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape_attr(value));
        self.out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Component, NodeRef, Props, SlotNode};

    struct Greeting;

    impl Component for Greeting {
        fn display_name(&self) -> &'static str {
            "Greeting"
        }

        fn render(&self, cx: &RenderContext) -> Node {
            let name = cx
                .use_context::<String>()
                .map(|s| s.as_str().to_owned())
                .unwrap_or_else(|| "stranger".to_string());
            Element::new("span").with_child(format!("hi {}", name)).into()
        }
    }

    #[test]
    fn test_element_and_attrs() {
        let node: Node = Element::new("button")
            .with_attr("type", "button")
            .with_attr("disabled", true)
            .with_attr("hidden", false)
            .with_attr("aria-pressed", false)
            .with_attr("tabindex", -1)
            .with_attr("title", PropValue::Null)
            .with_child("a < b")
            .into();
        insta::assert_snapshot!(
            render_to_string(&node),
            @r#"<button type="button" disabled aria-pressed="false" tabindex="-1">a &lt; b</button>"#
        );
    }

    #[test]
    fn test_void_element() {
        let node: Node = Element::new("input").with_attr("value", "x").into();
        assert_eq!(render_to_string(&node), r#"<input value="x">"#);
    }

    #[test]
    fn test_attr_value_escaped() {
        let node: Node = Element::new("div").with_attr("title", r#"say "hi""#).into();
        assert!(!render_to_string(&node).contains(r#""hi""#));
    }

    #[test]
    fn test_unsafe_attr_dropped() {
        let node: Node = Element::new("div")
            .with_attr("onclick=\"x\"", "y")
            .with_attr("id", "ok")
            .into();
        assert_eq!(render_to_string(&node), r#"<div id="ok"></div>"#);
    }

    #[test]
    fn test_provider_scoped_to_subtree() {
        let tree: Node = Element::new("div")
            .with_child(Node::provide(String::from("ada"), Node::component(Greeting)))
            .with_child(Node::component(Greeting))
            .into();
        assert_eq!(
            render_to_string(&tree),
            "<div><span>hi ada</span><span>hi stranger</span></div>"
        );
    }

    #[test]
    fn test_data_slot_flag() {
        let node: Node = Element::new("div").with_attr("data-slot", "card").into();
        assert_eq!(render_to_string(&node), r#"<div data-slot="card"></div>"#);
        let options = RenderOptions {
            flags: RenderFlags::empty(),
            ..RenderOptions::default()
        };
        assert_eq!(render_with_options(&node, options), "<div></div>");
    }

    #[test]
    fn test_debug_names() {
        let options = RenderOptions {
            flags: RenderFlags::DEBUG_NAMES,
            ..RenderOptions::default()
        };
        let html = render_with_options(&Node::component(Greeting), options);
        assert_eq!(html, "<!--Greeting--><span>hi stranger</span>");
    }

    #[test]
    fn test_slot_merges_into_child_and_binds_ref() {
        let node_ref = NodeRef::new();
        let slot = Node::Slot(Box::new(SlotNode {
            attrs: Props::new().with("class", "btn").with("data-slot", "button"),
            node_ref: Some(node_ref.clone()),
            child: Element::new("a").with_attr("href", "/docs").with_child("Docs").into(),
        }));
        assert_eq!(
            render_to_string(&slot),
            r#"<a href="/docs" class="btn" data-slot="button">Docs</a>"#
        );
        assert_eq!(node_ref.get().map(|h| h.tag), Some("a".into()));
    }

    #[test]
    fn test_slot_without_element_child() {
        let slot = Node::Slot(Box::new(SlotNode {
            attrs: Props::new().with("class", "btn"),
            node_ref: None,
            child: Node::text("plain"),
        }));
        assert_eq!(render_to_string(&slot), "plain");
    }

    #[test]
    fn test_element_ref_bound() {
        let node_ref = NodeRef::new();
        let node: Node = Element::new("section")
            .with_attr("id", "main")
            .with_ref(Some(node_ref.clone()))
            .into();
        render_to_string(&node);
        let handle = node_ref.get().unwrap();
        assert_eq!(handle.tag, "section");
        assert_eq!(handle.id.as_deref(), Some("main"));
    }
}
