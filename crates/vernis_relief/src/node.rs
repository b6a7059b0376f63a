//! Render tree nodes.

use crate::{Component, NodeRef, PropValue, Props};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use vernis_carton::CompactString;
use vernis_tint::merge_classes;

/// A node in the render tree.
///
/// Before [`crate::expand`] a tree may contain components, providers and
/// slots; afterwards it only contains elements, text, comments and fragments.
#[derive(Clone, Default)]
pub enum Node {
    #[default]
    Empty,
    Text(CompactString),
    Comment(CompactString),
    Element(Box<Element>),
    Fragment(Vec<Node>),
    Component(Rc<dyn Component>),
    Provide(Provider),
    Slot(Box<SlotNode>),
}

/// A value made visible to every component rendered inside `child`.
#[derive(Clone)]
pub struct Provider {
    pub value: Rc<dyn Any>,
    pub child: Box<Node>,
}

/// `asChild` placeholder: `attrs` are merged into the first element `child`
/// expands to.
#[derive(Debug, Clone)]
pub struct SlotNode {
    pub attrs: Props,
    pub node_ref: Option<NodeRef>,
    pub child: Node,
}

/// An HTML element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: CompactString,
    pub attrs: Props,
    pub children: Vec<Node>,
    pub node_ref: Option<NodeRef>,
}

impl Node {
    /// Wrap a component.
    #[inline]
    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Rc::new(component))
    }

    /// Provide `value` to components rendered inside `child`.
    #[inline]
    pub fn provide<T: 'static>(value: T, child: Node) -> Self {
        Self::Provide(Provider {
            value: Rc::new(value),
            child: Box::new(child),
        })
    }

    #[inline]
    pub fn text(text: impl Into<CompactString>) -> Self {
        Self::Text(text.into())
    }

    /// Collapse a child list: empty → `Empty`, one → itself, many → `Fragment`.
    pub fn from_children(mut children: Vec<Node>) -> Self {
        match children.len() {
            0 => Self::Empty,
            1 => children.pop().unwrap_or_default(),
            _ => Self::Fragment(children),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(&**el),
            _ => None,
        }
    }

    /// Depth-first search for the first element matching `pred`.
    ///
    /// Only meaningful on an expanded tree; components are not entered.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Element(el) => {
                if pred(el) {
                    return Some(&**el);
                }
                el.children.iter().find_map(|c| c.find(pred))
            }
            Self::Fragment(children) => children.iter().find_map(|c| c.find(pred)),
            _ => None,
        }
    }

    /// All elements matching `pred`, in document order.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(pred, &mut out);
        out
    }

    fn collect<'s>(&'s self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'s Element>) {
        match self {
            Self::Element(el) => {
                if pred(el) {
                    out.push(el);
                }
                for child in &el.children {
                    child.collect(pred, out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect(pred, out);
                }
            }
            _ => {}
        }
    }

    /// First element carrying `data-slot="<slot>"`.
    pub fn find_slot(&self, slot: &str) -> Option<&Element> {
        self.find(&|el| el.slot() == Some(slot))
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(el) => el.children.iter().for_each(|c| c.push_text(out)),
            Self::Fragment(children) => children.iter().for_each(|c| c.push_text(out)),
            _ => {}
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::Comment(t) => f.debug_tuple("Comment").field(t).finish(),
            Self::Element(el) => fmt::Debug::fmt(el, f),
            Self::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Self::Component(c) => f.debug_tuple("Component").field(&c.display_name()).finish(),
            Self::Provide(p) => f.debug_tuple("Provide").field(&p.child).finish(),
            Self::Slot(s) => fmt::Debug::fmt(s, f),
        }
    }
}

impl From<Element> for Node {
    #[inline]
    fn from(el: Element) -> Self {
        Self::Element(Box::new(el))
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Node {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<CompactString> for Node {
    #[inline]
    fn from(text: CompactString) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    #[inline]
    fn from(children: Vec<Node>) -> Self {
        Self::from_children(children)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    #[inline]
    fn from(node: Option<T>) -> Self {
        node.map(Into::into).unwrap_or_default()
    }
}

impl Element {
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute, replacing an earlier value.
    pub fn with_attr(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Apply a prop bag. Later values override; `class` is merged, not replaced.
    pub fn with_attrs(mut self, attrs: &Props) -> Self {
        for (name, value) in attrs.iter() {
            if name == "class" {
                if let Some(class) = value.as_str() {
                    self = self.with_class(class);
                }
            } else {
                self.attrs.set(name, value.clone());
            }
        }
        self
    }

    /// Merge classes into the `class` attribute.
    pub fn with_class(mut self, class: &str) -> Self {
        let merged = match self.attrs.get_str("class") {
            Some(existing) => merge_classes([existing, class]),
            None => merge_classes([class]),
        };
        if merged.is_empty() {
            self.attrs.remove("class");
        } else {
            self.attrs.set("class", merged);
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children
            .extend(children.into_iter().filter(|c| !c.is_empty()));
        self
    }

    #[inline]
    pub fn with_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&PropValue> {
        self.attrs.get(name)
    }

    /// The `class` attribute, or `""`.
    #[inline]
    pub fn class(&self) -> &str {
        self.attrs.get_str("class").unwrap_or("")
    }

    /// Whether the `class` attribute contains every token of `classes`.
    pub fn has_classes(&self, classes: &str) -> bool {
        let own: Vec<&str> = self.class().split_ascii_whitespace().collect();
        classes.split_ascii_whitespace().all(|t| own.contains(&t))
    }

    #[inline]
    pub fn slot(&self) -> Option<&str> {
        self.attrs.get_str("data-slot")
    }

    #[inline]
    pub fn into_node(self) -> Node {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class_merges() {
        let el = Element::new("div")
            .with_class("a b")
            .with_class("b c");
        assert_eq!(el.class(), "a b c");
        assert!(el.has_classes("c a"));
        assert!(!el.has_classes("d"));
    }

    #[test]
    fn test_with_attrs_merges_class() {
        let attrs = Props::new().with("class", "extra").with("id", "x");
        let el = Element::new("div").with_class("base").with_attrs(&attrs);
        assert_eq!(el.class(), "base extra");
        assert_eq!(el.attr("id").and_then(PropValue::as_str), Some("x"));
    }

    #[test]
    fn test_empty_children_skipped() {
        let el = Element::new("div")
            .with_child(Node::Empty)
            .with_child(None::<Node>)
            .with_child("text");
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_find_slot() {
        let tree: Node = Element::new("div")
            .with_child(Element::new("span").with_attr("data-slot", "inner").with_child("hi"))
            .into();
        let inner = tree.find_slot("inner").unwrap();
        assert_eq!(inner.tag, "span");
        assert_eq!(tree.text_content(), "hi");
    }
}
