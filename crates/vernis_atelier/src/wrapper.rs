//! Shared wrapper plumbing.
//!
//! A wrapper binds a variant table and the prop sanitizer around a host
//! element or a headless primitive. It never holds interaction state.

use crate::primitive::PrimitiveProps;
use crate::sanitize::sanitize;
use vernis_carton::CompactString;
use vernis_relief::{Element, Node, NodeRef, PropValue, Props, SlotNode};
use vernis_tint::{merge_classes, resolve_class, VariantConfig, VariantTable};

/// Static description of a wrapper's public surface.
#[derive(Debug, Clone, Copy)]
pub struct WrapperContract {
    /// Name shown in logs and the gallery
    pub display_name: &'static str,
    /// Value of the `data-slot` attribute
    pub slot: &'static str,
    /// Host tag when `asChild` is off
    pub tag: &'static str,
    /// Props that must reach the host element untouched
    pub pass_through: &'static [&'static str],
}

/// Implemented by every component wrapper.
pub trait Wrapper {
    const CONTRACT: WrapperContract;
}

/// Fields every wrapper carries.
#[derive(Debug, Clone, Default)]
pub struct WrapperBase {
    pub class: Option<CompactString>,
    pub attrs: Props,
    pub node_ref: Option<NodeRef>,
    pub children: Vec<Node>,
}

impl WrapperBase {
    /// Resolve `config` against `table`, with the user class appended.
    pub fn resolve(&self, table: &VariantTable, config: &VariantConfig<'_>) -> String {
        resolve_class(table, config, self.class.as_deref())
    }

    /// A fixed class with the user class appended.
    pub fn merge_class(&self, class: &str) -> String {
        merge_classes([class, self.class.as_deref().unwrap_or("")])
    }

    /// Sanitized pass-through attributes, `data-slot` first and `class` second.
    pub fn host_attrs(&self, contract: &WrapperContract, class: &str) -> Props {
        let mut attrs = Props::new().with("data-slot", contract.slot);
        if !class.is_empty() {
            attrs.set("class", class);
        }
        let pass_through = sanitize(&self.attrs);
        let merged = Element::new(contract.tag)
            .with_attrs(&attrs)
            .with_attrs(&pass_through);
        merged.attrs
    }

    /// Build the host element, or a slot when `as_child` is set.
    pub fn host(&self, contract: &WrapperContract, class: &str, as_child: bool) -> HostBuilder {
        HostBuilder::new(
            contract.tag,
            self.host_attrs(contract, class),
            self.node_ref.clone(),
            self.children.clone(),
            as_child,
        )
    }
}

/// Host element under construction.
pub struct HostBuilder {
    tag: &'static str,
    attrs: Props,
    node_ref: Option<NodeRef>,
    children: Vec<Node>,
    as_child: bool,
}

impl HostBuilder {
    pub(crate) fn new(
        tag: &'static str,
        attrs: Props,
        node_ref: Option<NodeRef>,
        children: Vec<Node>,
        as_child: bool,
    ) -> Self {
        Self {
            tag,
            attrs,
            node_ref,
            children,
            as_child,
        }
    }

    /// Set an attribute only if the caller did not pass one.
    pub fn default_attr(mut self, name: &'static str, value: impl Into<PropValue>) -> Self {
        self.attrs.set_default(name, value);
        self
    }

    /// `type="button"` unless the caller set a type or the host is a slot.
    pub fn button_type(self) -> Self {
        if self.as_child {
            self
        } else {
            self.default_attr("type", "button")
        }
    }

    /// Set an attribute, overriding the caller's value.
    pub fn attr(mut self, name: &'static str, value: impl Into<PropValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Replace the children.
    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Hand the collected attributes to a headless primitive instead of
    /// building the element here.
    pub fn into_primitive(self) -> PrimitiveProps {
        PrimitiveProps {
            attrs: self.attrs,
            node_ref: self.node_ref,
            as_child: self.as_child,
            children: self.children,
        }
    }

    pub fn build(self) -> Node {
        if self.as_child {
            return Node::Slot(Box::new(SlotNode {
                attrs: self.attrs,
                node_ref: self.node_ref,
                child: Node::from_children(self.children),
            }));
        }
        Element {
            tag: self.tag.into(),
            attrs: self.attrs,
            children: self.children.into_iter().filter(|c| !c.is_empty()).collect(),
            node_ref: self.node_ref,
        }
        .into()
    }
}
