//! Headless accessible primitives.
//!
//! A primitive root owns its state and provides it to the parts rendered
//! inside it. Parts read that state from the render context and turn it into
//! ARIA attributes and `data-state`. Primitives carry no styling.
//!
//! A part rendered outside its root logs a warning and behaves as if the root
//! were in its default (closed, unchecked) state.

pub mod checkbox;
pub mod dialog;
pub mod progress;
pub mod separator;
pub mod switch;
pub mod tabs;
pub mod tooltip;

use crate::wrapper::HostBuilder;
use std::rc::Rc;
use vernis_relief::{Node, NodeRef, Props, RenderContext};

/// Caller-facing props shared by every primitive part.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveProps {
    pub attrs: Props,
    pub node_ref: Option<NodeRef>,
    /// Merge into the single child element instead of rendering a tag
    pub as_child: bool,
    pub children: Vec<Node>,
}

impl PrimitiveProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attrs(attrs: Props) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    /// Start building the part's element. State attributes set with
    /// [`HostBuilder::attr`] override the caller's.
    pub(crate) fn part(&self, tag: &'static str) -> HostBuilder {
        HostBuilder::new(
            tag,
            self.attrs.clone(),
            self.node_ref.clone(),
            self.children.clone(),
            self.as_child,
        )
    }

    /// Children wrapped in a provider for `state`.
    pub(crate) fn provide_children<T: 'static>(&self, state: T) -> Vec<Node> {
        vec![Node::provide(state, Node::from_children(self.children.clone()))]
    }
}

/// State provided by the nearest root of type `T`, or `T::default()` with a
/// warning when `part` is rendered outside one.
pub(crate) fn root_state<T: Default + 'static>(cx: &RenderContext, part: &'static str) -> Rc<T> {
    cx.use_context::<T>().unwrap_or_else(|| {
        tracing::warn!(part, "rendered outside its root; using default state");
        Rc::new(T::default())
    })
}

/// `"open"` or `"closed"`.
#[inline]
pub(crate) const fn open_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}
