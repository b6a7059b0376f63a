//! Components, render context and element refs.

use crate::{Node, Props, RenderOptions};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vernis_carton::{stable_id, CompactString};

/// A renderable component.
///
/// `render` is called once per render pass, during [`crate::expand`], with
/// the context in effect at the component's position in the tree.
pub trait Component {
    /// Stable name used in logs, debug comments and the gallery.
    fn display_name(&self) -> &'static str;

    fn render(&self, cx: &RenderContext) -> Node;
}

/// State shared by one render pass.
///
/// Holds the stack of provided values (innermost last) and the id counter.
pub struct RenderContext {
    options: RenderOptions,
    provided: RefCell<Vec<Rc<dyn Any>>>,
    next_id: Cell<u32>,
}

impl RenderContext {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            provided: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Innermost provided value of type `T`.
    pub fn use_context<T: 'static>(&self) -> Option<Rc<T>> {
        self.provided
            .borrow()
            .iter()
            .rev()
            .find_map(|value| Rc::clone(value).downcast::<T>().ok())
    }

    /// Next deterministic element id for this pass.
    pub fn next_id(&self, prefix: &str) -> CompactString {
        let index = self.next_id.get();
        self.next_id.set(index + 1);
        stable_id(prefix, &self.options.id_seed, index)
    }

    pub(crate) fn push(&self, value: Rc<dyn Any>) {
        self.provided.borrow_mut().push(value);
    }

    pub(crate) fn pop(&self) {
        self.provided.borrow_mut().pop();
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Snapshot of a rendered element, captured through a [`NodeRef`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElementHandle {
    pub tag: CompactString,
    pub id: Option<CompactString>,
    pub attrs: Props,
}

/// Forwarded reference to the element a component renders.
///
/// Cloning shares the slot; the renderer fills it when the element is expanded.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<ElementHandle>>>);

impl NodeRef {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound element, if the owning tree has been rendered.
    #[inline]
    pub fn get(&self) -> Option<ElementHandle> {
        self.0.borrow().clone()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub(crate) fn bind(&self, handle: ElementHandle) {
        *self.0.borrow_mut() = Some(handle);
    }
}
