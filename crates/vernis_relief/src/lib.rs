//! # vernis_relief
//!
//! Relief - The render tree and server renderer for Vernis.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture raised from a flat surface. `vernis_relief`
//! raises component values into an element tree and flattens that tree back
//! into an HTML string.
//!
//! ## Pipeline
//!
//! 1. Components build a [`Node`] tree. Children may themselves be components.
//! 2. [`expand`] renders every component against a [`RenderContext`],
//!    scoping provided values to their subtree and merging `asChild` slots.
//! 3. [`render_to_string`] serialises the expanded tree to HTML.
//!
//! ```rust
//! use vernis_relief::{render_to_string, Element, Node};
//!
//! let node: Node = Element::new("p")
//!     .with_class("lead")
//!     .with_child("Fish & chips")
//!     .into();
//! assert_eq!(render_to_string(&node), r#"<p class="lead">Fish &amp; chips</p>"#);
//! ```

mod component;
mod node;
mod options;
mod props;
mod slot;
mod ssr;

pub use component::{Component, ElementHandle, NodeRef, RenderContext};
pub use node::{Element, Node, Provider, SlotNode};
pub use options::{RenderFlags, RenderOptions};
pub use props::{PropValue, Props, PropsError};
pub use slot::merge_slot_attrs;
pub use ssr::{expand, render_to_string, render_tree, render_with_options};
