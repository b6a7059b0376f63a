//! Dialog family, styled over the dialog primitive.
//!
//! Only [`Dialog`] knows whether the dialog is open. Every other part reads
//! that from the primitive through the render context.

use crate::icons::Icon;
use crate::primitive::dialog as primitive;
use crate::primitive::PrimitiveProps;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Element, Node, Props, RenderContext};

/// Root of the family. Renders no element.
#[derive(Debug, Clone)]
pub struct Dialog {
    open: bool,
    modal: bool,
    children: Vec<Node>,
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            open: false,
            modal: true,
            children: Vec::new(),
        }
    }
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    pub fn into_node(self) -> Node {
        Node::component(self)
    }
}

impl From<Dialog> for Node {
    fn from(dialog: Dialog) -> Self {
        Node::component(dialog)
    }
}

impl Component for Dialog {
    fn display_name(&self) -> &'static str {
        "Dialog"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        Node::component(primitive::DialogRoot {
            open: self.open,
            modal: self.modal,
            children: self.children.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogTrigger {
    base: WrapperBase,
    as_child: bool,
}

impl DialogTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }
}

wrapper_builders!(DialogTrigger);

impl Wrapper for DialogTrigger {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "DialogTrigger",
        slot: "dialog-trigger",
        tag: "button",
        pass_through: &["disabled", "aria-label"],
    };
}

impl Component for DialogTrigger {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("");
        Node::component(primitive::DialogTrigger {
            props: self
                .base
                .host(&Self::CONTRACT, &class, self.as_child)
                .into_primitive(),
        })
    }
}

const OVERLAY_CLASS: &str = "fixed inset-0 z-50 bg-black/80 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";
const CONTENT_CLASS: &str = "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95 sm:rounded-lg";
const CLOSE_CLASS: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 disabled:pointer-events-none";

/// Overlay, panel and a corner close button.
#[derive(Debug, Clone)]
pub struct DialogContent {
    base: WrapperBase,
    show_close_button: bool,
    force_mount: bool,
}

impl Default for DialogContent {
    fn default() -> Self {
        Self {
            base: WrapperBase::default(),
            show_close_button: true,
            force_mount: false,
        }
    }
}

impl DialogContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    pub fn force_mount(mut self, force_mount: bool) -> Self {
        self.force_mount = force_mount;
        self
    }

    fn close_button(&self) -> Node {
        Node::component(primitive::DialogClose {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("data-slot", "dialog-close")
                    .with("class", CLOSE_CLASS),
            )
            .child(Icon::X.render(""))
            .child(Element::new("span").with_class("sr-only").with_child("Close")),
        })
    }
}

wrapper_builders!(DialogContent);

impl Wrapper for DialogContent {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "DialogContent",
        slot: "dialog-content",
        tag: "div",
        pass_through: &["aria-label", "aria-labelledby", "aria-describedby"],
    };
}

impl Component for DialogContent {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let overlay = Node::component(primitive::DialogOverlay {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("data-slot", "dialog-overlay")
                    .with("class", OVERLAY_CLASS),
            ),
            force_mount: self.force_mount,
        });

        let mut children = self.base.children.clone();
        if self.show_close_button {
            children.push(self.close_button());
        }
        let class = self.base.merge_class(CONTENT_CLASS);
        let content = Node::component(primitive::DialogContent {
            props: self
                .base
                .host(&Self::CONTRACT, &class, false)
                .children(children)
                .into_primitive(),
            force_mount: self.force_mount,
        });

        Node::Fragment(vec![overlay, content])
    }
}

styled_part! {
    DialogHeader {
        slot: "dialog-header",
        tag: "div",
        class: "flex flex-col space-y-1.5 text-center sm:text-left",
        pass_through: [],
    }
}

styled_part! {
    DialogFooter {
        slot: "dialog-footer",
        tag: "div",
        class: "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2",
        pass_through: [],
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogTitle {
    base: WrapperBase,
}

impl DialogTitle {
    pub fn new() -> Self {
        Self::default()
    }
}

wrapper_builders!(DialogTitle);

impl Wrapper for DialogTitle {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "DialogTitle",
        slot: "dialog-title",
        tag: "h2",
        pass_through: &[],
    };
}

impl Component for DialogTitle {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self
            .base
            .merge_class("text-lg font-semibold leading-none tracking-tight");
        Node::component(primitive::DialogTitle {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogDescription {
    base: WrapperBase,
}

impl DialogDescription {
    pub fn new() -> Self {
        Self::default()
    }
}

wrapper_builders!(DialogDescription);

impl Wrapper for DialogDescription {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "DialogDescription",
        slot: "dialog-description",
        tag: "p",
        pass_through: &[],
    };
}

impl Component for DialogDescription {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("text-sm text-muted-foreground");
        Node::component(primitive::DialogDescription {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogClose {
    base: WrapperBase,
    as_child: bool,
}

impl DialogClose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }
}

wrapper_builders!(DialogClose);

impl Wrapper for DialogClose {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "DialogClose",
        slot: "dialog-close",
        tag: "button",
        pass_through: &["disabled", "aria-label"],
    };
}

impl Component for DialogClose {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("");
        Node::component(primitive::DialogClose {
            props: self
                .base
                .host(&Self::CONTRACT, &class, self.as_child)
                .into_primitive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_to_string, render_tree, RenderOptions};

    #[test]
    fn test_closed_content_not_rendered() {
        let dialog = Dialog::new()
            .child(DialogTrigger::new().child("Open"))
            .child(DialogContent::new().child(DialogTitle::new().child("Hidden")));
        let html = render_to_string(&dialog.into_node());
        assert!(html.contains(r#"data-slot="dialog-trigger""#));
        assert!(!html.contains("dialog-content"));
        assert!(!html.contains("dialog-overlay"));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn test_close_button_optional() {
        let with = render_tree(
            &Dialog::new().open(true).child(DialogContent::new()).into_node(),
            RenderOptions::default(),
        );
        assert!(with.find_slot("dialog-close").is_some());
        let without = render_tree(
            &Dialog::new()
                .open(true)
                .child(DialogContent::new().show_close_button(false))
                .into_node(),
            RenderOptions::default(),
        );
        assert!(without.find_slot("dialog-close").is_none());
    }

    #[test]
    fn test_non_modal_has_no_overlay() {
        let tree = render_tree(
            &Dialog::new().open(true).modal(false).child(DialogContent::new()).into_node(),
            RenderOptions::default(),
        );
        assert!(tree.find_slot("dialog-overlay").is_none());
        let content = tree.find_slot("dialog-content").unwrap();
        assert_eq!(content.attr("aria-modal").and_then(|v| v.as_bool()), Some(false));
    }
}
