//! Dialog primitive.
//!
//! The root renders no element. It allocates the content, title and
//! description ids and provides [`DialogState`] to its parts.

use super::{open_state, root_state, PrimitiveProps};
use vernis_carton::{format_compact, CompactString};
use vernis_relief::{Component, Node, RenderContext};

/// State shared by the parts of one dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogState {
    pub open: bool,
    pub modal: bool,
    pub content_id: CompactString,
    pub title_id: CompactString,
    pub description_id: CompactString,
}

impl DialogState {
    #[inline]
    pub fn data_state(&self) -> &'static str {
        open_state(self.open)
    }
}

#[derive(Debug, Clone)]
pub struct DialogRoot {
    pub open: bool,
    pub modal: bool,
    pub children: Vec<Node>,
}

impl DialogRoot {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            modal: true,
            children: Vec::new(),
        }
    }
}

impl Component for DialogRoot {
    fn display_name(&self) -> &'static str {
        "DialogRoot"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let id = cx.next_id("dialog");
        let state = DialogState {
            open: self.open,
            modal: self.modal,
            content_id: format_compact!("{id}-content"),
            title_id: format_compact!("{id}-title"),
            description_id: format_compact!("{id}-description"),
        };
        tracing::debug!(id = %id, open = self.open, "dialog root");
        Node::provide(state, Node::from_children(self.children.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogTrigger {
    pub props: PrimitiveProps,
}

impl Component for DialogTrigger {
    fn display_name(&self) -> &'static str {
        "DialogTrigger"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogTrigger");
        self.props
            .part("button")
            .button_type()
            .attr("aria-haspopup", "dialog")
            .attr("aria-expanded", state.open)
            .attr("aria-controls", state.content_id.clone())
            .attr("data-state", state.data_state())
            .build()
    }
}

/// Backdrop. Rendered only for an open modal dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogOverlay {
    pub props: PrimitiveProps,
    pub force_mount: bool,
}

impl Component for DialogOverlay {
    fn display_name(&self) -> &'static str {
        "DialogOverlay"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogOverlay");
        if !state.modal || (!state.open && !self.force_mount) {
            return Node::Empty;
        }
        self.props
            .part("div")
            .attr("data-state", state.data_state())
            .build()
    }
}

/// Dialog panel. Not rendered while closed unless `force_mount` is set, in
/// which case it is rendered `hidden`.
#[derive(Debug, Clone, Default)]
pub struct DialogContent {
    pub props: PrimitiveProps,
    pub force_mount: bool,
}

impl Component for DialogContent {
    fn display_name(&self) -> &'static str {
        "DialogContent"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogContent");
        if !state.open && !self.force_mount {
            return Node::Empty;
        }
        self.props
            .part("div")
            .attr("role", "dialog")
            .attr("id", state.content_id.clone())
            .attr("aria-modal", state.modal)
            .default_attr("aria-labelledby", state.title_id.clone())
            .default_attr("aria-describedby", state.description_id.clone())
            .attr("tabindex", -1)
            .attr("hidden", !state.open)
            .attr("data-state", state.data_state())
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogTitle {
    pub props: PrimitiveProps,
}

impl Component for DialogTitle {
    fn display_name(&self) -> &'static str {
        "DialogTitle"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogTitle");
        self.props
            .part("h2")
            .attr("id", state.title_id.clone())
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogDescription {
    pub props: PrimitiveProps,
}

impl Component for DialogDescription {
    fn display_name(&self) -> &'static str {
        "DialogDescription"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogDescription");
        self.props
            .part("p")
            .attr("id", state.description_id.clone())
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogClose {
    pub props: PrimitiveProps,
}

impl Component for DialogClose {
    fn display_name(&self) -> &'static str {
        "DialogClose"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<DialogState>(cx, "DialogClose");
        self.props
            .part("button")
            .button_type()
            .attr("aria-controls", state.content_id.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_to_string, render_tree, Element, Props, RenderOptions};

    fn dialog(open: bool) -> Node {
        let mut root = DialogRoot::new(open);
        root.children = vec![
            Node::component(DialogTrigger {
                props: PrimitiveProps::new().child("Open"),
            }),
            Node::component(DialogOverlay::default()),
            Node::component(DialogContent {
                props: PrimitiveProps::new()
                    .child(Node::component(DialogTitle {
                        props: PrimitiveProps::new().child("Title"),
                    }))
                    .child(Node::component(DialogDescription {
                        props: PrimitiveProps::new().child("Body"),
                    })),
                force_mount: false,
            }),
        ];
        Node::component(root)
    }

    #[test]
    fn test_open_dialog_wires_ids() {
        let tree = render_tree(&dialog(true), RenderOptions::default());
        let content = tree
            .find(&|el: &Element| el.attr("role").and_then(|v| v.as_str()) == Some("dialog"))
            .unwrap();
        let trigger = tree.find(&|el: &Element| el.tag == "button").unwrap();
        let title = tree.find(&|el: &Element| el.tag == "h2").unwrap();
        let description = tree.find(&|el: &Element| el.tag == "p").unwrap();

        assert_eq!(trigger.attr("aria-controls"), content.attr("id"));
        assert_eq!(content.attr("aria-labelledby"), title.attr("id"));
        assert_eq!(content.attr("aria-describedby"), description.attr("id"));
        assert_eq!(trigger.attr("data-state").and_then(|v| v.as_str()), Some("open"));
        assert!(tree.find(&|el: &Element| el.tag == "div" && el.attr("role").is_none()).is_some());
    }

    #[test]
    fn test_caller_aria_ids_win() {
        let mut root = DialogRoot::new(true);
        root.children = vec![Node::component(DialogContent {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("aria-describedby", "my-help")
                    .with("aria-labelledby", "my-heading"),
            ),
            force_mount: false,
        })];
        let tree = render_tree(&Node::component(root), RenderOptions::default());
        let content = tree
            .find(&|el: &Element| el.attr("role").and_then(|v| v.as_str()) == Some("dialog"))
            .unwrap();
        assert_eq!(content.attr("aria-describedby").and_then(|v| v.as_str()), Some("my-help"));
        assert_eq!(content.attr("aria-labelledby").and_then(|v| v.as_str()), Some("my-heading"));
    }

    #[test]
    fn test_closed_dialog_renders_trigger_only() {
        let html = render_to_string(&dialog(false));
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"data-state="closed""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("Title"));
    }

    #[test]
    fn test_force_mount_renders_hidden() {
        let mut root = DialogRoot::new(false);
        root.children = vec![Node::component(DialogContent {
            props: PrimitiveProps::new(),
            force_mount: true,
        })];
        let html = render_to_string(&Node::component(root));
        assert!(html.contains(" hidden"));
        assert!(html.contains(r#"data-state="closed""#));
    }

    #[test]
    fn test_part_outside_root_uses_closed_state() {
        let html = render_to_string(&Node::component(DialogTrigger::default()));
        assert!(html.contains(r#"data-state="closed""#));
    }
}
