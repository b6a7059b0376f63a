//! Tooltip primitive.

use super::{root_state, PrimitiveProps};
use vernis_carton::{format_compact, CompactString};
use vernis_relief::{Component, Node, RenderContext};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub open: bool,
    pub content_id: CompactString,
}

impl TooltipState {
    /// Radix reports an open tooltip as `delayed-open`.
    pub fn data_state(&self) -> &'static str {
        if self.open {
            "delayed-open"
        } else {
            "closed"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipRoot {
    pub open: bool,
    pub children: Vec<Node>,
}

impl Component for TooltipRoot {
    fn display_name(&self) -> &'static str {
        "TooltipRoot"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let id = cx.next_id("tooltip");
        let state = TooltipState {
            open: self.open,
            content_id: format_compact!("{id}-content"),
        };
        Node::provide(state, Node::from_children(self.children.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipTrigger {
    pub props: PrimitiveProps,
}

impl Component for TooltipTrigger {
    fn display_name(&self) -> &'static str {
        "TooltipTrigger"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<TooltipState>(cx, "TooltipTrigger");
        let mut part = self.props.part("button").button_type();
        if state.open {
            part = part.default_attr("aria-describedby", state.content_id.clone());
        }
        part.attr("data-state", state.data_state()).build()
    }
}

/// Rendered only while open.
#[derive(Debug, Clone, Default)]
pub struct TooltipContent {
    pub props: PrimitiveProps,
}

impl Component for TooltipContent {
    fn display_name(&self) -> &'static str {
        "TooltipContent"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<TooltipState>(cx, "TooltipContent");
        if !state.open {
            return Node::Empty;
        }
        self.props
            .part("div")
            .attr("id", state.content_id.clone())
            .attr("role", "tooltip")
            .attr("data-state", state.data_state())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_to_string, render_tree, Element, Props, RenderOptions};

    fn tooltip(open: bool) -> Node {
        Node::component(TooltipRoot {
            open,
            children: vec![
                Node::component(TooltipTrigger {
                    props: PrimitiveProps::new().child("?"),
                }),
                Node::component(TooltipContent {
                    props: PrimitiveProps::new().child("Help"),
                }),
            ],
        })
    }

    #[test]
    fn test_open_tooltip_described_by_content() {
        let tree = render_tree(&tooltip(true), RenderOptions::default());
        let trigger = tree.find(&|el: &Element| el.tag == "button").unwrap();
        let content = tree
            .find(&|el: &Element| el.attr("role").and_then(|v| v.as_str()) == Some("tooltip"))
            .unwrap();
        assert_eq!(trigger.attr("aria-describedby"), content.attr("id"));
    }

    #[test]
    fn test_caller_described_by_survives() {
        for open in [false, true] {
            let root = Node::component(TooltipRoot {
                open,
                children: vec![Node::component(TooltipTrigger {
                    props: PrimitiveProps::with_attrs(Props::new().with("aria-describedby", "hint")),
                })],
            });
            let tree = render_tree(&root, RenderOptions::default());
            let trigger = tree.find(&|el: &Element| el.tag == "button").unwrap();
            assert_eq!(trigger.attr("aria-describedby").and_then(|v| v.as_str()), Some("hint"));
        }
    }

    #[test]
    fn test_closed_tooltip() {
        let html = render_to_string(&tooltip(false));
        assert_eq!(html, r#"<button type="button" data-state="closed">?</button>"#);
    }
}
