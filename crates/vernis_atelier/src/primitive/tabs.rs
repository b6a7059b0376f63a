//! Tabs primitive.
//!
//! The root provides the selected value and an id base. Triggers and
//! panels derive `{base}-trigger-{value}` and `{base}-content-{value}` from
//! it, so each trigger controls the panel with the same value.

use super::separator::Orientation;
use super::{root_state, PrimitiveProps};
use vernis_carton::{format_compact, CompactString};
use vernis_relief::{Component, Node, RenderContext};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabsState {
    pub value: Option<CompactString>,
    pub orientation: Orientation,
    pub base_id: CompactString,
}

impl TabsState {
    #[inline]
    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    pub fn trigger_id(&self, value: &str) -> CompactString {
        format_compact!("{}-trigger-{}", self.base_id, value)
    }

    pub fn content_id(&self, value: &str) -> CompactString {
        format_compact!("{}-content-{}", self.base_id, value)
    }
}

#[inline]
fn active_state(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        "inactive"
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsRoot {
    pub props: PrimitiveProps,
    /// Selected tab value
    pub value: Option<CompactString>,
    pub orientation: Orientation,
}

impl Component for TabsRoot {
    fn display_name(&self) -> &'static str {
        "TabsRoot"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = TabsState {
            value: self.value.clone(),
            orientation: self.orientation,
            base_id: cx.next_id("tabs"),
        };
        self.props
            .part("div")
            .attr("data-orientation", self.orientation.as_str())
            .children(self.props.provide_children(state))
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsList {
    pub props: PrimitiveProps,
}

impl Component for TabsList {
    fn display_name(&self) -> &'static str {
        "TabsList"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<TabsState>(cx, "TabsList");
        self.props
            .part("div")
            .attr("role", "tablist")
            .attr("aria-orientation", state.orientation.as_str())
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsTrigger {
    pub props: PrimitiveProps,
    pub value: CompactString,
}

impl Component for TabsTrigger {
    fn display_name(&self) -> &'static str {
        "TabsTrigger"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<TabsState>(cx, "TabsTrigger");
        let selected = state.is_selected(&self.value);
        self.props
            .part("button")
            .button_type()
            .attr("role", "tab")
            .attr("id", state.trigger_id(&self.value))
            .attr("aria-selected", selected)
            .attr("aria-controls", state.content_id(&self.value))
            .attr("tabindex", if selected { 0 } else { -1 })
            .attr("data-state", active_state(selected))
            .build()
    }
}

/// Inactive panels render `hidden` and without children.
#[derive(Debug, Clone, Default)]
pub struct TabsContent {
    pub props: PrimitiveProps,
    pub value: CompactString,
}

impl Component for TabsContent {
    fn display_name(&self) -> &'static str {
        "TabsContent"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<TabsState>(cx, "TabsContent");
        let selected = state.is_selected(&self.value);
        let part = self
            .props
            .part("div")
            .attr("role", "tabpanel")
            .attr("id", state.content_id(&self.value))
            .attr("aria-labelledby", state.trigger_id(&self.value))
            .attr("tabindex", 0)
            .attr("hidden", !selected)
            .attr("data-state", active_state(selected));
        if selected {
            part.build()
        } else {
            part.children(Vec::new()).build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_tree, Element, RenderOptions};

    fn tabs(selected: &str) -> Node {
        let trigger = |value: &str| {
            Node::component(TabsTrigger {
                props: PrimitiveProps::new().child(value.to_uppercase()),
                value: value.into(),
            })
        };
        let content = |value: &str| {
            Node::component(TabsContent {
                props: PrimitiveProps::new().child(format!("{value} panel")),
                value: value.into(),
            })
        };
        Node::component(TabsRoot {
            props: PrimitiveProps::new()
                .child(Node::component(TabsList {
                    props: PrimitiveProps::new().child(trigger("a")).child(trigger("b")),
                }))
                .child(content("a"))
                .child(content("b")),
            value: Some(selected.into()),
            orientation: Orientation::Horizontal,
        })
    }

    fn role<'a>(tree: &'a Node, role: &'static str) -> Vec<&'a Element> {
        tree.find_all(&move |el: &Element| el.attr("role").and_then(|v| v.as_str()) == Some(role))
    }

    #[test]
    fn test_trigger_controls_matching_panel() {
        let tree = render_tree(&tabs("b"), RenderOptions::default());
        let triggers = role(&tree, "tab");
        let panels = role(&tree, "tabpanel");
        assert_eq!(triggers.len(), 2);
        assert_eq!(panels.len(), 2);
        for (trigger, panel) in triggers.iter().zip(&panels) {
            assert_eq!(trigger.attr("aria-controls"), panel.attr("id"));
            assert_eq!(panel.attr("aria-labelledby"), trigger.attr("id"));
        }
        assert_eq!(triggers[1].attr("data-state").and_then(|v| v.as_str()), Some("active"));
        assert_eq!(triggers[0].attr("tabindex").and_then(|v| v.as_number()), Some(-1.0));
    }

    #[test]
    fn test_inactive_panel_is_hidden_and_empty() {
        let tree = render_tree(&tabs("a"), RenderOptions::default());
        let panels = role(&tree, "tabpanel");
        assert!(panels[0].children.len() == 1);
        assert_eq!(panels[1].attr("hidden").and_then(|v| v.as_bool()), Some(true));
        assert!(panels[1].children.is_empty());
    }

    #[test]
    fn test_ids_depend_on_seed() {
        let a = render_tree(&tabs("a"), RenderOptions::with_seed("one"));
        let b = render_tree(&tabs("a"), RenderOptions::with_seed("two"));
        let id = |tree: &Node| role(tree, "tab")[0].attr("id").cloned();
        assert_ne!(id(&a), id(&b));
        let again = render_tree(&tabs("a"), RenderOptions::with_seed("one"));
        assert_eq!(id(&a), id(&again));
    }
}
