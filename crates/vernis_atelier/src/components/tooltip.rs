//! Tooltip family, styled over the tooltip primitive.

use crate::primitive::tooltip as primitive;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, RenderContext};

/// Root of the family. Renders no element.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    open: bool,
    children: Vec<Node>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
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

impl From<Tooltip> for Node {
    fn from(tooltip: Tooltip) -> Self {
        Node::component(tooltip)
    }
}

impl Component for Tooltip {
    fn display_name(&self) -> &'static str {
        "Tooltip"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        Node::component(primitive::TooltipRoot {
            open: self.open,
            children: self.children.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipTrigger {
    base: WrapperBase,
    as_child: bool,
}

impl TooltipTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }
}

wrapper_builders!(TooltipTrigger);

impl Wrapper for TooltipTrigger {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "TooltipTrigger",
        slot: "tooltip-trigger",
        tag: "button",
        pass_through: &["disabled", "aria-label", "aria-describedby"],
    };
}

impl Component for TooltipTrigger {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("");
        Node::component(primitive::TooltipTrigger {
            props: self
                .base
                .host(&Self::CONTRACT, &class, self.as_child)
                .into_primitive(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipContent {
    base: WrapperBase,
}

impl TooltipContent {
    pub fn new() -> Self {
        Self::default()
    }
}

wrapper_builders!(TooltipContent);

impl Wrapper for TooltipContent {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "TooltipContent",
        slot: "tooltip-content",
        tag: "div",
        pass_through: &[],
    };
}

impl Component for TooltipContent {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("z-50 overflow-hidden rounded-md bg-primary px-3 py-1.5 text-xs text-primary-foreground animate-in fade-in-0 zoom-in-95");
        Node::component(primitive::TooltipContent {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_to_string, Element};

    #[test]
    fn test_trigger_as_child() {
        let tooltip = Tooltip::new()
            .open(true)
            .child(
                TooltipTrigger::new()
                    .as_child(true)
                    .child(Element::new("a").with_attr("href", "#help").with_child("?")),
            )
            .child(TooltipContent::new().child("Help"));
        let html = render_to_string(&tooltip.into_node());
        assert!(html.starts_with(r##"<a href="#help" data-slot="tooltip-trigger" aria-describedby="vernis-tooltip-"##));
        assert!(html.contains(r#"role="tooltip""#));
        assert!(html.ends_with(">Help</div>"));
    }
}
