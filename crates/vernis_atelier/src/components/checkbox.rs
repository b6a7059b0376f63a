//! Checkbox, styled over the checkbox primitive.
//!
//! `indeterminate` wins over `checked`: the indicator shows a minus icon and
//! the primitive reports `aria-checked="mixed"`.

use crate::icons::Icon;
use crate::primitive::checkbox::{CheckboxIndicator, CheckboxRoot, CheckedState};
use crate::primitive::PrimitiveProps;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, Props, RenderContext};

const CHECKBOX_CLASS: &str = "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground data-[state=indeterminate]:bg-primary data-[state=indeterminate]:text-primary-foreground";

#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    base: WrapperBase,
    checked: bool,
    indeterminate: bool,
}

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    fn indicator(&self) -> Node {
        let icon = if self.indeterminate {
            Icon::Minus
        } else {
            Icon::Check
        };
        Node::component(CheckboxIndicator {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("data-slot", "checkbox-indicator")
                    .with("class", "flex items-center justify-center text-current"),
            )
            .child(icon.render("")),
            force_mount: false,
        })
    }
}

wrapper_builders!(Checkbox);

impl Wrapper for Checkbox {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Checkbox",
        slot: "checkbox",
        tag: "button",
        pass_through: &[
            "disabled",
            "required",
            "name",
            "value",
            "id",
            "aria-label",
            "aria-describedby",
        ],
    };
}

impl Component for Checkbox {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class(CHECKBOX_CLASS);
        let props = self
            .base
            .host(&Self::CONTRACT, &class, false)
            .children(vec![self.indicator()])
            .into_primitive();
        Node::component(CheckboxRoot {
            props,
            checked: CheckedState::from_flags(self.checked, self.indeterminate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_tree, Element, RenderOptions};

    fn tree(checkbox: Checkbox) -> Node {
        render_tree(&checkbox.into_node(), RenderOptions::default())
    }

    fn icon(tree: &Node) -> Option<&str> {
        tree.find(&|el: &Element| el.attr("data-icon").is_some())
            .and_then(|el| el.attr("data-icon"))
            .and_then(|v| v.as_str())
    }

    #[test]
    fn test_indeterminate_shows_minus_regardless_of_checked() {
        for checked in [false, true] {
            let tree = tree(Checkbox::new().checked(checked).indeterminate(true));
            assert_eq!(icon(&tree), Some("minus"));
            let root = tree.find_slot("checkbox").unwrap();
            assert_eq!(root.attr("aria-checked").and_then(|v| v.as_str()), Some("mixed"));
            assert_eq!(root.attr("data-state").and_then(|v| v.as_str()), Some("indeterminate"));
        }
    }

    #[test]
    fn test_checked_shows_check() {
        let tree = tree(Checkbox::new().checked(true));
        assert_eq!(icon(&tree), Some("check"));
        let indicator = tree.find_slot("checkbox-indicator").unwrap();
        assert_eq!(indicator.attr("data-state").and_then(|v| v.as_str()), Some("checked"));
    }

    #[test]
    fn test_unchecked_has_no_indicator() {
        let tree = tree(Checkbox::new());
        assert!(tree.find_slot("checkbox-indicator").is_none());
        let root = tree.find_slot("checkbox").unwrap();
        assert_eq!(root.attr("role").and_then(|v| v.as_str()), Some("checkbox"));
    }

    #[test]
    fn test_checked_prop_never_reaches_dom() {
        let tree = tree(Checkbox::new().checked(true).attr("checked", true).attr("disabled", true));
        let root = tree.find_slot("checkbox").unwrap();
        assert_eq!(root.attr("checked"), None);
        assert!(root.attr("disabled").is_some());
        assert!(root.attr("data-disabled").is_some());
    }
}
