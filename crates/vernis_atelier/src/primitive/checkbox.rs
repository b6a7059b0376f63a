//! Checkbox primitive: a `role="checkbox"` button with a tri-state value.

use super::{root_state, PrimitiveProps};
use vernis_relief::{Component, Node, PropValue, RenderContext};

/// Checked value of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckedState {
    Checked,
    #[default]
    Unchecked,
    Indeterminate,
}

impl CheckedState {
    /// `indeterminate` takes precedence over `checked`.
    pub const fn from_flags(checked: bool, indeterminate: bool) -> Self {
        if indeterminate {
            Self::Indeterminate
        } else if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    pub const fn data_state(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
            Self::Indeterminate => "indeterminate",
        }
    }

    /// `aria-checked` value: `true`, `false` or `mixed`.
    pub fn aria_checked(self) -> PropValue {
        match self {
            Self::Checked => PropValue::Bool(true),
            Self::Unchecked => PropValue::Bool(false),
            Self::Indeterminate => PropValue::from("mixed"),
        }
    }

    /// Whether the indicator is shown.
    #[inline]
    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::Unchecked)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckboxState {
    pub checked: CheckedState,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CheckboxRoot {
    pub props: PrimitiveProps,
    pub checked: CheckedState,
}

impl Component for CheckboxRoot {
    fn display_name(&self) -> &'static str {
        "CheckboxRoot"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let state = CheckboxState {
            checked: self.checked,
            disabled: self.props.attrs.is_truthy("disabled"),
        };
        self.props
            .part("button")
            .button_type()
            .default_attr("value", "on")
            .attr("role", "checkbox")
            .attr("aria-checked", state.checked.aria_checked())
            .attr("data-state", state.checked.data_state())
            .attr("data-disabled", state.disabled)
            .children(self.props.provide_children(state))
            .build()
    }
}

/// Rendered only while the checkbox is checked or indeterminate.
#[derive(Debug, Clone, Default)]
pub struct CheckboxIndicator {
    pub props: PrimitiveProps,
    pub force_mount: bool,
}

impl Component for CheckboxIndicator {
    fn display_name(&self) -> &'static str {
        "CheckboxIndicator"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<CheckboxState>(cx, "CheckboxIndicator");
        if !state.checked.is_marked() && !self.force_mount {
            return Node::Empty;
        }
        self.props
            .part("span")
            .attr("data-state", state.checked.data_state())
            .attr("data-disabled", state.disabled)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::render_to_string;

    fn checkbox(checked: CheckedState) -> Node {
        Node::component(CheckboxRoot {
            props: PrimitiveProps::new().child(Node::component(CheckboxIndicator {
                props: PrimitiveProps::new().child("x"),
                force_mount: false,
            })),
            checked,
        })
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(CheckedState::from_flags(true, true), CheckedState::Indeterminate);
        assert_eq!(CheckedState::from_flags(false, true), CheckedState::Indeterminate);
        assert_eq!(CheckedState::from_flags(true, false), CheckedState::Checked);
        assert_eq!(CheckedState::from_flags(false, false), CheckedState::Unchecked);
    }

    #[test]
    fn test_unchecked_hides_indicator() {
        insta::assert_snapshot!(
            render_to_string(&checkbox(CheckedState::Unchecked)),
            @r#"<button type="button" value="on" role="checkbox" aria-checked="false" data-state="unchecked"></button>"#
        );
    }

    #[test]
    fn test_indeterminate_is_mixed() {
        insta::assert_snapshot!(
            render_to_string(&checkbox(CheckedState::Indeterminate)),
            @r#"<button type="button" value="on" role="checkbox" aria-checked="mixed" data-state="indeterminate"><span data-state="indeterminate">x</span></button>"#
        );
    }
}
