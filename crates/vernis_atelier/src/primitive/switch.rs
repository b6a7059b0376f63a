//! Switch primitive: a `role="switch"` button and its thumb.

use super::{root_state, PrimitiveProps};
use vernis_relief::{Component, Node, RenderContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchState {
    pub checked: bool,
    pub disabled: bool,
}

impl SwitchState {
    pub const fn data_state(self) -> &'static str {
        if self.checked {
            "checked"
        } else {
            "unchecked"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwitchRoot {
    pub props: PrimitiveProps,
    pub checked: bool,
}

impl Component for SwitchRoot {
    fn display_name(&self) -> &'static str {
        "SwitchRoot"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let state = SwitchState {
            checked: self.checked,
            disabled: self.props.attrs.is_truthy("disabled"),
        };
        self.props
            .part("button")
            .button_type()
            .default_attr("value", "on")
            .attr("role", "switch")
            .attr("aria-checked", state.checked)
            .attr("data-state", state.data_state())
            .attr("data-disabled", state.disabled)
            .children(self.props.provide_children(state))
            .build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwitchThumb {
    pub props: PrimitiveProps,
}

impl Component for SwitchThumb {
    fn display_name(&self) -> &'static str {
        "SwitchThumb"
    }

    fn render(&self, cx: &RenderContext) -> Node {
        let state = root_state::<SwitchState>(cx, "SwitchThumb");
        self.props
            .part("span")
            .attr("data-state", state.data_state())
            .attr("data-disabled", state.disabled)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_to_string, Props};

    #[test]
    fn test_thumb_reads_root_state() {
        let node = Node::component(SwitchRoot {
            props: PrimitiveProps::with_attrs(Props::new().with("disabled", true))
                .child(Node::component(SwitchThumb::default())),
            checked: true,
        });
        insta::assert_snapshot!(
            render_to_string(&node),
            @r#"<button disabled type="button" value="on" role="switch" aria-checked="true" data-state="checked" data-disabled><span data-state="checked" data-disabled></span></button>"#
        );
    }
}
