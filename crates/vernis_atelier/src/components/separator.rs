//! Separator, styled over the separator primitive.

use crate::primitive::separator::{Orientation, SeparatorRoot};
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, RenderContext};
use vernis_tint::{Axis, VariantConfig, VariantTable};

pub static SEPARATOR_TABLE: VariantTable = VariantTable {
    name: "separator",
    base: "shrink-0 bg-border",
    axes: &[Axis {
        name: "orientation",
        default: "horizontal",
        values: &[("horizontal", "h-[1px] w-full"), ("vertical", "h-full w-[1px]")],
    }],
    modifiers: &[],
    compounds: &[],
};

#[derive(Debug, Clone)]
pub struct Separator {
    base: WrapperBase,
    orientation: Orientation,
    decorative: bool,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            base: WrapperBase::default(),
            orientation: Orientation::Horizontal,
            decorative: true,
        }
    }
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }
}

wrapper_builders!(Separator);

impl Wrapper for Separator {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Separator",
        slot: "separator",
        tag: "div",
        pass_through: &["id"],
    };
}

impl Component for Separator {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let config = VariantConfig::new().with("orientation", self.orientation.as_str());
        let class = self.base.resolve(&SEPARATOR_TABLE, &config);
        Node::component(SeparatorRoot {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
            orientation: self.orientation,
            decorative: self.decorative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::render_to_string;

    #[test]
    fn test_vertical_semantic_separator() {
        insta::assert_snapshot!(
            render_to_string(
                &Separator::new()
                    .orientation(Orientation::Vertical)
                    .decorative(false)
                    .into_node()
            ),
            @r#"<div data-slot="separator" class="shrink-0 bg-border h-full w-[1px]" data-orientation="vertical" role="separator" aria-orientation="vertical"></div>"#
        );
    }

    #[test]
    fn test_table_valid() {
        SEPARATOR_TABLE.validate().unwrap();
    }
}
