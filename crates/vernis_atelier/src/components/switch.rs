//! Switch, styled over the switch primitive.

use crate::primitive::switch::{SwitchRoot, SwitchThumb};
use crate::primitive::PrimitiveProps;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, Props, RenderContext};
use vernis_tint::{Axis, VariantConfig, VariantTable};

variant_enum! {
    pub enum SwitchSize {
        #[default]
        Default => "default",
        Sm => "sm",
    }
}

pub static SWITCH_TABLE: VariantTable = VariantTable {
    name: "switch",
    base: "peer inline-flex shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent shadow-sm transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=unchecked]:bg-input",
    axes: &[Axis {
        name: "size",
        default: "default",
        values: &[("default", "h-5 w-9"), ("sm", "h-4 w-7")],
    }],
    modifiers: &[],
    compounds: &[],
};

pub static SWITCH_THUMB_TABLE: VariantTable = VariantTable {
    name: "switch-thumb",
    base: "pointer-events-none block rounded-full bg-background shadow-lg ring-0 transition-transform data-[state=unchecked]:translate-x-0",
    axes: &[Axis {
        name: "size",
        default: "default",
        values: &[
            ("default", "h-4 w-4 data-[state=checked]:translate-x-4"),
            ("sm", "h-3 w-3 data-[state=checked]:translate-x-3"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

#[derive(Debug, Clone, Default)]
pub struct Switch {
    base: WrapperBase,
    size: SwitchSize,
    checked: bool,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = size;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

wrapper_builders!(Switch);

impl Wrapper for Switch {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Switch",
        slot: "switch",
        tag: "button",
        pass_through: &["disabled", "required", "name", "value", "id", "aria-label"],
    };
}

impl Component for Switch {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let config = VariantConfig::new().with("size", self.size.as_str());
        let class = self.base.resolve(&SWITCH_TABLE, &config);
        let thumb = Node::component(SwitchThumb {
            props: PrimitiveProps::with_attrs(
                Props::new()
                    .with("data-slot", "switch-thumb")
                    .with("class", vernis_tint::resolve_class(&SWITCH_THUMB_TABLE, &config, None)),
            ),
        });
        Node::component(SwitchRoot {
            props: self
                .base
                .host(&Self::CONTRACT, &class, false)
                .children(vec![thumb])
                .into_primitive(),
            checked: self.checked,
        })
    }
}
