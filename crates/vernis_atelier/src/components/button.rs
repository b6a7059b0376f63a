//! Button.
//!
//! `loading` disables the button, marks it `aria-busy` and prepends a
//! spinner. With `as_child` the classes and attributes are merged into the
//! single child element (typically a link) and no spinner is added.

use crate::icons::Icon;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, RenderContext};
use vernis_tint::{Axis, Modifier, VariantConfig, VariantTable};

variant_enum! {
    /// Visual style of a [`Button`].
    pub enum ButtonVariant {
        #[default]
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
    }
}

variant_enum! {
    pub enum ButtonSize {
        #[default]
        Default => "default",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
    }
}

pub static BUTTON_TABLE: VariantTable = VariantTable {
    name: "button",
    base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
    axes: &[
        Axis {
            name: "variant",
            default: "default",
            values: &[
                ("default", "bg-primary text-primary-foreground shadow hover:bg-primary/90"),
                ("destructive", "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"),
                ("outline", "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"),
                ("secondary", "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        },
        Axis {
            name: "size",
            default: "default",
            values: &[
                ("default", "h-9 px-4 py-2"),
                ("sm", "h-8 rounded-md px-3 text-xs"),
                ("lg", "h-10 rounded-md px-8"),
                ("icon", "h-9 w-9"),
            ],
        },
    ],
    modifiers: &[Modifier {
        name: "loading",
        fragment: "cursor-wait opacity-80",
    }],
    compounds: &[],
};

#[derive(Debug, Clone, Default)]
pub struct Button {
    base: WrapperBase,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    as_child: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }

    fn config(&self) -> VariantConfig<'static> {
        VariantConfig::new()
            .with("variant", self.variant.as_str())
            .with("size", self.size.as_str())
            .modifier("loading", self.loading)
    }
}

wrapper_builders!(Button);

impl Wrapper for Button {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Button",
        slot: "button",
        tag: "button",
        pass_through: &[
            "type",
            "disabled",
            "name",
            "value",
            "form",
            "aria-label",
            "aria-pressed",
        ],
    };
}

impl Component for Button {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.resolve(&BUTTON_TABLE, &self.config());
        let mut host = self
            .base
            .host(&Self::CONTRACT, &class, self.as_child)
            .button_type();
        if !self.loading {
            return host.build();
        }
        host = host
            .attr("disabled", true)
            .attr("aria-busy", true)
            .attr("data-loading", true);
        if !self.as_child {
            let children = std::iter::once(Icon::Loader.render("animate-spin"))
                .chain(self.base.children.iter().cloned())
                .collect();
            host = host.children(children);
        }
        host.build()
    }
}
