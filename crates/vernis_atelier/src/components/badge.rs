//! Badge.

use crate::icons::Icon;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Element, Node, RenderContext};
use vernis_tint::{Axis, Modifier, VariantConfig, VariantTable};

variant_enum! {
    pub enum BadgeVariant {
        #[default]
        Default => "default",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
    }
}

pub static BADGE_TABLE: VariantTable = VariantTable {
    name: "badge",
    base: "inline-flex items-center gap-1 rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    axes: &[Axis {
        name: "variant",
        default: "default",
        values: &[
            ("default", "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"),
            ("destructive", "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"),
            ("outline", "text-foreground"),
        ],
    }],
    modifiers: &[
        Modifier {
            name: "dot",
            fragment: "pl-1.5",
        },
        Modifier {
            name: "removable",
            fragment: "pr-1",
        },
    ],
    compounds: &[],
};

#[derive(Debug, Clone, Default)]
pub struct Badge {
    base: WrapperBase,
    variant: BadgeVariant,
    /// Leading status dot
    dot: bool,
    /// Trailing remove button
    removable: bool,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    pub fn removable(mut self, removable: bool) -> Self {
        self.removable = removable;
        self
    }
}

wrapper_builders!(Badge);

impl Wrapper for Badge {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Badge",
        slot: "badge",
        tag: "span",
        pass_through: &["title", "role", "aria-label"],
    };
}

impl Component for Badge {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let config = VariantConfig::new()
            .with("variant", self.variant.as_str())
            .modifier("dot", self.dot)
            .modifier("removable", self.removable);
        let class = self.base.resolve(&BADGE_TABLE, &config);

        let mut children = Vec::with_capacity(self.base.children.len() + 2);
        if self.dot {
            children.push(
                Element::new("span")
                    .with_attr("data-slot", "badge-dot")
                    .with_attr("aria-hidden", true)
                    .with_class("h-1.5 w-1.5 rounded-full bg-current")
                    .into(),
            );
        }
        children.extend(self.base.children.iter().cloned());
        if self.removable {
            children.push(
                Element::new("button")
                    .with_attr("data-slot", "badge-remove")
                    .with_attr("type", "button")
                    .with_attr("aria-label", "Remove")
                    .with_class("rounded-sm opacity-70 hover:opacity-100")
                    .with_child(Icon::X.render("h-3 w-3"))
                    .into(),
            );
        }

        self.base
            .host(&Self::CONTRACT, &class, false)
            .children(children)
            .build()
    }
}
