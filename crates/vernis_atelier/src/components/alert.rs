//! Alert family.

use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_relief::{Component, Node, RenderContext};
use vernis_tint::{Axis, VariantConfig, VariantTable};

variant_enum! {
    pub enum AlertVariant {
        #[default]
        Default => "default",
        Destructive => "destructive",
    }
}

pub static ALERT_TABLE: VariantTable = VariantTable {
    name: "alert",
    base: "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground [&>svg~*]:pl-7",
    axes: &[Axis {
        name: "variant",
        default: "default",
        values: &[
            ("default", "bg-background text-foreground"),
            ("destructive", "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

#[derive(Debug, Clone, Default)]
pub struct Alert {
    base: WrapperBase,
    variant: AlertVariant,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }
}

wrapper_builders!(Alert);

impl Wrapper for Alert {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Alert",
        slot: "alert",
        tag: "div",
        pass_through: &["id", "role", "aria-live"],
    };
}

impl Component for Alert {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let config = VariantConfig::new().with("variant", self.variant.as_str());
        let class = self.base.resolve(&ALERT_TABLE, &config);
        self.base
            .host(&Self::CONTRACT, &class, false)
            .default_attr("role", "alert")
            .build()
    }
}

styled_part! {
    AlertTitle {
        slot: "alert-title",
        tag: "h5",
        class: "mb-1 font-medium leading-none tracking-tight",
        pass_through: ["id"],
    }
}

styled_part! {
    AlertDescription {
        slot: "alert-description",
        tag: "div",
        class: "text-sm [&_p]:leading-relaxed",
        pass_through: ["id"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Icon;
    use vernis_relief::{render_tree, RenderOptions};

    #[test]
    fn test_destructive_alert() {
        let tree = render_tree(
            &Alert::new()
                .variant(AlertVariant::Destructive)
                .child(Icon::Info.render(""))
                .child(AlertTitle::new().child("Error"))
                .child(AlertDescription::new().child("Session expired."))
                .into_node(),
            RenderOptions::default(),
        );
        let alert = tree.find_slot("alert").unwrap();
        assert_eq!(alert.attr("role").and_then(|v| v.as_str()), Some("alert"));
        assert!(alert.has_classes("border-destructive/50 text-destructive"));
        assert_eq!(tree.find_slot("alert-title").map(|e| e.tag.as_str()), Some("h5"));
        assert_eq!(tree.text_content(), "ErrorSession expired.");
    }

    #[test]
    fn test_role_overridable() {
        let tree = render_tree(
            &Alert::new().attr("role", "status").into_node(),
            RenderOptions::default(),
        );
        assert_eq!(tree.as_element().and_then(|e| e.attr("role")).and_then(|v| v.as_str()), Some("status"));
    }

    #[test]
    fn test_table_valid() {
        ALERT_TABLE.validate().unwrap();
    }
}
