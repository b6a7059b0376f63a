//! Tabs family, styled over the tabs primitive.

use crate::primitive::separator::Orientation;
use crate::primitive::tabs as primitive;
use crate::wrapper::{Wrapper, WrapperBase, WrapperContract};
use vernis_carton::CompactString;
use vernis_relief::{Component, Node, RenderContext};
use vernis_tint::{Axis, VariantConfig, VariantTable};

variant_enum! {
    pub enum TabsListVariant {
        #[default]
        Default => "default",
        Line => "line",
    }
}

pub static TABS_LIST_TABLE: VariantTable = VariantTable {
    name: "tabs-list",
    base: "inline-flex items-center justify-center text-muted-foreground",
    axes: &[Axis {
        name: "variant",
        default: "default",
        values: &[
            ("default", "h-9 rounded-lg bg-muted p-1"),
            ("line", "h-9 gap-1 border-b bg-transparent"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

#[derive(Debug, Clone, Default)]
pub struct Tabs {
    base: WrapperBase,
    value: Option<CompactString>,
    orientation: Orientation,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tab value.
    pub fn value(mut self, value: impl Into<CompactString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

wrapper_builders!(Tabs);

impl Wrapper for Tabs {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "Tabs",
        slot: "tabs",
        tag: "div",
        pass_through: &["id", "dir"],
    };
}

impl Component for Tabs {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("flex flex-col gap-2");
        Node::component(primitive::TabsRoot {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
            value: self.value.clone(),
            orientation: self.orientation,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsList {
    base: WrapperBase,
    variant: TabsListVariant,
}

impl TabsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: TabsListVariant) -> Self {
        self.variant = variant;
        self
    }
}

wrapper_builders!(TabsList);

impl Wrapper for TabsList {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "TabsList",
        slot: "tabs-list",
        tag: "div",
        pass_through: &["aria-label"],
    };
}

impl Component for TabsList {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let config = VariantConfig::new().with("variant", self.variant.as_str());
        let class = self.base.resolve(&TABS_LIST_TABLE, &config);
        Node::component(primitive::TabsList {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsTrigger {
    base: WrapperBase,
    value: CompactString,
}

impl TabsTrigger {
    pub fn new(value: impl Into<CompactString>) -> Self {
        Self {
            base: WrapperBase::default(),
            value: value.into(),
        }
    }
}

wrapper_builders!(TabsTrigger);

impl Wrapper for TabsTrigger {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "TabsTrigger",
        slot: "tabs-trigger",
        tag: "button",
        pass_through: &["disabled"],
    };
}

impl Component for TabsTrigger {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("inline-flex items-center justify-center whitespace-nowrap rounded-md px-3 py-1 text-sm font-medium ring-offset-background transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow");
        Node::component(primitive::TabsTrigger {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
            value: self.value.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabsContent {
    base: WrapperBase,
    value: CompactString,
}

impl TabsContent {
    pub fn new(value: impl Into<CompactString>) -> Self {
        Self {
            base: WrapperBase::default(),
            value: value.into(),
        }
    }
}

wrapper_builders!(TabsContent);

impl Wrapper for TabsContent {
    const CONTRACT: WrapperContract = WrapperContract {
        display_name: "TabsContent",
        slot: "tabs-content",
        tag: "div",
        pass_through: &[],
    };
}

impl Component for TabsContent {
    fn display_name(&self) -> &'static str {
        Self::CONTRACT.display_name
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        let class = self.base.merge_class("mt-2 ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2");
        Node::component(primitive::TabsContent {
            props: self.base.host(&Self::CONTRACT, &class, false).into_primitive(),
            value: self.value.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vernis_relief::{render_tree, Element, RenderOptions};

    #[test]
    fn test_selected_tab() {
        let tabs = Tabs::new()
            .value("password")
            .child(
                TabsList::new()
                    .child(TabsTrigger::new("account").child("Account"))
                    .child(TabsTrigger::new("password").child("Password")),
            )
            .child(TabsContent::new("account").child("Account settings"))
            .child(TabsContent::new("password").child("Change password"));
        let tree = render_tree(&tabs.into_node(), RenderOptions::default());

        let active = tree
            .find(&|el: &Element| el.slot() == Some("tabs-trigger") && el.attr("aria-selected").and_then(|v| v.as_bool()) == Some(true))
            .unwrap();
        assert_eq!(active.children[0].text_content(), "Password");
        assert_eq!(tree.text_content(), "AccountPasswordChange password");
        assert_eq!(
            tree.find_slot("tabs-list").and_then(|e| e.attr("role")).and_then(|v| v.as_str()),
            Some("tablist")
        );
    }

    #[test]
    fn test_table_valid() {
        TABS_LIST_TABLE.validate().unwrap();
    }
}
