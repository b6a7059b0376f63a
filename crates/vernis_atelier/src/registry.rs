//! Component registry.
//!
//! Maps kebab-case component names to builders that take a JSON prop bag.
//! Axis values in the bag are parsed leniently: an unknown `variant` or `size`
//! renders the default, matching the resolver. Unknown component names are
//! errors.

use crate::components::*;
use crate::primitive::separator::Orientation;
use vernis_relief::{Node, PropValue, Props};
use vernis_tint::VariantTable;

variant_enum! {
    /// Every top-level component the registry can build.
    pub enum ComponentKind {
        #[default]
        Button => "button",
        Badge => "badge",
        Card => "card",
        Alert => "alert",
        Input => "input",
        Label => "label",
        Separator => "separator",
        Checkbox => "checkbox",
        Switch => "switch",
        Progress => "progress",
        Dialog => "dialog",
        Tabs => "tabs",
        Tooltip => "tooltip",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown component '{name}' (expected one of: {expected})")]
    UnknownComponent { name: String, expected: String },

    #[error("component '{0}' has no variant table")]
    NoVariantTable(&'static str),
}

/// Props read by the registry itself and never forwarded.
const REGISTRY_PROPS: &[&str] = &["variant", "size", "orientation", "decorative", "max"];

fn axis<T: Copy + Default>(props: &Props, key: &str, parse: fn(&str) -> Option<T>) -> T {
    match props.get_str(key) {
        Some(name) => parse(name).unwrap_or_else(|| {
            tracing::debug!(key, value = name, "unknown value; using default");
            T::default()
        }),
        None => T::default(),
    }
}

impl ComponentKind {
    /// Parse a component name.
    pub fn parse(name: &str) -> Result<Self, RegistryError> {
        Self::from_name(name).ok_or_else(|| RegistryError::UnknownComponent {
            name: name.to_string(),
            expected: Self::ALL
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Gallery category.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Button => "Actions",
            Self::Badge | Self::Card | Self::Separator => "Display",
            Self::Alert | Self::Progress => "Feedback",
            Self::Input | Self::Label | Self::Checkbox | Self::Switch => "Forms",
            Self::Dialog | Self::Tooltip => "Overlay",
            Self::Tabs => "Navigation",
        }
    }

    /// The variant table of the component's outermost element, if it has one.
    pub fn table(self) -> Option<&'static VariantTable> {
        match self {
            Self::Button => Some(&BUTTON_TABLE),
            Self::Badge => Some(&BADGE_TABLE),
            Self::Alert => Some(&ALERT_TABLE),
            Self::Separator => Some(&SEPARATOR_TABLE),
            Self::Switch => Some(&SWITCH_TABLE),
            Self::Tabs => Some(&TABS_LIST_TABLE),
            _ => None,
        }
    }

    /// Like [`Self::table`], but an error for components without one.
    pub fn require_table(self) -> Result<&'static VariantTable, RegistryError> {
        self.table()
            .ok_or(RegistryError::NoVariantTable(self.as_str()))
    }

    /// Build the component from a prop bag and optional text content.
    ///
    /// Families are built as a small representative composition, with `text`
    /// as their main copy.
    pub fn build(self, props: &Props, text: Option<&str>) -> Node {
        let attrs = props.filtered(|key, _| !REGISTRY_PROPS.contains(&key));
        let text = text.map(Node::text).unwrap_or_default();
        let on = |key: &str| props.is_truthy(key);
        tracing::debug!(component = self.as_str(), props = props.len(), "build");

        match self {
            Self::Button => Button::new()
                .variant(axis(props, "variant", ButtonVariant::from_name))
                .size(axis(props, "size", ButtonSize::from_name))
                .loading(on("loading"))
                .as_child(on("asChild"))
                .attrs(&attrs)
                .child(text)
                .into_node(),
            Self::Badge => Badge::new()
                .variant(axis(props, "variant", BadgeVariant::from_name))
                .dot(on("dot"))
                .removable(on("removable"))
                .attrs(&attrs)
                .child(text)
                .into_node(),
            Self::Card => Card::new()
                .attrs(&attrs)
                .child(CardHeader::new().child(CardTitle::new().child(text)))
                .into_node(),
            Self::Alert => Alert::new()
                .variant(axis(props, "variant", AlertVariant::from_name))
                .attrs(&attrs)
                .child(AlertDescription::new().child(text))
                .into_node(),
            Self::Input => {
                let mut attrs = attrs;
                if let Some(size) = props.get("size").filter(|v| v.as_number().is_some()) {
                    attrs.set("size", size.clone());
                }
                Input::new().attrs(&attrs).into_node()
            }
            Self::Label => Label::new().attrs(&attrs).child(text).into_node(),
            Self::Separator => Separator::new()
                .orientation(axis(props, "orientation", Orientation::from_name))
                .decorative(props.get("decorative").map_or(true, PropValue::is_truthy))
                .attrs(&attrs)
                .into_node(),
            Self::Checkbox => Checkbox::new()
                .checked(on("checked"))
                .indeterminate(on("indeterminate"))
                .attrs(&attrs)
                .into_node(),
            Self::Switch => Switch::new()
                .size(axis(props, "size", SwitchSize::from_name))
                .checked(on("checked"))
                .attrs(&attrs)
                .into_node(),
            Self::Progress => {
                let mut attrs = attrs;
                let value = attrs.remove("value").and_then(|v| v.as_number());
                let progress = Progress::new().value(value);
                let progress = match props.get("max").and_then(PropValue::as_number) {
                    Some(max) => progress.max(max),
                    None => progress,
                };
                progress.attrs(&attrs).into_node()
            }
            Self::Dialog => Dialog::new()
                .open(on("open"))
                .child(DialogTrigger::new().child("Open"))
                .child(
                    DialogContent::new()
                        .attrs(&attrs)
                        .child(
                            DialogHeader::new()
                                .child(DialogTitle::new().child(text))
                                .child(DialogDescription::new().child("This action cannot be undone.")),
                        )
                        .child(
                            DialogFooter::new()
                                .child(DialogClose::new().child("Cancel"))
                                .child(Button::new().variant(ButtonVariant::Destructive).child("Continue")),
                        ),
                )
                .into_node(),
            Self::Tabs => {
                let selected = props.get_str("value").unwrap_or("overview").to_string();
                Tabs::new()
                    .value(selected)
                    .child(
                        TabsList::new()
                            .variant(axis(props, "variant", TabsListVariant::from_name))
                            .child(TabsTrigger::new("overview").child("Overview"))
                            .child(TabsTrigger::new("details").child("Details")),
                    )
                    .child(TabsContent::new("overview").child(text))
                    .child(TabsContent::new("details").child("More details"))
                    .into_node()
            }
            Self::Tooltip => Tooltip::new()
                .open(on("open"))
                .child(TooltipTrigger::new().attrs(&attrs).child("Hover"))
                .child(TooltipContent::new().child(text))
                .into_node(),
        }
    }
}
