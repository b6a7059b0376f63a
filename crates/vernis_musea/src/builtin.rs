//! Arts for every component shipped with vernis_atelier.
//!
//! Components with a variant table get one variant per axis value, built
//! through the registry. Stateful components add their interesting states on
//! top.

use crate::types::{Art, ArtStatus, ArtVariant};
use vernis_atelier::components::*;
use vernis_atelier::{
    ComponentKind, FooterLayout, HeroLayout, LandingPage, NavLayout, PageContent, Section,
};
use vernis_relief::{Element, Props};

/// Title, description, tags and sample text for a registry component.
fn describe(kind: ComponentKind) -> (&'static str, &'static str, &'static [&'static str], &'static str) {
    match kind {
        ComponentKind::Button => (
            "Button",
            "Triggers an action. Supports a loading state that disables the button and shows a spinner.",
            &["action", "form"],
            "Button",
        ),
        ComponentKind::Badge => (
            "Badge",
            "Short status label with an optional dot and remove button.",
            &["status", "label"],
            "Badge",
        ),
        ComponentKind::Card => (
            "Card",
            "Bordered container with header, content and footer parts.",
            &["layout", "container"],
            "Card title",
        ),
        ComponentKind::Alert => (
            "Alert",
            "Callout for important messages, announced with role=alert.",
            &["status", "feedback"],
            "Your session will expire in five minutes.",
        ),
        ComponentKind::Input => ("Input", "Single-line text field.", &["form"], ""),
        ComponentKind::Label => ("Label", "Caption for a form control.", &["form", "label"], "Email"),
        ComponentKind::Separator => (
            "Separator",
            "Visual or semantic divider between content groups.",
            &["layout"],
            "",
        ),
        ComponentKind::Checkbox => (
            "Checkbox",
            "Two-state control with an indeterminate mode.",
            &["form", "toggle"],
            "",
        ),
        ComponentKind::Switch => ("Switch", "On/off toggle.", &["form", "toggle"], ""),
        ComponentKind::Progress => (
            "Progress",
            "Completion indicator. Without a value it is indeterminate.",
            &["status", "feedback"],
            "",
        ),
        ComponentKind::Dialog => (
            "Dialog",
            "Modal window composed of trigger, overlay, content, header and footer parts.",
            &["overlay", "compound"],
            "Are you absolutely sure?",
        ),
        ComponentKind::Tabs => (
            "Tabs",
            "Layered panels, one visible at a time.",
            &["navigation", "compound"],
            "Overview of the project.",
        ),
        ComponentKind::Tooltip => (
            "Tooltip",
            "Popup describing its trigger.",
            &["overlay"],
            "More information",
        ),
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One registry variant per value of each axis in the component's table.
fn axis_variants(kind: ComponentKind, text: Option<&str>) -> Vec<ArtVariant> {
    let Some(table) = kind.table() else {
        return Vec::new();
    };
    let mut variants = Vec::new();
    for (index, axis) in table.axes.iter().enumerate() {
        for (value, _) in axis.values {
            let name = if axis.name == "variant" {
                title_case(value)
            } else {
                format!("{} {}", title_case(axis.name), value)
            };
            let args = Props::new().with(axis.name, *value);
            let variant = ArtVariant::from_registry(kind, &name, args, text);
            variants.push(if index == 0 && *value == axis.default {
                variant.default_variant()
            } else {
                variant
            });
        }
    }
    variants
}

fn registry(kind: ComponentKind, name: &str, args: &str, text: Option<&str>) -> ArtVariant {
    let args = Props::from_json(args).unwrap_or_default();
    ArtVariant::from_registry(kind, name, args, text)
}

/// States beyond the variant table.
fn state_variants(kind: ComponentKind, text: Option<&str>) -> Vec<ArtVariant> {
    use ComponentKind as K;

    match kind {
        K::Button => vec![
            registry(kind, "Loading", r#"{"loading": true}"#, Some("Saving")),
            registry(kind, "Disabled", r#"{"disabled": true}"#, text),
            ArtVariant::composed(
                "As link",
                Button::new()
                    .variant(ButtonVariant::Link)
                    .as_child(true)
                    .child(Element::new("a").with_attr("href", "/docs").with_child("Read the docs")),
            ),
        ],
        K::Badge => vec![
            registry(kind, "Dot", r#"{"dot": true}"#, Some("Online")),
            registry(kind, "Removable", r#"{"removable": true}"#, Some("Filter")),
        ],
        K::Card => vec![ArtVariant::composed(
            "Full",
            Card::new()
                .class("w-[350px]")
                .child(
                    CardHeader::new()
                        .child(CardTitle::new().child("Create project"))
                        .child(CardDescription::new().child("Deploy your new project in one click.")),
                )
                .child(CardContent::new().child(Label::new().attr("for", "name").child("Name")))
                .child(CardContent::new().child(Input::new().attr("id", "name").attr("placeholder", "Project name")))
                .child(
                    CardFooter::new()
                        .class("justify-between")
                        .child(Button::new().variant(ButtonVariant::Outline).child("Cancel"))
                        .child(Button::new().child("Deploy")),
                ),
        )
        .default_variant()],
        K::Alert => vec![ArtVariant::composed(
            "With title",
            Alert::new()
                .child(AlertTitle::new().child("Heads up!"))
                .child(AlertDescription::new().child(text.unwrap_or_default().to_string())),
        )],
        K::Input => vec![
            registry(kind, "Default", r#"{"type": "email", "placeholder": "Email"}"#, None).default_variant(),
            registry(kind, "Disabled", r#"{"placeholder": "Disabled", "disabled": true}"#, None),
            registry(kind, "File", r#"{"type": "file"}"#, None),
        ],
        K::Label => vec![registry(kind, "Default", r#"{"for": "email"}"#, text).default_variant()],
        K::Separator => vec![registry(kind, "Semantic", r#"{"decorative": false}"#, None)],
        K::Checkbox => vec![
            registry(kind, "Unchecked", "{}", None).default_variant(),
            registry(kind, "Checked", r#"{"checked": true}"#, None),
            registry(kind, "Indeterminate", r#"{"indeterminate": true}"#, None),
            registry(kind, "Disabled", r#"{"checked": true, "disabled": true}"#, None),
        ],
        K::Switch => vec![
            registry(kind, "On", r#"{"checked": true}"#, None),
            registry(kind, "Disabled", r#"{"disabled": true}"#, None),
        ],
        K::Progress => vec![
            registry(kind, "Indeterminate", "{}", None),
            registry(kind, "Loading", r#"{"value": 33}"#, None).default_variant(),
            registry(kind, "Complete", r#"{"value": 100}"#, None),
            registry(kind, "Custom max", r#"{"value": 3, "max": 4}"#, None),
        ],
        K::Dialog => vec![
            registry(kind, "Closed", "{}", text).default_variant(),
            registry(kind, "Open", r#"{"open": true}"#, text),
        ],
        K::Tabs => vec![registry(kind, "Second tab", r#"{"value": "details"}"#, text)],
        K::Tooltip => vec![
            registry(kind, "Closed", "{}", text).default_variant(),
            registry(kind, "Open", r#"{"open": true}"#, text),
        ],
    }
}

/// Landing page sections, one variant per layout of each section.
fn sections_art() -> Art {
    let content = PageContent::default();
    let mut art = Art::new("Landing page")
        .description("Navigation, hero and footer sections selected by typed layout keys.")
        .category("Sections")
        .tags(&["layout", "marketing"])
        .status(ArtStatus::Draft)
        .order(100);

    for nav in NavLayout::ALL {
        art = art.variant(ArtVariant::composed(
            &format!("Nav {nav}"),
            Section::Nav(*nav).render(&content),
        ));
    }
    for hero in HeroLayout::ALL {
        art = art.variant(ArtVariant::composed(
            &format!("Hero {hero}"),
            Section::Hero(*hero).render(&content),
        ));
    }
    for footer in FooterLayout::ALL {
        art = art.variant(ArtVariant::composed(
            &format!("Footer {footer}"),
            Section::Footer(*footer).render(&content),
        ));
    }
    art.variant(ArtVariant::composed("Full page", LandingPage::default().into_node()).default_variant())
}

/// Art for a single registry component.
pub fn component_art(kind: ComponentKind) -> Art {
    let (title, description, tags, text) = describe(kind);
    let text = Some(text).filter(|t| !t.is_empty());

    let mut variants = axis_variants(kind, text);
    let states = state_variants(kind, text);
    if states.iter().any(|v| v.is_default) {
        for variant in &mut variants {
            variant.is_default = false;
        }
    }
    variants.extend(states);
    if !variants.iter().any(|v| v.is_default) {
        if let Some(first) = variants.first_mut() {
            first.is_default = true;
        }
    }

    let mut art = Art::for_component(kind, title).description(description).tags(tags);
    art.variants = variants;
    art
}

/// An art for every component family plus the landing page sections.
pub fn builtin_arts() -> Vec<Art> {
    let mut arts: Vec<Art> = ComponentKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| component_art(*kind).order(i as u32))
        .collect();
    arts.push(sections_art());
    tracing::debug!(arts = arts.len(), "built-in arts");
    arts
}
