//! Page sections.
//!
//! Navigation, hero and footer sections each come in a closed set of
//! layouts. Keys are parsed into [`Section`] values up front; an unknown key
//! is an error rather than a silent fallback to some default layout.

use crate::components::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Separator};
use crate::icons::Icon;
use std::fmt;
use std::str::FromStr;
use vernis_carton::CompactString;
use vernis_relief::{Component, Element, Node, RenderContext};
use vernis_tint::{resolve_class, Axis, VariantConfig, VariantTable};

variant_enum! {
    pub enum NavLayout {
        #[default]
        Simple => "simple",
        Centered => "centered",
        Split => "split",
    }
}

variant_enum! {
    pub enum HeroLayout {
        #[default]
        Centered => "centered",
        Split => "split",
        Minimal => "minimal",
    }
}

variant_enum! {
    pub enum FooterLayout {
        #[default]
        Simple => "simple",
        Columns => "columns",
        Minimal => "minimal",
    }
}

/// Failure to parse a section key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("unknown section '{0}' (expected one of: nav, hero, footer)")]
    UnknownSection(String),

    #[error("unknown {section} layout '{layout}' (expected one of: {expected})")]
    UnknownLayout {
        section: &'static str,
        layout: String,
        expected: String,
    },

    #[error("section key '{0}' must have the form <section>:<layout>")]
    MalformedKey(String),
}

fn unknown_layout(section: &'static str, layout: &str, all: &[&'static str]) -> SectionError {
    SectionError::UnknownLayout {
        section,
        layout: layout.to_string(),
        expected: all.join(", "),
    }
}

macro_rules! layout_from_str {
    ($layout:ident, $section:literal) => {
        impl FromStr for $layout {
            type Err = SectionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| {
                    let all: Vec<&'static str> = Self::ALL.iter().map(|l| l.as_str()).collect();
                    unknown_layout($section, s, &all)
                })
            }
        }
    };
}

layout_from_str!(NavLayout, "nav");
layout_from_str!(HeroLayout, "hero");
layout_from_str!(FooterLayout, "footer");

/// A section kind together with its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Nav(NavLayout),
    Hero(HeroLayout),
    Footer(FooterLayout),
}

impl Section {
    /// Parse a section name and a layout name.
    pub fn from_parts(section: &str, layout: &str) -> Result<Self, SectionError> {
        match section {
            "nav" => layout.parse().map(Self::Nav),
            "hero" => layout.parse().map(Self::Hero),
            "footer" => layout.parse().map(Self::Footer),
            other => Err(SectionError::UnknownSection(other.to_string())),
        }
    }

    pub const fn kind(self) -> &'static str {
        match self {
            Self::Nav(_) => "nav",
            Self::Hero(_) => "hero",
            Self::Footer(_) => "footer",
        }
    }

    pub const fn layout(self) -> &'static str {
        match self {
            Self::Nav(l) => l.as_str(),
            Self::Hero(l) => l.as_str(),
            Self::Footer(l) => l.as_str(),
        }
    }
}

impl FromStr for Section {
    type Err = SectionError;

    /// Parse `<section>:<layout>`, e.g. `hero:split`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, layout) = s
            .split_once(':')
            .ok_or_else(|| SectionError::MalformedKey(s.to_string()))?;
        Self::from_parts(section.trim(), layout.trim())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.layout())
    }
}

pub static NAV_TABLE: VariantTable = VariantTable {
    name: "nav",
    base: "flex w-full items-center gap-6 border-b px-6 py-4",
    axes: &[Axis {
        name: "layout",
        default: "simple",
        values: &[
            ("simple", "justify-between"),
            ("centered", "flex-col justify-center"),
            ("split", "justify-between [&>nav]:flex-1 [&>nav]:justify-center"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

pub static HERO_TABLE: VariantTable = VariantTable {
    name: "hero",
    base: "mx-auto flex w-full max-w-6xl gap-8 px-6",
    axes: &[Axis {
        name: "layout",
        default: "centered",
        values: &[
            ("centered", "flex-col items-center py-24 text-center"),
            ("split", "flex-col items-center py-20 md:flex-row md:text-left"),
            ("minimal", "flex-col py-12"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

pub static FOOTER_TABLE: VariantTable = VariantTable {
    name: "footer",
    base: "w-full border-t px-6 text-sm text-muted-foreground",
    axes: &[Axis {
        name: "layout",
        default: "simple",
        values: &[
            ("simple", "flex items-center justify-between py-6"),
            ("columns", "grid gap-8 py-12 md:grid-cols-3"),
            ("minimal", "py-4 text-center"),
        ],
    }],
    modifiers: &[],
    compounds: &[],
};

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: CompactString,
    pub href: CompactString,
}

impl Link {
    pub fn new(label: impl Into<CompactString>, href: impl Into<CompactString>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn render(&self, class: &str) -> Node {
        Element::new("a")
            .with_attr("href", self.href.clone())
            .with_class(class)
            .with_child(self.label.clone())
            .into()
    }
}

/// Copy shown on a landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub brand: CompactString,
    pub title: CompactString,
    pub tagline: CompactString,
    /// Short label rendered as a badge above the title
    pub eyebrow: Option<CompactString>,
    pub links: Vec<Link>,
    pub cta: Link,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            brand: "Vernis".into(),
            title: "Build accessible interfaces".into(),
            tagline: "Variant-driven components rendered on the server.".into(),
            eyebrow: Some("New".into()),
            links: vec![
                Link::new("Docs", "/docs"),
                Link::new("Components", "/components"),
                Link::new("Gallery", "/gallery"),
            ],
            cta: Link::new("Get started", "/docs/getting-started"),
        }
    }
}

fn layout_class(table: &VariantTable, layout: &str) -> String {
    resolve_class(table, &VariantConfig::new().with("layout", layout), None)
}

fn nav_section(layout: NavLayout, content: &PageContent) -> Node {
    let brand = Element::new("a")
        .with_attr("href", "/")
        .with_class("font-semibold")
        .with_child(content.brand.clone());
    let links = Element::new("nav")
        .with_attr("aria-label", "Main")
        .with_class("flex items-center gap-4")
        .with_children(content.links.iter().map(|l| l.render("hover:text-foreground")));
    let mut header = Element::new("header")
        .with_attr("data-section", "nav")
        .with_attr("data-layout", layout.as_str())
        .with_class(&layout_class(&NAV_TABLE, layout.as_str()))
        .with_child(brand)
        .with_child(links);
    if layout == NavLayout::Split {
        header = header.with_child(
            Button::new()
                .size(ButtonSize::Sm)
                .as_child(true)
                .child(content.cta.render("")),
        );
    }
    header.into()
}

fn hero_section(layout: HeroLayout, content: &PageContent) -> Node {
    let eyebrow = content
        .eyebrow
        .as_ref()
        .filter(|_| layout != HeroLayout::Minimal)
        .map(|text| Badge::new().variant(BadgeVariant::Secondary).child(text.clone()).into_node());
    let copy = Element::new("div")
        .with_class("flex flex-col gap-4")
        .with_child(eyebrow)
        .with_child(
            Element::new("h1")
                .with_class("text-4xl font-bold tracking-tight")
                .with_child(content.title.clone()),
        )
        .with_child(
            Element::new("p")
                .with_class("text-lg text-muted-foreground")
                .with_child(content.tagline.clone()),
        );
    let cta = Button::new()
        .size(ButtonSize::Lg)
        .as_child(true)
        .child(
            Element::new("a")
                .with_attr("href", content.cta.href.clone())
                .with_child(content.cta.label.clone())
                .with_child(Icon::ArrowRight.render("")),
        );
    let actions = match layout {
        HeroLayout::Minimal => Element::new("div").with_child(cta),
        _ => Element::new("div")
            .with_class("flex gap-3")
            .with_child(cta)
            .with_child(
                Button::new()
                    .variant(ButtonVariant::Outline)
                    .size(ButtonSize::Lg)
                    .as_child(true)
                    .child(Element::new("a").with_attr("href", "/gallery").with_child("Browse components")),
            ),
    };
    let mut section = Element::new("section")
        .with_attr("data-section", "hero")
        .with_attr("data-layout", layout.as_str())
        .with_class(&layout_class(&HERO_TABLE, layout.as_str()))
        .with_child(copy)
        .with_child(actions);
    if layout == HeroLayout::Split {
        section = section.with_child(
            Element::new("div")
                .with_attr("aria-hidden", true)
                .with_class("aspect-video w-full rounded-xl border bg-muted md:w-1/2"),
        );
    }
    section.into()
}

fn footer_section(layout: FooterLayout, content: &PageContent) -> Node {
    let copyright = Element::new("p").with_child(format!("\u{a9} {}", content.brand));
    let footer = Element::new("footer")
        .with_attr("data-section", "footer")
        .with_attr("data-layout", layout.as_str())
        .with_class(&layout_class(&FOOTER_TABLE, layout.as_str()));
    let footer = match layout {
        FooterLayout::Minimal => footer.with_child(copyright),
        FooterLayout::Simple => footer.with_child(copyright).with_child(
            Element::new("nav")
                .with_attr("aria-label", "Footer")
                .with_class("flex gap-4")
                .with_children(content.links.iter().map(|l| l.render(""))),
        ),
        FooterLayout::Columns => footer
            .with_child(
                Element::new("div")
                    .with_child(Element::new("p").with_class("font-semibold").with_child(content.brand.clone()))
                    .with_child(Element::new("p").with_child(content.tagline.clone())),
            )
            .with_child(
                Element::new("ul")
                    .with_class("flex flex-col gap-2")
                    .with_children(
                        content
                            .links
                            .iter()
                            .map(|l| Element::new("li").with_child(l.render("")).into()),
                    ),
            )
            .with_child(
                Element::new("div")
                    .with_child(Separator::new().class("mb-4 md:hidden"))
                    .with_child(copyright),
            ),
    };
    footer.into()
}

impl Section {
    /// Render this section with `content`.
    pub fn render(self, content: &PageContent) -> Node {
        match self {
            Self::Nav(layout) => nav_section(layout, content),
            Self::Hero(layout) => hero_section(layout, content),
            Self::Footer(layout) => footer_section(layout, content),
        }
    }
}

/// Navigation, hero and footer composed into one page body.
#[derive(Debug, Clone, Default)]
pub struct LandingPage {
    pub nav: NavLayout,
    pub hero: HeroLayout,
    pub footer: FooterLayout,
    pub content: PageContent,
}

impl LandingPage {
    pub fn into_node(self) -> Node {
        Node::component(self)
    }
}

impl Component for LandingPage {
    fn display_name(&self) -> &'static str {
        "LandingPage"
    }

    fn render(&self, _cx: &RenderContext) -> Node {
        tracing::debug!(
            nav = self.nav.as_str(),
            hero = self.hero.as_str(),
            footer = self.footer.as_str(),
            "landing page"
        );
        Element::new("div")
            .with_class("flex min-h-screen flex-col")
            .with_child(Section::Nav(self.nav).render(&self.content))
            .with_child(
                Element::new("main")
                    .with_class("flex-1")
                    .with_child(Section::Hero(self.hero).render(&self.content)),
            )
            .with_child(Section::Footer(self.footer).render(&self.content))
            .into()
    }
}
