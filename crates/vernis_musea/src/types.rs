//! Type definitions for vernis_musea.
//!
//! An [`Art`] is one documented component: metadata plus a list of
//! [`ArtVariant`]s, each a ready-to-render node and the prop bag it was
//! built from.

use serde::{Deserialize, Serialize};
use vernis_atelier::ComponentKind;
use vernis_relief::{Node, Props};

/// A documented component and its showcased variations.
#[derive(Debug, Clone)]
pub struct Art {
    /// Display title
    pub title: String,

    pub description: Option<String>,

    /// Category for organization ("Actions", "Forms", ...)
    pub category: Option<String>,

    /// Tags for filtering/searching
    pub tags: Vec<String>,

    pub status: ArtStatus,

    /// Display order (lower = first)
    pub order: Option<u32>,

    /// Registry component this art documents, if any
    pub component: Option<ComponentKind>,

    pub variants: Vec<ArtVariant>,
}

/// Art status indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtStatus {
    /// Work in progress
    Draft,
    /// Ready for use
    #[default]
    Ready,
    /// No longer recommended
    Deprecated,
}

impl ArtStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::Deprecated => "deprecated",
        }
    }
}

/// A single showcased variation.
#[derive(Debug, Clone)]
pub struct ArtVariant {
    pub name: String,

    /// Props the node was built from; empty for hand-composed variants
    pub args: Props,

    /// Child text passed to the registry
    pub text: Option<String>,

    /// Whether this is the default variant
    pub is_default: bool,

    /// Tree to render
    pub node: Node,
}

impl ArtVariant {
    /// Build a variant through the component registry.
    pub fn from_registry(kind: ComponentKind, name: &str, args: Props, text: Option<&str>) -> Self {
        let node = kind.build(&args, text);
        Self {
            name: name.to_string(),
            args,
            text: text.map(str::to_string),
            is_default: false,
            node,
        }
    }

    /// A variant around a hand-composed node.
    pub fn composed(name: &str, node: impl Into<Node>) -> Self {
        Self {
            name: name.to_string(),
            args: Props::new(),
            text: None,
            is_default: false,
            node: node.into(),
        }
    }

    pub fn default_variant(mut self) -> Self {
        self.is_default = true;
        self
    }
}

impl Art {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
            tags: Vec::new(),
            status: ArtStatus::default(),
            order: None,
            component: None,
            variants: Vec::new(),
        }
    }

    /// An art for a registry component, titled and categorised after it.
    pub fn for_component(kind: ComponentKind, title: &str) -> Self {
        let mut art = Self::new(title);
        art.category = Some(kind.category().to_string());
        art.component = Some(kind);
        art
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn status(mut self, status: ArtStatus) -> Self {
        self.status = status;
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn variant(mut self, variant: ArtVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The variant marked default, or the first one.
    pub fn default_variant(&self) -> Option<&ArtVariant> {
        self.variants
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.variants.first())
    }

    /// URL-safe identifier derived from the title.
    pub fn slug(&self) -> String {
        crate::slugify(&self.title)
    }
}
