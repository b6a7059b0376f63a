//! # vernis_atelier
//!
//! Atelier - Variant-driven component wrappers for Vernis.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. This is where
//! the headless primitives are given their finish: each wrapper binds a
//! variant table and the prop sanitizer around a primitive and ships the
//! result as one component family.
//!
//! ## Layers
//!
//! - [`primitive`]: headless, unstyled parts that own state and ARIA wiring.
//! - [`components`]: styled wrappers over the primitives or plain elements.
//! - [`sanitize`]: the presentation-only prop denylist.
//! - [`sections`]: landing page sections selected by typed layout keys.
//! - [`registry`]: name-based construction for the CLI and the gallery.
//!
//! ```rust
//! use vernis_atelier::components::{Button, ButtonSize, ButtonVariant};
//! use vernis_relief::render_to_string;
//!
//! let html = render_to_string(
//!     &Button::new()
//!         .variant(ButtonVariant::Outline)
//!         .size(ButtonSize::Sm)
//!         .child("Cancel")
//!         .into_node(),
//! );
//! assert!(html.starts_with(r#"<button data-slot="button" class="#));
//! assert!(html.ends_with(">Cancel</button>"));
//! ```

#[macro_use]
mod macros;

pub mod components;
pub mod icons;
pub mod primitive;
pub mod registry;
pub mod sanitize;
pub mod sections;
pub mod wrapper;

pub use icons::Icon;
pub use registry::{ComponentKind, RegistryError};
pub use sanitize::{is_presentation_only, partition_props, sanitize, PRESENTATION_ONLY_PROPS};
pub use sections::{
    FooterLayout, HeroLayout, LandingPage, Link, NavLayout, PageContent, Section, SectionError,
};
pub use wrapper::{HostBuilder, Wrapper, WrapperBase, WrapperContract};
