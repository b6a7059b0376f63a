//! # vernis_tint
//!
//! Tint - Variant tables and class resolution for Vernis.
//!
//! ## Name Origin
//!
//! A **tint** is a base colour mixed with white: the same pigment in many
//! shades. `vernis_tint` turns one component into many by mapping named style
//! axes (`variant`, `size`) and boolean modifiers (`loading`, `dot`) to class
//! fragments.
//!
//! ## Resolution rules
//!
//! - Fragments are emitted in a fixed order: base, axes (table order),
//!   modifiers (table order), compound variants (table order), extra class.
//! - Every axis yields exactly one fragment. Absent or unknown values use the
//!   axis default; resolution never fails.
//! - Resolution is pure: the same configuration always yields the same string.
//!
//! ## Usage
//!
//! ```rust
//! use vernis_tint::{resolve_class, Axis, Modifier, VariantConfig, VariantTable};
//!
//! static CHIP: VariantTable = VariantTable {
//!     name: "chip",
//!     base: "chip",
//!     axes: &[Axis {
//!         name: "tone",
//!         default: "plain",
//!         values: &[("plain", "chip-plain"), ("loud", "chip-loud")],
//!     }],
//!     modifiers: &[Modifier { name: "muted", fragment: "opacity-50" }],
//!     compounds: &[],
//! };
//!
//! let config = VariantConfig::new().with("tone", "loud").modifier("muted", true);
//! assert_eq!(resolve_class(&CHIP, &config, None), "chip chip-loud opacity-50");
//!
//! // Unknown values fall back to the default.
//! let config = VariantConfig::new().with("tone", "neon");
//! assert_eq!(resolve_class(&CHIP, &config, None), "chip chip-plain");
//! ```

mod config;
mod merge;
mod resolve;
mod table;

pub use config::VariantConfig;
pub use merge::{merge_classes, ClassList};
pub use resolve::{resolve, resolve_class, PartSource, Resolution, ResolvedPart};
pub use table::{Axis, CompoundVariant, Modifier, TableError, VariantTable};
