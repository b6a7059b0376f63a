//! Carton - The artist's toolbox for Vernis.
//!
//! This crate provides the foundational utilities shared by every Vernis crate,
//! much like a carton (artist's portfolio case) holds all the essential tools and
//! materials an artist needs for their work.
//!
//! # Modules
//!
//! - **dom_tag_config**: HTML tag and attribute tables used by the renderer and the sanitizer
//! - **escape**: HTML text/attribute escaping
//! - **hash**: Content hashing and deterministic element ids
//!
//! # Example
//!
//! ```
//! use vernis_carton::{is_void_tag, is_boolean_attr, escape_text};
//!
//! assert!(is_void_tag("input"));
//! assert!(is_boolean_attr("disabled"));
//! assert_eq!(escape_text("a < b"), "a &lt; b");
//! ```

pub mod dom_tag_config;
pub mod escape;
pub mod hash;

// Re-export compact_str::CompactString for convenience
pub use compact_str::format_compact;
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export bitflags for flag types
pub use bitflags::bitflags;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use dom_tag_config::*;
pub use escape::*;
pub use hash::*;
