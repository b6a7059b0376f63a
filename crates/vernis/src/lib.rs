//! # Vernis
//!
//! Variant-driven, server-rendered UI components written in Rust.
//!
//! This crate re-exports all Vernis sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared utilities: hashing, escaping, tag tables
//! - [`relief`] - Render tree, components and the server renderer
//! - [`tint`] - Variant tables and the variant resolver
//! - [`atelier`] - Headless primitives and styled component wrappers
//! - [`musea`] - Component gallery and documentation

/// Shared utilities: hashing, escaping, tag tables.
pub use vernis_carton as carton;

/// Render tree, components and the server renderer.
pub use vernis_relief as relief;

/// Variant tables and the variant resolver.
pub use vernis_tint as tint;

/// Headless primitives and styled component wrappers.
pub use vernis_atelier as atelier;

/// Component gallery and documentation.
pub use vernis_musea as musea;
