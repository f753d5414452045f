//! Read-only registries: effects, color templates and output formats.
//!
//! All entries are `static` data; nothing here is ever mutated.

/// Effect definitions per category.
pub mod effects;
/// Output formats and their text limits.
pub mod formats;
/// Gradient color presets.
pub mod templates;
