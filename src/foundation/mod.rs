//! Shared vocabulary: targets, categories, colors and the crate error type.

/// Targets, categories, hex colors and CSS number formatting.
pub(crate) mod core;
/// Error type and result alias.
pub(crate) mod error;
