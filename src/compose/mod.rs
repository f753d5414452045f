//! Per-target composition of active effects.

/// The compositor.
pub mod compositor;
/// Derived presentation records.
pub mod presentation;
