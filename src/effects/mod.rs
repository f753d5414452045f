//! Effect configuration state and the rule that gates enabling an effect.

/// Per-effect parameters and partial updates.
pub mod config;
/// Applicability guard.
pub mod guard;
/// The configuration store.
pub mod store;
