//! The editable creative and the ways to drive it: direct calls, a builder, or a replayed
//! JSON script.

/// Builder for creatives.
pub mod builder;
/// The creative aggregate.
pub mod creative;
/// JSON edit scripts.
pub mod script;
/// Renderer-facing snapshot.
pub mod snapshot;
