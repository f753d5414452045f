//! Content handed to the engine by its collaborators: text fields and imported media.

/// Imported media assets and selection.
pub mod media;
/// Title, subtitle and call-to-action text.
pub mod text;
