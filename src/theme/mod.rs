//! Color theme: gradient engine, templates applied to it, global style knobs and the
//! backdrop they resolve to.

/// Backdrop resolution.
pub mod backdrop;
/// Gradient engine and color list editor.
pub mod gradient;
/// Global style settings.
pub mod style;
