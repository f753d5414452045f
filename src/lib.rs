//! adcraft is the creative composition engine behind a social image and ad generator.
//!
//! It layers visual filters, entrance animations, text animations and background
//! animations onto five named targets (title, subtitle, call-to-action, media, background)
//! and derives, per target, the presentation record an external renderer paints. A
//! companion gradient engine turns a color list, angle and intensity into the backdrop.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: a [`Creative`] owns text, media, the [`EffectStore`], gradient and style.
//!    Enabling an effect is gated by the [`Applicability`] guard.
//! 2. **Compose**: [`Compositor`] reduces the enabled effects touching a target into one
//!    [`TargetPresentation`] (filter chain, discrete styles, animation tokens, timing).
//! 3. **Hand off**: [`Snapshot`] bundles every presentation with the [`Backdrop`] for a
//!    renderer. Rendering itself lives outside this crate.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Static catalogs**: effects, templates and formats are `static` data.
//! - **Pure composition**: presentations are recomputed from state on demand.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod compose;
mod content;
mod effects;
mod foundation;
mod session;
mod theme;

pub use catalog::effects::{EffectDef, Look, definitions, lookup};
pub use catalog::formats::{Orientation, OutputFormat, format_by_id, formats};
pub use catalog::templates::{DEFAULT_TEMPLATE_ID, Template, template_by_id, templates};
pub use compose::compositor::Compositor;
pub use compose::presentation::{ExtraStyle, TargetPresentation};
pub use content::media::{MediaAsset, MediaKind, MediaLibrary};
pub use content::text::{TextContent, TextLimits};
pub use effects::config::{
    DEFAULT_INTENSITY, EffectConfig, EffectPatch, MAX_DELAY_MS, MAX_INTENSITY,
};
pub use effects::guard::Applicability;
pub use effects::store::{EffectStore, Toggle};
pub use foundation::core::{Category, Rgb8, Target};
pub use foundation::error::{AdcraftError, AdcraftResult};
pub use session::builder::CreativeBuilder;
pub use session::creative::Creative;
pub use session::script::{Action, Replay, Script, StepOutcome};
pub use session::snapshot::{EnabledEffect, Snapshot, TextBlock};
pub use theme::backdrop::{Backdrop, resolve_backdrop};
pub use theme::gradient::{
    ChannelOverflow, DEFAULT_ADDED_COLOR, GradientState, MAX_ANGLE_DEG, MAX_COLORS,
    MAX_INTENSITY_PCT, MIN_COLORS, build_gradient,
};
pub use theme::style::{StylePatch, StyleSettings, TextPlacement};
