//! Static effect registry.
//!
//! Every effect the engine knows is one [`EffectDef`] entry below. An entry carries both its
//! editing defaults and its [`Look`], so the store and the compositor need no per-effect code.

use serde::Serialize;

use crate::foundation::core::{Category, Target};
use crate::foundation::error::{AdcraftError, AdcraftResult};

/// How an enabled effect shows up in a [`TargetPresentation`](crate::TargetPresentation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Look {
    /// Chainable filter function `function(base + i * scale<unit>)`, `i = intensity / 100`.
    Filter {
        /// CSS filter function name.
        function: &'static str,
        /// Value at zero intensity.
        base: f64,
        /// Value added at full intensity.
        scale: f64,
        /// Unit suffix (`""`, `"px"`, `"deg"`).
        unit: &'static str,
    },
    /// Chainable `drop-shadow(0 0 <i * max_radius>px <color>)`.
    DropShadow {
        /// Radius at full intensity.
        max_radius_px: f64,
        /// CSS color of the shadow.
        color: &'static str,
    },
    /// Sets the discrete `opacity` style to `i`.
    Opacity,
    /// Sets the discrete `text_shadow` style to `0 0 <i * max_radius>px <color>`.
    TextShadow {
        /// Radius at full intensity.
        max_radius_px: f64,
        /// CSS color of the shadow.
        color: &'static str,
    },
    /// Emits an animation token (`<category prefix><id>`).
    Animation,
}

/// Immutable definition of one effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EffectDef {
    /// Id, unique within its category.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the intensity knob means anything for this effect.
    pub supports_intensity: bool,
    /// Default duration; `0` marks a non-temporal effect.
    pub default_duration_ms: u32,
    /// Targets the effect may be applied to. Never empty.
    pub available_targets: &'static [Target],
    /// Rendering semantics.
    pub look: Look,
}

impl EffectDef {
    /// Whether `target` is one of the available targets.
    pub fn is_available_on(&self, target: Target) -> bool {
        self.available_targets.contains(&target)
    }

    /// Whether the effect runs over time.
    pub fn is_temporal(&self) -> bool {
        self.default_duration_ms > 0
    }
}

const MEDIA_BG: &[Target] = &[Target::Media, Target::Background];
const TEXT: &[Target] = &[Target::Title, Target::Subtitle, Target::Cta];
const TEXT_MEDIA: &[Target] = &[Target::Title, Target::Subtitle, Target::Cta, Target::Media];
const EVERYWHERE: &[Target] = &[
    Target::Media,
    Target::Background,
    Target::Title,
    Target::Subtitle,
    Target::Cta,
];
const HEADINGS: &[Target] = &[Target::Title, Target::Subtitle];
const BG: &[Target] = &[Target::Background];
const BG_MEDIA: &[Target] = &[Target::Background, Target::Media];

const fn filter(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    available_targets: &'static [Target],
    look: Look,
) -> EffectDef {
    EffectDef {
        id,
        name,
        description,
        supports_intensity: true,
        default_duration_ms: 0,
        available_targets,
        look,
    }
}

const fn func(function: &'static str, base: f64, scale: f64, unit: &'static str) -> Look {
    Look::Filter {
        function,
        base,
        scale,
        unit,
    }
}

const fn anim(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    supports_intensity: bool,
    default_duration_ms: u32,
    available_targets: &'static [Target],
) -> EffectDef {
    EffectDef {
        id,
        name,
        description,
        supports_intensity,
        default_duration_ms,
        available_targets,
        look: Look::Animation,
    }
}

static VISUAL_FILTERS: [EffectDef; 11] = [
    filter("blur", "Blur", "Apply blur filter", MEDIA_BG, func("blur", 0.0, 10.0, "px")),
    filter(
        "grayscale",
        "Grayscale",
        "Convert to grayscale",
        MEDIA_BG,
        func("grayscale", 0.0, 1.0, ""),
    ),
    filter("sepia", "Sepia", "Vintage sepia tone", MEDIA_BG, func("sepia", 0.0, 1.0, "")),
    filter(
        "contrast",
        "High Contrast",
        "Increase contrast",
        MEDIA_BG,
        func("contrast", 1.0, 1.0, ""),
    ),
    filter(
        "brightness",
        "Brightness",
        "Adjust brightness",
        EVERYWHERE,
        func("brightness", 1.0, 1.0, ""),
    ),
    filter(
        "saturate",
        "Saturate",
        "Boost saturation",
        MEDIA_BG,
        func("saturate", 1.0, 1.0, ""),
    ),
    filter(
        "glow",
        "Glow",
        "Add glow effect",
        TEXT_MEDIA,
        Look::DropShadow {
            max_radius_px: 20.0,
            color: "rgba(139,92,246,0.8)",
        },
    ),
    filter("invert", "Invert", "Invert colors", MEDIA_BG, func("invert", 0.0, 1.0, "")),
    filter(
        "hue-rotate",
        "Hue Rotate",
        "Shift color hue",
        MEDIA_BG,
        func("hue-rotate", 0.0, 360.0, "deg"),
    ),
    filter("opacity", "Opacity", "Control transparency", EVERYWHERE, Look::Opacity),
    filter(
        "shadow",
        "Shadow",
        "Add drop shadow",
        TEXT_MEDIA,
        Look::TextShadow {
            max_radius_px: 20.0,
            color: "rgba(0,0,0,0.5)",
        },
    ),
];

static ENTRANCE_ANIMATIONS: [EffectDef; 13] = [
    anim("fade-in", "Fade In", "Smooth fade entrance", false, 800, TEXT_MEDIA),
    anim("slide-up", "Slide Up", "Slide from bottom", false, 600, TEXT_MEDIA),
    anim("slide-down", "Slide Down", "Slide from top", false, 600, TEXT_MEDIA),
    anim("slide-left", "Slide Left", "Slide from right", false, 600, TEXT_MEDIA),
    anim("slide-right", "Slide Right", "Slide from left", false, 600, TEXT_MEDIA),
    anim("zoom-in", "Zoom In", "Scale from small", false, 700, TEXT_MEDIA),
    anim("zoom-out", "Zoom Out", "Scale from large", false, 700, TEXT_MEDIA),
    anim("bounce-in", "Bounce In", "Bouncy entrance", false, 900, TEXT_MEDIA),
    anim("flip-x", "Flip Horizontal", "3D horizontal flip", false, 800, TEXT_MEDIA),
    anim("flip-y", "Flip Vertical", "3D vertical flip", false, 800, TEXT_MEDIA),
    anim("rotate-in", "Rotate In", "Rotate while entering", false, 800, TEXT_MEDIA),
    anim("elastic", "Elastic", "Elastic bounce", false, 1000, TEXT_MEDIA),
    anim("swing", "Swing", "Swing entrance", false, 1000, TEXT),
];

static TEXT_ANIMATIONS: [EffectDef; 11] = [
    anim("typing", "Typing", "Typewriter effect", false, 2000, HEADINGS),
    anim("glitch", "Glitch", "Digital glitch", true, 300, TEXT),
    anim("neon", "Neon Glow", "Pulsing neon", true, 2000, TEXT),
    anim("rainbow", "Rainbow", "Color cycle", false, 3000, TEXT),
    anim("wave", "Wave", "Wave motion", true, 1000, TEXT),
    anim("bounce", "Bounce", "Bouncing text", true, 1000, TEXT),
    anim("shake", "Shake", "Shake effect", true, 500, TEXT),
    anim("pulse", "Pulse", "Scale pulsing", true, 1500, TEXT),
    anim("flicker", "Flicker", "Light flicker", true, 500, TEXT),
    anim("blur-in", "Blur In", "Blur focus", true, 1000, TEXT),
    anim("gradient-shift", "Gradient Text", "Animated gradient", false, 3000, TEXT),
];

static BACKGROUND_ANIMATIONS: [EffectDef; 9] = [
    anim("gradient-shift", "Gradient Shift", "Moving gradient", true, 8000, BG),
    anim("particles", "Particles", "Floating particles", true, 20000, BG),
    anim("waves", "Waves", "Wave pattern", true, 15000, BG),
    anim("stars", "Stars", "Starfield effect", true, 30000, BG),
    anim("rain", "Rain", "Rain drops", true, 1000, BG),
    anim("snow", "Snow", "Falling snow", true, 10000, BG),
    anim("scan-lines", "Scan Lines", "Retro scan lines", true, 0, BG),
    anim("ken-burns", "Ken Burns", "Slow zoom pan", true, 10000, BG_MEDIA),
    anim("parallax", "Parallax", "Depth parallax", true, 0, BG_MEDIA),
];

/// All definitions of `category`, in catalog order.
pub fn definitions(category: Category) -> &'static [EffectDef] {
    match category {
        Category::VisualFilter => &VISUAL_FILTERS,
        Category::EntranceAnimation => &ENTRANCE_ANIMATIONS,
        Category::TextAnimation => &TEXT_ANIMATIONS,
        Category::BackgroundAnimation => &BACKGROUND_ANIMATIONS,
    }
}

/// Look up a definition by `(category, id)`.
pub fn lookup(category: Category, id: &str) -> Option<&'static EffectDef> {
    definitions(category).iter().find(|d| d.id == id)
}

/// Like [`lookup`], but an unknown id is an error.
pub fn require(category: Category, id: &str) -> AdcraftResult<&'static EffectDef> {
    lookup(category, id).ok_or_else(|| AdcraftError::unknown_effect(category, id))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/effects.rs"]
mod tests;
