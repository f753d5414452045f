use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rgb8, Target};

/// Where the text block sits vertically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextPlacement {
    /// Vertically centered.
    Center,
    /// Top-aligned with a top padding in percent of the canvas height.
    Top {
        /// Padding in percent.
        padding_pct: u8,
    },
}

/// Global look-and-feel knobs that are not effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleSettings {
    media_opacity_pct: u8,
    media_blur_px: u8,
    overlay_darkness_pct: u8,
    title_size_px: u8,
    text_position_pct: u8,
    background_scale_pct: u8,
    text_color: Rgb8,
    background_color: Rgb8,
    gradient_enabled: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            media_opacity_pct: 100,
            media_blur_px: 0,
            overlay_darkness_pct: 30,
            title_size_px: 60,
            text_position_pct: 50,
            background_scale_pct: 100,
            text_color: Rgb8::new(0xFF, 0xFF, 0xFF),
            background_color: Rgb8::new(0, 0, 0),
            gradient_enabled: true,
        }
    }
}

/// Partial update for [`StyleSettings`]. Numbers are clamped to their ranges on apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylePatch {
    /// Media layer opacity, `0..=100`.
    pub media_opacity_pct: Option<u32>,
    /// Media blur radius, `0..=20`.
    pub media_blur_px: Option<u32>,
    /// Darkening overlay on top of media, `0..=100`.
    pub overlay_darkness_pct: Option<u32>,
    /// Title font size, `20..=120`.
    pub title_size_px: Option<u32>,
    /// Vertical text position, `0..=100`; 50 centers the text.
    pub text_position_pct: Option<u32>,
    /// Media zoom, `100..=150`.
    pub background_scale_pct: Option<u32>,
    /// Text color.
    pub text_color: Option<Rgb8>,
    /// Solid backdrop color used when the gradient is off.
    pub background_color: Option<Rgb8>,
    /// Gradient backdrop on/off.
    pub gradient_enabled: Option<bool>,
}

fn clamp_u8(v: u32, lo: u8, hi: u8) -> u8 {
    v.clamp(u32::from(lo), u32::from(hi)) as u8
}

impl StyleSettings {
    /// Merge `patch`, clamping every number.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(v) = patch.media_opacity_pct {
            self.media_opacity_pct = clamp_u8(v, 0, 100);
        }
        if let Some(v) = patch.media_blur_px {
            self.media_blur_px = clamp_u8(v, 0, 20);
        }
        if let Some(v) = patch.overlay_darkness_pct {
            self.overlay_darkness_pct = clamp_u8(v, 0, 100);
        }
        if let Some(v) = patch.title_size_px {
            self.title_size_px = clamp_u8(v, 20, 120);
        }
        if let Some(v) = patch.text_position_pct {
            self.text_position_pct = clamp_u8(v, 0, 100);
        }
        if let Some(v) = patch.background_scale_pct {
            self.background_scale_pct = clamp_u8(v, 100, 150);
        }
        if let Some(c) = patch.text_color {
            self.text_color = c;
        }
        if let Some(c) = patch.background_color {
            self.background_color = c;
        }
        if let Some(on) = patch.gradient_enabled {
            self.gradient_enabled = on;
        }
    }

    /// Media layer opacity in percent.
    pub fn media_opacity_pct(&self) -> u8 {
        self.media_opacity_pct
    }

    /// Media blur radius.
    pub fn media_blur_px(&self) -> u8 {
        self.media_blur_px
    }

    /// Overlay darkness in percent.
    pub fn overlay_darkness_pct(&self) -> u8 {
        self.overlay_darkness_pct
    }

    /// Title font size.
    pub fn title_size_px(&self) -> u8 {
        self.title_size_px
    }

    /// Media zoom in percent.
    pub fn background_scale_pct(&self) -> u8 {
        self.background_scale_pct
    }

    /// Text color.
    pub fn text_color(&self) -> Rgb8 {
        self.text_color
    }

    /// Solid backdrop color.
    pub fn background_color(&self) -> Rgb8 {
        self.background_color
    }

    /// Whether the gradient backdrop is on.
    pub fn gradient_enabled(&self) -> bool {
        self.gradient_enabled
    }

    /// Font size of a textual target; subtitle and cta scale off the title size.
    pub fn font_size_px(&self, target: Target) -> Option<f64> {
        let title = f64::from(self.title_size_px);
        match target {
            Target::Title => Some(title),
            Target::Subtitle => Some(title * 0.35),
            Target::Cta => Some(title * 0.28),
            Target::Media | Target::Background => None,
        }
    }

    /// Vertical placement of the text block.
    pub fn text_placement(&self) -> TextPlacement {
        if self.text_position_pct == 50 {
            TextPlacement::Center
        } else {
            TextPlacement::Top {
                padding_pct: self.text_position_pct,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/style.rs"]
mod tests;
