use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{AdcraftError, AdcraftResult};

/// One of the five addressable elements of a creative.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Headline text.
    Title,
    /// Secondary text under the headline.
    Subtitle,
    /// Call-to-action button label.
    Cta,
    /// Selected image or video layer.
    Media,
    /// Canvas backdrop.
    Background,
}

impl Target {
    /// All targets in presentation order.
    pub const ALL: [Target; 5] = [
        Target::Title,
        Target::Subtitle,
        Target::Cta,
        Target::Media,
        Target::Background,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Cta => "cta",
            Self::Media => "media",
            Self::Background => "background",
        }
    }

    /// Return `true` for the text-bearing targets (title, subtitle, cta).
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Title | Self::Subtitle | Self::Cta)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = AdcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "subtitle" => Ok(Self::Subtitle),
            "cta" | "call-to-action" => Ok(Self::Cta),
            "media" => Ok(Self::Media),
            "background" | "bg" => Ok(Self::Background),
            other => Err(AdcraftError::validation(format!("unknown target '{other}'"))),
        }
    }
}

/// Effect family. Each category owns its own id namespace.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Static filters and style tweaks (blur, sepia, opacity, ...).
    VisualFilter,
    /// One-shot entrance animations.
    EntranceAnimation,
    /// Animations that only apply to text targets.
    TextAnimation,
    /// Ambient animations of the backdrop.
    BackgroundAnimation,
}

impl Category {
    /// All categories, in composition order.
    pub const ALL: [Category; 4] = [
        Category::VisualFilter,
        Category::EntranceAnimation,
        Category::TextAnimation,
        Category::BackgroundAnimation,
    ];

    /// Stable kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VisualFilter => "visual-filter",
            Self::EntranceAnimation => "entrance-animation",
            Self::TextAnimation => "text-animation",
            Self::BackgroundAnimation => "background-animation",
        }
    }

    /// Prefix of the animation token emitted for effects of this category.
    ///
    /// Visual filters never emit tokens.
    pub fn token_prefix(self) -> Option<&'static str> {
        match self {
            Self::VisualFilter => None,
            Self::EntranceAnimation => Some("animate-"),
            Self::TextAnimation => Some("animate-text-"),
            Self::BackgroundAnimation => Some("animate-bg-"),
        }
    }

    /// Whether effects of this category may contribute animation tokens to `target`.
    pub fn animates(self, target: Target) -> bool {
        match self {
            Self::VisualFilter => false,
            Self::EntranceAnimation => true,
            Self::TextAnimation => target.is_textual(),
            Self::BackgroundAnimation => target == Target::Background,
        }
    }

    /// Inclusive duration range accepted when editing an effect of this category.
    ///
    /// `None` for non-temporal categories.
    pub fn duration_bounds_ms(self) -> Option<(u32, u32)> {
        match self {
            Self::VisualFilter => None,
            Self::EntranceAnimation => Some((200, 3000)),
            Self::TextAnimation => Some((200, 5000)),
            Self::BackgroundAnimation => Some((1000, 30000)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AdcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual-filter" | "visual_filter" | "visual" => Ok(Self::VisualFilter),
            "entrance-animation" | "entrance_animation" | "entrance" => {
                Ok(Self::EntranceAnimation)
            }
            "text-animation" | "text_animation" | "text" => Ok(Self::TextAnimation),
            "background-animation" | "background_animation" | "background" => {
                Ok(Self::BackgroundAnimation)
            }
            other => Err(AdcraftError::validation(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}

/// Opaque 8-bit sRGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, digits are case-insensitive).
    pub fn parse_hex(s: &str) -> AdcraftResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AdcraftError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| AdcraftError::validation(format!("invalid hex byte \"{pair}\"")))
        };

        Ok(Self {
            r: byte(&digits[0..2])?,
            g: byte(&digits[2..4])?,
            b: byte(&digits[4..6])?,
        })
    }

    /// Channels as an array.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = AdcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Format a CSS number in its shortest form (`4`, `0.5`, `1.3`).
///
/// Values are rounded to 4 decimals first so float noise like `0.7000000000000001` never
/// reaches a style string.
pub(crate) fn css_num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
