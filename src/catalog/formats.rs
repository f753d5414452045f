use serde::Serialize;

use crate::content::text::TextLimits;
use crate::foundation::error::{AdcraftError, AdcraftResult};

/// Canvas orientation of an output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Width equals height.
    Square,
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
}

/// Target platform output size. Read-only to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutputFormat {
    /// Stable id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Platform the format is meant for.
    pub platform: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// One-line description.
    pub description: &'static str,
}

impl OutputFormat {
    /// Orientation derived from the canvas size.
    pub fn orientation(&self) -> Orientation {
        match self.width.cmp(&self.height) {
            std::cmp::Ordering::Equal => Orientation::Square,
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Per-field text length limits for this format.
    ///
    /// Tall formats leave less horizontal room per line, so they get tighter limits.
    pub fn text_limits(&self) -> TextLimits {
        match self.orientation() {
            Orientation::Portrait => TextLimits {
                title: 40,
                subtitle: 120,
                cta: 25,
            },
            Orientation::Square | Orientation::Landscape => TextLimits::default(),
        }
    }
}

static FORMATS: [OutputFormat; 6] = [
    OutputFormat {
        id: "ig-post",
        name: "Instagram Post",
        platform: "Instagram",
        width: 1080,
        height: 1080,
        description: "Square format for Instagram feed posts",
    },
    OutputFormat {
        id: "ig-story",
        name: "Instagram Story",
        platform: "Instagram",
        width: 1080,
        height: 1920,
        description: "Vertical format for Instagram stories",
    },
    OutputFormat {
        id: "fb-post",
        name: "Facebook Post",
        platform: "Facebook",
        width: 1200,
        height: 630,
        description: "Standard Facebook post image",
    },
    OutputFormat {
        id: "twitter-post",
        name: "Twitter Post",
        platform: "Twitter/X",
        width: 1200,
        height: 675,
        description: "Standard Twitter/X post image",
    },
    OutputFormat {
        id: "linkedin-post",
        name: "LinkedIn Post",
        platform: "LinkedIn",
        width: 1200,
        height: 627,
        description: "LinkedIn shared image format",
    },
    OutputFormat {
        id: "youtube-thumbnail",
        name: "YouTube Thumbnail",
        platform: "YouTube",
        width: 1280,
        height: 720,
        description: "YouTube video thumbnail",
    },
];

/// All output formats.
pub fn formats() -> &'static [OutputFormat] {
    &FORMATS
}

/// Look up a format by id.
pub fn format_by_id(id: &str) -> AdcraftResult<&'static OutputFormat> {
    FORMATS
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AdcraftError::UnknownFormat(id.to_owned()))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/formats.rs"]
mod tests;
