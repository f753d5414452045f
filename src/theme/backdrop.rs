use serde::Serialize;

use crate::content::media::{MediaAsset, MediaKind};
use crate::foundation::core::{Rgb8, css_num};
use crate::theme::gradient::{ChannelOverflow, GradientState};
use crate::theme::style::StyleSettings;

/// What the renderer paints behind the text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    /// No media, gradient on.
    Gradient {
        /// CSS `linear-gradient(...)`.
        css: String,
    },
    /// No media, gradient off.
    Solid {
        /// Fill color.
        color: Rgb8,
    },
    /// Selected media with a darkening overlay.
    Media {
        /// Media id.
        media_id: String,
        /// Image or video.
        media_kind: MediaKind,
        /// Source URL.
        url: String,
        /// Layer opacity, `0.0..=1.0`.
        opacity: f64,
        /// Blur radius.
        blur_px: u8,
        /// Zoom factor, `1.0..=1.5`.
        scale: f64,
        /// CSS background of the overlay layer.
        overlay: String,
    },
}

/// Decide the backdrop from the current gradient, style and media selection.
pub fn resolve_backdrop(
    gradient: &GradientState,
    style: &StyleSettings,
    media: Option<&MediaAsset>,
    overflow: ChannelOverflow,
) -> Backdrop {
    let Some(media) = media else {
        return if style.gradient_enabled() {
            Backdrop::Gradient {
                css: gradient.css(overflow),
            }
        } else {
            Backdrop::Solid {
                color: style.background_color(),
            }
        };
    };

    let darkness = f64::from(style.overlay_darkness_pct());
    let overlay = if style.gradient_enabled() {
        format!(
            "linear-gradient({}deg, rgba(0,0,0,{}), rgba(0,0,0,{}))",
            gradient.angle_deg(),
            css_num(darkness / 200.0),
            css_num(darkness / 100.0)
        )
    } else {
        format!("rgba(0,0,0,{})", css_num(darkness / 100.0))
    };

    Backdrop::Media {
        media_id: media.id.clone(),
        media_kind: media.kind,
        url: media.url.clone(),
        opacity: f64::from(style.media_opacity_pct()) / 100.0,
        blur_px: style.media_blur_px(),
        scale: f64::from(style.background_scale_pct()) / 100.0,
        overlay,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/backdrop.rs"]
mod tests;
