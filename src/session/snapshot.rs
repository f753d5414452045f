use std::collections::BTreeMap;

use serde::Serialize;

use crate::compose::compositor::Compositor;
use crate::compose::presentation::TargetPresentation;
use crate::effects::config::EffectConfig;
use crate::foundation::core::{Category, Rgb8, Target};
use crate::session::creative::Creative;
use crate::theme::backdrop::Backdrop;
use crate::theme::style::{StyleSettings, TextPlacement};

/// Enabled effect as listed in a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnabledEffect {
    /// Category of the effect.
    pub category: Category,
    /// Its configuration.
    #[serde(flatten)]
    pub config: EffectConfig,
}

/// Text block as the renderer should lay it out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextBlock {
    /// Visible text.
    pub text: String,
    /// Font size.
    pub font_size_px: f64,
    /// Text color (the cta button keeps its own palette).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb8>,
}

/// Serializable view of a [`Creative`] for an external renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Format id.
    pub format: &'static str,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Backdrop layer.
    pub backdrop: Backdrop,
    /// Non-empty text targets.
    pub text: BTreeMap<Target, TextBlock>,
    /// Vertical placement of the text block.
    pub text_placement: TextPlacement,
    /// Presentation per target.
    pub presentations: BTreeMap<Target, TargetPresentation>,
    /// Enabled effects in category then catalog order.
    pub effects: Vec<EnabledEffect>,
    /// Raw gradient stops.
    pub gradient_colors: Vec<Rgb8>,
    /// Last selected template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_template: Option<&'static str>,
}

impl Snapshot {
    pub(crate) fn capture(creative: &Creative) -> Self {
        let format = creative.format();
        let style = creative.style();

        let text = [Target::Title, Target::Subtitle, Target::Cta]
            .into_iter()
            .filter(|&t| creative.text().has_text(t))
            .filter_map(|t| Some((t, text_block(creative, style, t)?)))
            .collect();

        let effects = Category::ALL
            .into_iter()
            .flat_map(|category| {
                creative
                    .effects()
                    .active(category)
                    .map(move |(_, config)| EnabledEffect {
                        category,
                        config: config.clone(),
                    })
            })
            .collect();

        Self {
            format: format.id,
            width: format.width,
            height: format.height,
            backdrop: creative.backdrop(),
            text,
            text_placement: style.text_placement(),
            presentations: Compositor::compose_all(creative.effects()),
            effects,
            gradient_colors: creative.gradient().colors().to_vec(),
            selected_template: creative.selected_template(),
        }
    }
}

fn text_block(creative: &Creative, style: &StyleSettings, target: Target) -> Option<TextBlock> {
    Some(TextBlock {
        text: creative.text().get(target)?.to_owned(),
        font_size_px: style.font_size_px(target)?,
        color: (target != Target::Cta).then(|| style.text_color()),
    })
}
