use crate::content::media::MediaAsset;
use crate::effects::store::Toggle;
use crate::foundation::core::{Category, Target};
use crate::foundation::error::{AdcraftError, AdcraftResult};
use crate::session::creative::Creative;
use crate::theme::gradient::ChannelOverflow;

/// Builder for a [`Creative`] with content and effects set up front.
///
/// Effects are enabled after all content is in place, so the applicability check sees
/// the final text and media.
pub struct CreativeBuilder {
    format_id: String,
    text: Vec<(Target, String)>,
    media: Vec<MediaAsset>,
    selected_media: Option<String>,
    template: Option<String>,
    effects: Vec<(Category, String)>,
    overflow: ChannelOverflow,
}

impl CreativeBuilder {
    /// Start a builder for the format with id `format_id`.
    pub fn new(format_id: impl Into<String>) -> Self {
        Self {
            format_id: format_id.into(),
            text: Vec::new(),
            media: Vec::new(),
            selected_media: None,
            template: None,
            effects: Vec::new(),
            overflow: ChannelOverflow::default(),
        }
    }

    /// Set the title.
    pub fn title(self, text: impl Into<String>) -> Self {
        self.text(Target::Title, text)
    }

    /// Set the subtitle.
    pub fn subtitle(self, text: impl Into<String>) -> Self {
        self.text(Target::Subtitle, text)
    }

    /// Set the call-to-action label.
    pub fn cta(self, text: impl Into<String>) -> Self {
        self.text(Target::Cta, text)
    }

    fn text(mut self, target: Target, text: impl Into<String>) -> Self {
        self.text.push((target, text.into()));
        self
    }

    /// Import an asset and select it as the media layer.
    pub fn media(mut self, asset: MediaAsset) -> Self {
        self.selected_media = Some(asset.id.clone());
        self.media.push(asset);
        self
    }

    /// Apply a color template.
    pub fn template(mut self, id: impl Into<String>) -> Self {
        self.template = Some(id.into());
        self
    }

    /// Enable an effect.
    pub fn effect(mut self, category: Category, id: impl Into<String>) -> Self {
        self.effects.push((category, id.into()));
        self
    }

    /// Gradient channel overflow policy.
    pub fn channel_overflow(mut self, overflow: ChannelOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Build the creative. An effect that cannot be enabled is an error here, unlike an
    /// interactive toggle.
    pub fn build(self) -> AdcraftResult<Creative> {
        let mut creative = Creative::new(&self.format_id)?;
        creative.set_channel_overflow(self.overflow);

        for (target, text) in self.text {
            creative.set_text(target, text)?;
        }
        for asset in self.media {
            creative.import_media(asset)?;
        }
        if let Some(id) = &self.selected_media {
            creative.select_media(id)?;
        }
        if let Some(id) = &self.template {
            creative.select_template(id)?;
        }

        for (category, id) in &self.effects {
            match creative.toggle_effect(*category, id)? {
                Toggle::Enabled => {}
                Toggle::Disabled => {
                    return Err(AdcraftError::validation(format!(
                        "effect '{id}' ({category}) listed twice"
                    )));
                }
                Toggle::Rejected => {
                    return Err(AdcraftError::validation(format!(
                        "effect '{id}' ({category}) has no target with content"
                    )));
                }
            }
        }

        Ok(creative)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/builder.rs"]
mod tests;
