use crate::catalog::effects;
use crate::catalog::formats::{OutputFormat, format_by_id};
use crate::catalog::templates::{DEFAULT_TEMPLATE_ID, template_by_id};
use crate::compose::compositor::Compositor;
use crate::compose::presentation::TargetPresentation;
use crate::content::media::{MediaAsset, MediaLibrary};
use crate::content::text::TextContent;
use crate::effects::config::EffectPatch;
use crate::effects::guard::Applicability;
use crate::effects::store::{EffectStore, Toggle};
use crate::foundation::core::{Category, Rgb8, Target};
use crate::foundation::error::AdcraftResult;
use crate::session::snapshot::Snapshot;
use crate::theme::backdrop::{Backdrop, resolve_backdrop};
use crate::theme::gradient::{ChannelOverflow, GradientState};
use crate::theme::style::{StylePatch, StyleSettings};

/// One creative being edited: content, effects, gradient and style.
///
/// This is the only owner of that state; every change goes through a method here so the
/// store invariants (guarded enable, no ghost configs, bounded color list) always hold.
#[derive(Clone, Debug)]
pub struct Creative {
    format: &'static OutputFormat,
    text: TextContent,
    media: MediaLibrary,
    effects: EffectStore,
    gradient: GradientState,
    style: StyleSettings,
    selected_template: Option<&'static str>,
    overflow: ChannelOverflow,
}

impl Creative {
    /// Fresh creative for the format with id `format_id`.
    pub fn new(format_id: &str) -> AdcraftResult<Self> {
        Ok(Self::with_format(format_by_id(format_id)?))
    }

    /// Fresh creative for `format`.
    pub fn with_format(format: &'static OutputFormat) -> Self {
        Self {
            format,
            text: TextContent::default(),
            media: MediaLibrary::default(),
            effects: EffectStore::new(),
            gradient: GradientState::default(),
            style: StyleSettings::default(),
            selected_template: Some(DEFAULT_TEMPLATE_ID),
            overflow: ChannelOverflow::default(),
        }
    }

    /// Output format.
    pub fn format(&self) -> &'static OutputFormat {
        self.format
    }

    /// Switch format. Existing text is cut to the new limits; returns whether any was.
    pub fn set_format(&mut self, format_id: &str) -> AdcraftResult<bool> {
        self.format = format_by_id(format_id)?;
        Ok(self.text.enforce(&self.format.text_limits()))
    }

    /// Current text.
    pub fn text(&self) -> &TextContent {
        &self.text
    }

    /// Set the text of a textual target. Returns whether it was truncated.
    pub fn set_text(&mut self, target: Target, text: impl Into<String>) -> AdcraftResult<bool> {
        let limits = self.format.text_limits();
        self.text.set(target, text, &limits)
    }

    /// Imported media and selection.
    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }

    /// Add an imported asset to the library.
    pub fn import_media(&mut self, asset: MediaAsset) -> AdcraftResult<()> {
        self.media.import(asset)
    }

    /// Select the media layer.
    pub fn select_media(&mut self, id: &str) -> AdcraftResult<()> {
        self.media.select(id)
    }

    /// Remove an asset from the library.
    pub fn remove_media(&mut self, id: &str) -> AdcraftResult<MediaAsset> {
        self.media.remove(id)
    }

    /// Deselect the media layer.
    pub fn clear_media_selection(&mut self) {
        self.media.clear_selection();
    }

    /// Which targets currently have content.
    pub fn applicability(&self) -> Applicability {
        Applicability::from_content(&self.text, self.media.selected())
    }

    /// Whether an effect cannot be switched on right now because none of its targets has
    /// content.
    pub fn is_effect_inert(&self, category: Category, id: &str) -> AdcraftResult<bool> {
        let def = effects::require(category, id)?;
        Ok(!self.applicability().approves(def))
    }

    /// Switch an effect on or off.
    pub fn toggle_effect(&mut self, category: Category, id: &str) -> AdcraftResult<Toggle> {
        let guard = self.applicability();
        self.effects.toggle(category, id, &guard)
    }

    /// Edit an enabled effect. Returns `false` when it is disabled.
    pub fn update_effect(
        &mut self,
        category: Category,
        id: &str,
        patch: &EffectPatch,
    ) -> AdcraftResult<bool> {
        self.effects.update(category, id, patch)
    }

    /// Effect configuration store.
    pub fn effects(&self) -> &EffectStore {
        &self.effects
    }

    /// Presentation of `target`.
    pub fn compose(&self, target: Target) -> TargetPresentation {
        Compositor::compose(&self.effects, target)
    }

    /// Gradient state.
    pub fn gradient(&self) -> &GradientState {
        &self.gradient
    }

    /// Gradient CSS using the configured overflow policy.
    pub fn gradient_css(&self) -> String {
        self.gradient.css(self.overflow)
    }

    /// How intensities above 100% treat channels past 255.
    pub fn set_channel_overflow(&mut self, overflow: ChannelOverflow) {
        self.overflow = overflow;
    }

    /// Apply a template's colors and remember it as selected.
    pub fn select_template(&mut self, id: &str) -> AdcraftResult<()> {
        let template = template_by_id(id)?;
        self.gradient.apply_template(template);
        self.selected_template = Some(template.id);
        tracing::debug!(template = template.id, "template selected");
        Ok(())
    }

    /// Last selected template. Later color edits do not clear it.
    pub fn selected_template(&self) -> Option<&'static str> {
        self.selected_template
    }

    /// Append a color stop unless the list is full.
    pub fn add_color(&mut self, color: Rgb8) -> bool {
        self.gradient.add_color(color)
    }

    /// Remove a color stop unless only two remain.
    pub fn remove_color(&mut self, index: usize) -> bool {
        self.gradient.remove_color(index)
    }

    /// Replace a color stop.
    pub fn update_color(&mut self, index: usize, color: Rgb8) -> AdcraftResult<()> {
        self.gradient.update_color(index, color)
    }

    /// Set the gradient angle (clamped).
    pub fn set_gradient_angle(&mut self, deg: u32) -> u16 {
        self.gradient.set_angle(deg)
    }

    /// Set the gradient intensity (clamped).
    pub fn set_gradient_intensity(&mut self, pct: u32) -> u16 {
        self.gradient.set_intensity(pct)
    }

    /// Style settings.
    pub fn style(&self) -> &StyleSettings {
        &self.style
    }

    /// Merge a style patch.
    pub fn apply_style(&mut self, patch: &StylePatch) {
        self.style.apply(patch);
    }

    /// Backdrop for the current state.
    pub fn backdrop(&self) -> Backdrop {
        resolve_backdrop(
            &self.gradient,
            &self.style,
            self.media.selected(),
            self.overflow,
        )
    }

    /// Everything a renderer needs, in one serializable record.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/creative.rs"]
mod tests;
