use crate::catalog::effects::EffectDef;
use crate::content::media::MediaAsset;
use crate::content::text::TextContent;
use crate::foundation::core::Target;

/// Snapshot of which targets currently have content.
///
/// An effect may only be switched on when at least one of its available targets is
/// applicable. The background always is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applicability {
    title: bool,
    subtitle: bool,
    cta: bool,
    media: bool,
}

impl Applicability {
    /// Derive from the current text and the selected media, if any.
    pub fn from_content(text: &TextContent, media: Option<&MediaAsset>) -> Self {
        Self {
            title: text.has_text(Target::Title),
            subtitle: text.has_text(Target::Subtitle),
            cta: text.has_text(Target::Cta),
            media: media.is_some(),
        }
    }

    /// Every target applicable.
    pub fn everything() -> Self {
        Self {
            title: true,
            subtitle: true,
            cta: true,
            media: true,
        }
    }

    /// Whether `target` currently has content.
    pub fn is_applicable(&self, target: Target) -> bool {
        match target {
            Target::Title => self.title,
            Target::Subtitle => self.subtitle,
            Target::Cta => self.cta,
            Target::Media => self.media,
            Target::Background => true,
        }
    }

    /// Whether `def` may be enabled right now.
    pub fn approves(&self, def: &EffectDef) -> bool {
        def.available_targets
            .iter()
            .any(|&t| self.is_applicable(t))
    }

    /// The available targets of `def` that currently have content.
    ///
    /// Empty means the effect should be shown as inert.
    pub fn applicable_targets(&self, def: &EffectDef) -> Vec<Target> {
        def.available_targets
            .iter()
            .copied()
            .filter(|&t| self.is_applicable(t))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/guard.rs"]
mod tests;
