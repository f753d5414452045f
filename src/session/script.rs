//! JSON edit scripts.
//!
//! A script names an output format, optional initial content, and an ordered list of
//! actions. Replaying it drives a [`Creative`] through the same operations an editor UI
//! would, which makes it the configuration surface of the command-line tool and a
//! convenient fixture format for tests.

use serde::{Deserialize, Serialize};

use crate::catalog::formats::format_by_id;
use crate::content::media::MediaAsset;
use crate::content::text::TextContent;
use crate::effects::config::EffectPatch;
use crate::effects::store::Toggle;
use crate::foundation::core::{Category, Rgb8, Target};
use crate::foundation::error::{AdcraftError, AdcraftResult};
use crate::session::creative::Creative;
use crate::theme::gradient::{ChannelOverflow, DEFAULT_ADDED_COLOR};
use crate::theme::style::StylePatch;

/// Replayable description of an editing session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Output format id.
    pub format: String,
    /// Initial text.
    #[serde(default)]
    pub text: TextContent,
    /// Media imported before the first step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaAsset>,
    /// Media selected before the first step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_media: Option<String>,
    /// Gradient overflow policy.
    #[serde(default)]
    pub channel_overflow: ChannelOverflow,
    /// Actions in order.
    #[serde(default)]
    pub steps: Vec<Action>,
}

/// One editing action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    /// Change output format.
    SetFormat {
        /// Format id.
        id: String,
    },
    /// Replace the text of a textual target.
    SetText {
        /// Title, subtitle or cta.
        target: Target,
        /// New text.
        text: String,
    },
    /// Import a media asset.
    ImportMedia {
        /// The asset.
        media: MediaAsset,
    },
    /// Select an imported asset.
    SelectMedia {
        /// Media id.
        id: String,
    },
    /// Remove an imported asset.
    RemoveMedia {
        /// Media id.
        id: String,
    },
    /// Deselect the media layer.
    ClearMediaSelection,
    /// Switch an effect on or off.
    Toggle {
        /// Effect category.
        category: Category,
        /// Effect id.
        id: String,
    },
    /// Edit an enabled effect.
    Update {
        /// Effect category.
        category: Category,
        /// Effect id.
        id: String,
        /// Fields to change.
        patch: EffectPatch,
    },
    /// Apply a color template.
    SelectTemplate {
        /// Template id.
        id: String,
    },
    /// Append a color stop (default color when omitted).
    AddColor {
        /// Stop color.
        #[serde(default)]
        color: Option<Rgb8>,
    },
    /// Remove a color stop.
    RemoveColor {
        /// Stop index.
        index: usize,
    },
    /// Replace a color stop.
    UpdateColor {
        /// Stop index.
        index: usize,
        /// New color.
        color: Rgb8,
    },
    /// Set the gradient angle.
    SetAngle {
        /// Degrees.
        deg: u32,
    },
    /// Set the gradient intensity.
    SetIntensity {
        /// Percent.
        pct: u32,
    },
    /// Merge style settings.
    SetStyle {
        /// Fields to change.
        style: StylePatch,
    },
}

/// What a replayed step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step changed state.
    Applied,
    /// The step was valid but had no effect (full color list, disabled effect, ...).
    Ignored,
    /// The step input was cut to fit (text limit).
    Truncated,
    /// Result of a toggle.
    Toggled(Toggle),
}

/// Result of [`Script::run`].
#[derive(Clone, Debug)]
pub struct Replay {
    /// Final state.
    pub creative: Creative,
    /// One outcome per step.
    pub outcomes: Vec<StepOutcome>,
}

impl Script {
    /// Parse a script from JSON text.
    pub fn from_json(s: &str) -> AdcraftResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check references that can be checked before replay.
    pub fn validate(&self) -> AdcraftResult<()> {
        format_by_id(&self.format)?;
        if let Some(id) = &self.selected_media {
            if !self.media.iter().any(|m| &m.id == id) {
                return Err(AdcraftError::UnknownMedia(id.clone()));
            }
        }
        Ok(())
    }

    /// Replay every step on a fresh creative.
    ///
    /// The first failing step aborts the replay; its index is attached to the error.
    #[tracing::instrument(skip(self), fields(format = %self.format, steps = self.steps.len()))]
    pub fn run(&self) -> AdcraftResult<Replay> {
        self.validate()?;

        let mut creative = Creative::new(&self.format)?;
        creative.set_channel_overflow(self.channel_overflow);
        for target in [Target::Title, Target::Subtitle, Target::Cta] {
            if let Some(text) = self.text.get(target) {
                creative.set_text(target, text)?;
            }
        }
        for asset in &self.media {
            creative.import_media(asset.clone())?;
        }
        if let Some(id) = &self.selected_media {
            creative.select_media(id)?;
        }

        let mut outcomes = Vec::with_capacity(self.steps.len());
        for (index, action) in self.steps.iter().enumerate() {
            let outcome = apply(&mut creative, action).map_err(|err| {
                AdcraftError::Other(anyhow::Error::new(err).context(format!("step {index}")))
            })?;
            tracing::trace!(index, ?outcome, "step replayed");
            outcomes.push(outcome);
        }

        Ok(Replay { creative, outcomes })
    }
}

fn applied_if(changed: bool) -> StepOutcome {
    if changed {
        StepOutcome::Applied
    } else {
        StepOutcome::Ignored
    }
}

fn apply(creative: &mut Creative, action: &Action) -> AdcraftResult<StepOutcome> {
    let outcome = match action {
        Action::SetFormat { id } => {
            if creative.set_format(id)? {
                StepOutcome::Truncated
            } else {
                StepOutcome::Applied
            }
        }
        Action::SetText { target, text } => {
            if creative.set_text(*target, text.as_str())? {
                StepOutcome::Truncated
            } else {
                StepOutcome::Applied
            }
        }
        Action::ImportMedia { media } => {
            creative.import_media(media.clone())?;
            StepOutcome::Applied
        }
        Action::SelectMedia { id } => {
            creative.select_media(id)?;
            StepOutcome::Applied
        }
        Action::RemoveMedia { id } => {
            creative.remove_media(id)?;
            StepOutcome::Applied
        }
        Action::ClearMediaSelection => {
            creative.clear_media_selection();
            StepOutcome::Applied
        }
        Action::Toggle { category, id } => {
            StepOutcome::Toggled(creative.toggle_effect(*category, id)?)
        }
        Action::Update {
            category,
            id,
            patch,
        } => applied_if(creative.update_effect(*category, id, patch)?),
        Action::SelectTemplate { id } => {
            creative.select_template(id)?;
            StepOutcome::Applied
        }
        Action::AddColor { color } => {
            let color = color.unwrap_or(DEFAULT_ADDED_COLOR);
            applied_if(creative.add_color(color))
        }
        Action::RemoveColor { index } => applied_if(creative.remove_color(*index)),
        Action::UpdateColor { index, color } => {
            creative.update_color(*index, *color)?;
            StepOutcome::Applied
        }
        Action::SetAngle { deg } => {
            creative.set_gradient_angle(*deg);
            StepOutcome::Applied
        }
        Action::SetIntensity { pct } => {
            creative.set_gradient_intensity(*pct);
            StepOutcome::Applied
        }
        Action::SetStyle { style } => {
            creative.apply_style(style);
            StepOutcome::Applied
        }
    };
    Ok(outcome)
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
