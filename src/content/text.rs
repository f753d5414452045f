use serde::{Deserialize, Serialize};

use crate::foundation::core::Target;
use crate::foundation::error::{AdcraftError, AdcraftResult};

/// Maximum character count per text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    /// Title limit.
    pub title: usize,
    /// Subtitle limit.
    pub subtitle: usize,
    /// Call-to-action limit.
    pub cta: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            title: 60,
            subtitle: 150,
            cta: 30,
        }
    }
}

impl TextLimits {
    /// Limit for a textual target; `None` for media and background.
    pub fn for_target(&self, target: Target) -> Option<usize> {
        match target {
            Target::Title => Some(self.title),
            Target::Subtitle => Some(self.subtitle),
            Target::Cta => Some(self.cta),
            Target::Media | Target::Background => None,
        }
    }
}

/// Text of the three textual targets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Secondary line.
    #[serde(default)]
    pub subtitle: String,
    /// Button label.
    #[serde(default)]
    pub cta: String,
}

impl TextContent {
    /// Text of `target`, or `None` when `target` is not textual.
    pub fn get(&self, target: Target) -> Option<&str> {
        match target {
            Target::Title => Some(&self.title),
            Target::Subtitle => Some(&self.subtitle),
            Target::Cta => Some(&self.cta),
            Target::Media | Target::Background => None,
        }
    }

    /// Whether `target` carries visible text. Whitespace-only text does not count.
    pub fn has_text(&self, target: Target) -> bool {
        self.get(target).is_some_and(|s| !s.trim().is_empty())
    }

    /// Replace the text of `target`, truncating to its limit.
    ///
    /// Returns `true` when the input had to be truncated.
    pub fn set(
        &mut self,
        target: Target,
        text: impl Into<String>,
        limits: &TextLimits,
    ) -> AdcraftResult<bool> {
        let (field, limit) = match target {
            Target::Title => (&mut self.title, limits.title),
            Target::Subtitle => (&mut self.subtitle, limits.subtitle),
            Target::Cta => (&mut self.cta, limits.cta),
            Target::Media | Target::Background => {
                return Err(AdcraftError::validation(format!(
                    "target '{target}' does not hold text"
                )));
            }
        };
        *field = text.into();
        let truncated = truncate_chars(field, limit);
        Ok(truncated)
    }

    /// Truncate every field to `limits`. Returns `true` when anything changed.
    pub fn enforce(&mut self, limits: &TextLimits) -> bool {
        let a = truncate_chars(&mut self.title, limits.title);
        let b = truncate_chars(&mut self.subtitle, limits.subtitle);
        let c = truncate_chars(&mut self.cta, limits.cta);
        a || b || c
    }

    /// Whether all three fields are empty.
    pub fn is_blank(&self) -> bool {
        [Target::Title, Target::Subtitle, Target::Cta]
            .into_iter()
            .all(|t| !self.has_text(t))
    }
}

fn truncate_chars(s: &mut String, max_chars: usize) -> bool {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            s.truncate(byte_idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/text.rs"]
mod tests;
