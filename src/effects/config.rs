use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::effects::EffectDef;
use crate::foundation::core::{Category, Target};

/// Intensity a freshly enabled effect starts at.
pub const DEFAULT_INTENSITY: u8 = 50;
/// Upper bound of an effect's intensity knob.
pub const MAX_INTENSITY: u8 = 100;
/// Upper bound of an effect's start delay.
pub const MAX_DELAY_MS: u32 = 2000;

/// Parameters of one enabled effect.
///
/// A config only exists while its effect is enabled; disabling removes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EffectConfig {
    /// Catalog id.
    pub id: &'static str,
    /// Always `true` while the config exists.
    pub enabled: bool,
    /// Per-target switch. Keys are exactly the definition's available targets.
    pub targets: BTreeMap<Target, bool>,
    /// Animation duration.
    pub duration_ms: u32,
    /// Animation start delay.
    pub delay_ms: u32,
    /// Strength knob, `0..=100`.
    pub intensity: u8,
}

impl EffectConfig {
    /// Defaults for a newly enabled effect: every available target on, catalog duration,
    /// no delay, half intensity.
    pub(crate) fn from_def(def: &'static EffectDef) -> Self {
        Self {
            id: def.id,
            enabled: true,
            targets: def.available_targets.iter().map(|&t| (t, true)).collect(),
            duration_ms: def.default_duration_ms,
            delay_ms: 0,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Whether the effect is switched on for `target`.
    pub fn applies_to(&self, target: Target) -> bool {
        self.enabled && self.targets.get(&target).copied().unwrap_or(false)
    }

    /// Intensity as a `0.0..=1.0` factor.
    pub fn intensity_factor(&self) -> f64 {
        f64::from(self.intensity) / 100.0
    }

    /// Merge `patch`, normalizing every field at the edit boundary.
    ///
    /// Target flags outside the definition are dropped; numbers are clamped to their ranges.
    pub(crate) fn apply(&mut self, def: &EffectDef, category: Category, patch: &EffectPatch) {
        for (&target, &on) in &patch.targets {
            if def.is_available_on(target) {
                self.targets.insert(target, on);
            } else {
                tracing::trace!(
                    effect = def.id,
                    target_name = target.as_str(),
                    "ignoring unavailable target"
                );
            }
        }

        if let Some(duration) = patch.duration_ms {
            self.duration_ms = match category.duration_bounds_ms() {
                Some((lo, hi)) => duration.clamp(lo, hi),
                None => duration,
            };
        }
        if let Some(delay) = patch.delay_ms {
            self.delay_ms = delay.min(MAX_DELAY_MS);
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity.min(u32::from(MAX_INTENSITY)) as u8;
        }
    }
}

/// Partial update for an [`EffectConfig`]. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectPatch {
    /// Target flags to set; unlisted targets keep their value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<Target, bool>,
    /// New duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    /// New delay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
    /// New intensity; values above 100 are clamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u32>,
}

impl EffectPatch {
    /// Set one target flag.
    pub fn target(mut self, target: Target, on: bool) -> Self {
        self.targets.insert(target, on);
        self
    }

    /// Set the duration.
    pub fn duration_ms(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Set the delay.
    pub fn delay_ms(mut self, ms: u32) -> Self {
        self.delay_ms = Some(ms);
        self
    }

    /// Set the intensity.
    pub fn intensity(mut self, intensity: u32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
            && self.duration_ms.is_none()
            && self.delay_ms.is_none()
            && self.intensity.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/config.rs"]
mod tests;
