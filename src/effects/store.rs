use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::effects::{self, EffectDef};
use crate::effects::config::{EffectConfig, EffectPatch};
use crate::effects::guard::Applicability;
use crate::foundation::core::Category;
use crate::foundation::error::AdcraftResult;

/// Outcome of [`EffectStore::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    /// A new config was created with default parameters.
    Enabled,
    /// The existing config was removed.
    Disabled,
    /// None of the effect's targets has content; nothing changed.
    Rejected,
}

/// Active effect configurations, keyed by `(category, effect id)`.
///
/// Presence of a key is the enabled state: there is no soft-disabled config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectStore {
    configs: BTreeMap<(Category, &'static str), EffectConfig>,
}

impl EffectStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch an effect on or off.
    ///
    /// Switching on asks `guard` first; a rejection leaves the store untouched. Unknown ids
    /// are an error and also leave the store untouched.
    pub fn toggle(
        &mut self,
        category: Category,
        id: &str,
        guard: &Applicability,
    ) -> AdcraftResult<Toggle> {
        let def = effects::require(category, id)?;
        let key = (category, def.id);

        if self.configs.remove(&key).is_some() {
            tracing::debug!(%category, effect = def.id, "effect disabled");
            return Ok(Toggle::Disabled);
        }

        if !guard.approves(def) {
            tracing::debug!(%category, effect = def.id, "toggle rejected: no applicable target");
            return Ok(Toggle::Rejected);
        }

        self.configs.insert(key, EffectConfig::from_def(def));
        tracing::debug!(%category, effect = def.id, "effect enabled");
        Ok(Toggle::Enabled)
    }

    /// Merge `patch` into an enabled effect.
    ///
    /// Returns `false` without touching anything when the effect is disabled, so late edits
    /// for a removed effect can never bring its config back.
    pub fn update(
        &mut self,
        category: Category,
        id: &str,
        patch: &EffectPatch,
    ) -> AdcraftResult<bool> {
        let def = effects::require(category, id)?;
        let Some(config) = self.configs.get_mut(&(category, def.id)) else {
            tracing::trace!(%category, effect = def.id, "update ignored: effect is disabled");
            return Ok(false);
        };
        config.apply(def, category, patch);
        Ok(true)
    }

    /// Config of an enabled effect.
    pub fn get(&self, category: Category, id: &str) -> Option<&EffectConfig> {
        let def = effects::lookup(category, id)?;
        self.configs.get(&(category, def.id))
    }

    /// Whether the effect is enabled.
    pub fn is_enabled(&self, category: Category, id: &str) -> bool {
        self.get(category, id).is_some()
    }

    /// Enabled effects of `category` in catalog order.
    pub fn active(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&'static EffectDef, &EffectConfig)> + '_ {
        effects::definitions(category)
            .iter()
            .filter_map(move |def| self.configs.get(&(category, def.id)).map(|c| (def, c)))
    }

    /// Number of enabled effects in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.configs.keys().filter(|(c, _)| *c == category).count()
    }

    /// Number of enabled effects across all categories.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether no effect is enabled.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Disable everything.
    pub fn clear(&mut self) {
        self.configs.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/store.rs"]
mod tests;
