//! Reduces every active effect touching a target into one [`TargetPresentation`].
//!
//! Composition is a pure function of the [`EffectStore`]; callers may cache the result but
//! nothing here depends on a previous call.
//!
//! Timing: when several animations hit the same target, the presentation's duration and
//! delay come from the *first* contributing effect in category order
//! (entrance, text, background) and catalog order within a category. Later effects still
//! contribute their token.

use std::collections::BTreeMap;

use crate::catalog::effects::Look;
use crate::compose::presentation::TargetPresentation;
use crate::effects::store::EffectStore;
use crate::foundation::core::{Category, Target, css_num};

const ANIMATION_ORDER: [Category; 3] = [
    Category::EntranceAnimation,
    Category::TextAnimation,
    Category::BackgroundAnimation,
];

/// Stateless target compositor.
pub struct Compositor;

impl Compositor {
    /// Compose the presentation of a single target.
    #[tracing::instrument(skip(store))]
    pub fn compose(store: &EffectStore, target: Target) -> TargetPresentation {
        let mut out = TargetPresentation::default();
        let mut chain = Vec::<String>::new();

        for (def, config) in store.active(Category::VisualFilter) {
            if !config.applies_to(target) {
                continue;
            }
            let i = config.intensity_factor();
            match def.look {
                Look::Filter {
                    function,
                    base,
                    scale,
                    unit,
                } => chain.push(format!("{function}({}{unit})", css_num(base + i * scale))),
                Look::DropShadow {
                    max_radius_px,
                    color,
                } => chain.push(format!(
                    "drop-shadow(0 0 {}px {color})",
                    css_num(i * max_radius_px)
                )),
                Look::Opacity => out.extra_style.opacity = Some(i),
                Look::TextShadow {
                    max_radius_px,
                    color,
                } => {
                    out.extra_style.text_shadow =
                        Some(format!("0 0 {}px {color}", css_num(i * max_radius_px)));
                }
                Look::Animation => {}
            }
        }

        if !chain.is_empty() {
            out.filter = Some(chain.join(" "));
        }

        for category in ANIMATION_ORDER {
            if !category.animates(target) {
                continue;
            }
            let Some(prefix) = category.token_prefix() else {
                continue;
            };
            for (def, config) in store.active(category) {
                if !config.applies_to(target) {
                    continue;
                }
                out.animation_tokens.push(format!("{prefix}{}", def.id));
                if out.duration_ms.is_none() {
                    out.duration_ms = Some(config.duration_ms);
                    out.delay_ms = Some(config.delay_ms);
                }
            }
        }

        tracing::trace!(
            filters = chain.len(),
            tokens = out.animation_tokens.len(),
            "composed"
        );
        out
    }

    /// Compose all five targets.
    pub fn compose_all(store: &EffectStore) -> BTreeMap<Target, TargetPresentation> {
        Target::ALL
            .into_iter()
            .map(|t| (t, Self::compose(store, t)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
