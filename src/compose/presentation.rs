use serde::Serialize;

use crate::foundation::core::css_num;

/// Discrete style fields that cannot be expressed as chainable filter functions.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExtraStyle {
    /// Element opacity, `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// CSS `text-shadow` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
}

impl ExtraStyle {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.text_shadow.is_none()
    }
}

/// Everything a renderer needs to paint one target. Derived on demand, never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TargetPresentation {
    /// Space-separated CSS filter chain, `None` when no filter applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Opacity and text shadow.
    pub extra_style: ExtraStyle,
    /// Animation class tokens, entrance first, then text, then background.
    pub animation_tokens: Vec<String>,
    /// Duration of the first contributing animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    /// Delay of the first contributing animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
}

impl TargetPresentation {
    /// Whether no effect touches the target.
    pub fn is_empty(&self) -> bool {
        self.filter.is_none()
            && self.extra_style.is_empty()
            && self.animation_tokens.is_empty()
            && self.duration_ms.is_none()
            && self.delay_ms.is_none()
    }

    /// Animation tokens as a single class attribute value.
    pub fn class_list(&self) -> String {
        self.animation_tokens.join(" ")
    }

    /// Inline style declarations (`property`, `value`) in a stable order.
    pub fn style_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(opacity) = self.extra_style.opacity {
            out.push(("opacity", css_num(opacity)));
        }
        if let Some(shadow) = &self.extra_style.text_shadow {
            out.push(("text-shadow", shadow.clone()));
        }
        if let Some(filter) = &self.filter {
            out.push(("filter", filter.clone()));
        }
        if let Some(ms) = self.duration_ms {
            out.push(("animation-duration", format!("{ms}ms")));
        }
        if let Some(ms) = self.delay_ms {
            out.push(("animation-delay", format!("{ms}ms")));
        }
        out
    }

    /// Inline style string, e.g. `filter: blur(4px); animation-duration: 800ms`.
    pub fn style_attr(&self) -> String {
        self.style_declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
