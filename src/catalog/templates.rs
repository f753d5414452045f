use serde::Serialize;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{AdcraftError, AdcraftResult};

/// Named color-theme preset for the gradient backdrop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Stable id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Ordered gradient stops (2 or 3).
    pub colors: &'static [Rgb8],
}

const fn rgb(v: u32) -> Rgb8 {
    Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn template(id: &'static str, name: &'static str, colors: &'static [Rgb8]) -> Template {
    Template { id, name, colors }
}

static TEMPLATES: [Template; 12] = [
    template("hackboot-primary", "Hackboot Primary", &[rgb(0x0066FF), rgb(0x8B5CF6)]),
    template(
        "hackboot-signature",
        "Signature",
        &[rgb(0xA855F7), rgb(0xEC4899), rgb(0x6366F1)],
    ),
    template("dark", "Dark Mode", &[rgb(0x000000), rgb(0x0A0A0A), rgb(0x1F1F1F)]),
    template("performance", "Performance", &[rgb(0x10B981), rgb(0x06B6D4)]),
    template("premium", "Premium", &[rgb(0xFDE047), rgb(0xFB923C)]),
    template("alert", "Alert", &[rgb(0xF97316), rgb(0xEF4444)]),
    template("professional", "Professional", &[rgb(0x6366F1), rgb(0x3B82F6)]),
    template("neon", "Neon", &[rgb(0x22D3EE), rgb(0xA78BFA), rgb(0xEC4899)]),
    template("sunset", "Sunset", &[rgb(0xF59E0B), rgb(0xEF4444), rgb(0xEC4899)]),
    template("ocean", "Ocean", &[rgb(0x0EA5E9), rgb(0x06B6D4), rgb(0x14B8A6)]),
    template("forest", "Forest", &[rgb(0x059669), rgb(0x10B981), rgb(0x34D399)]),
    template(
        "purple-dream",
        "Purple Dream",
        &[rgb(0x7C3AED), rgb(0x8B5CF6), rgb(0xA78BFA)],
    ),
];

/// Id of the template a fresh session starts from.
pub const DEFAULT_TEMPLATE_ID: &str = "hackboot-primary";

/// All templates in display order.
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by id.
pub fn template_by_id(id: &str) -> AdcraftResult<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| AdcraftError::UnknownTemplate(id.to_owned()))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/templates.rs"]
mod tests;
