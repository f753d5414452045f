use serde::{Deserialize, Serialize};

use crate::catalog::templates::Template;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{AdcraftError, AdcraftResult};

/// Fewest gradient stops allowed.
pub const MIN_COLORS: usize = 2;
/// Most gradient stops allowed.
pub const MAX_COLORS: usize = 5;
/// Largest gradient angle.
pub const MAX_ANGLE_DEG: u16 = 360;
/// Largest gradient intensity. Values above 100 brighten the stops.
pub const MAX_INTENSITY_PCT: u16 = 150;
/// Stop appended by [`GradientState::add_default_color`].
pub const DEFAULT_ADDED_COLOR: Rgb8 = Rgb8::new(0x8B, 0x5C, 0xF6);

/// What to do with a channel that intensity scaling pushes past 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOverflow {
    /// Cap at 255, keeping every `rgb()` stop a valid 8-bit color.
    #[default]
    Clamp,
    /// Emit the raw scaled value and leave it to the CSS engine to clamp.
    PassThrough,
}

/// Build a CSS `linear-gradient` from `colors`, each channel scaled by `intensity_pct / 100`.
pub fn build_gradient(
    colors: &[Rgb8],
    angle_deg: u16,
    intensity_pct: u16,
    overflow: ChannelOverflow,
) -> String {
    let factor = f64::from(intensity_pct) / 100.0;
    let stops = colors
        .iter()
        .map(|c| {
            let [r, g, b] = c.channels().map(|ch| scale_channel(ch, factor, overflow));
            format!("rgb({r},{g},{b})")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({angle_deg}deg, {stops})")
}

fn scale_channel(ch: u8, factor: f64, overflow: ChannelOverflow) -> u32 {
    let v = (f64::from(ch) * factor).round() as u32;
    match overflow {
        ChannelOverflow::Clamp => v.min(255),
        ChannelOverflow::PassThrough => v,
    }
}

/// Gradient backdrop settings: angle, intensity and 2 to 5 ordered color stops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradientState {
    angle_deg: u16,
    intensity_pct: u16,
    colors: Vec<Rgb8>,
}

impl Default for GradientState {
    fn default() -> Self {
        Self {
            angle_deg: 135,
            intensity_pct: 100,
            colors: vec![Rgb8::new(0x00, 0x66, 0xFF), DEFAULT_ADDED_COLOR],
        }
    }
}

impl GradientState {
    /// Validated constructor. Angle and intensity are clamped; a bad stop count is an error.
    pub fn new(colors: Vec<Rgb8>, angle_deg: u32, intensity_pct: u32) -> AdcraftResult<Self> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&colors.len()) {
            return Err(AdcraftError::validation(format!(
                "gradient needs {MIN_COLORS}..={MAX_COLORS} colors, got {}",
                colors.len()
            )));
        }
        let mut state = Self {
            colors,
            ..Self::default()
        };
        state.set_angle(angle_deg);
        state.set_intensity(intensity_pct);
        Ok(state)
    }

    /// Angle in degrees.
    pub fn angle_deg(&self) -> u16 {
        self.angle_deg
    }

    /// Intensity in percent.
    pub fn intensity_pct(&self) -> u16 {
        self.intensity_pct
    }

    /// Color stops in order.
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Set the angle, clamped to `0..=360`. Returns the stored value.
    pub fn set_angle(&mut self, deg: u32) -> u16 {
        self.angle_deg = deg.min(u32::from(MAX_ANGLE_DEG)) as u16;
        self.angle_deg
    }

    /// Set the intensity, clamped to `0..=150`. Returns the stored value.
    pub fn set_intensity(&mut self, pct: u32) -> u16 {
        self.intensity_pct = pct.min(u32::from(MAX_INTENSITY_PCT)) as u16;
        self.intensity_pct
    }

    /// Append a stop unless the list is full. Returns whether it was added.
    pub fn add_color(&mut self, color: Rgb8) -> bool {
        if self.colors.len() >= MAX_COLORS {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Append [`DEFAULT_ADDED_COLOR`] unless the list is full.
    pub fn add_default_color(&mut self) -> bool {
        self.add_color(DEFAULT_ADDED_COLOR)
    }

    /// Remove the stop at `index` unless only two remain or the index is out of range.
    pub fn remove_color(&mut self, index: usize) -> bool {
        if self.colors.len() <= MIN_COLORS || index >= self.colors.len() {
            return false;
        }
        self.colors.remove(index);
        true
    }

    /// Replace the stop at `index`.
    pub fn update_color(&mut self, index: usize, color: Rgb8) -> AdcraftResult<()> {
        let len = self.colors.len();
        let slot = self.colors.get_mut(index).ok_or_else(|| {
            AdcraftError::validation(format!("color index {index} out of range (len {len})"))
        })?;
        *slot = color;
        Ok(())
    }

    /// Replace all stops with the template's. Angle and intensity stay as they are.
    pub fn apply_template(&mut self, template: &Template) {
        self.colors = template.colors.to_vec();
    }

    /// CSS gradient for the current state.
    pub fn css(&self, overflow: ChannelOverflow) -> String {
        build_gradient(&self.colors, self.angle_deg, self.intensity_pct, overflow)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/gradient.rs"]
mod tests;
