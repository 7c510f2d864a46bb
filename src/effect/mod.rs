//! Effect pipeline applied to a reconciled palette.
//!
//! The effect set is small and stable, so effects live in a closed enum
//! with an explicit fallback arm rather than behind dynamic dispatch.
//! Processing is applied in a fixed order: effect, then intensity, then
//! overrides.

pub mod overrides;

use crate::color::Color;

const EFFECT_NAME_NONE: &str = "none";
const EFFECT_NAME_PASTELIZE: &str = "pastelize";
const EFFECT_NAME_SOFTEN: &str = "soften";
const EFFECT_NAME_LUMINIZE: &str = "luminize";

/// Relative luminance the `luminize` effect pulls colors toward.
pub const LUMINIZE_TARGET: f64 = 0.5;

/// Known effects that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    #[default]
    None,
    Pastelize,
    Soften,
    Luminize,
}

impl EffectKind {
    /// Look up an effect by configured name.
    ///
    /// Unrecognized names silently fall back to [`EffectKind::None`],
    /// matching lenient configuration handling.
    pub fn from_name(name: &str) -> Self {
        match name {
            EFFECT_NAME_PASTELIZE => Self::Pastelize,
            EFFECT_NAME_SOFTEN => Self::Soften,
            EFFECT_NAME_LUMINIZE => Self::Luminize,
            _ => Self::None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => EFFECT_NAME_NONE,
            Self::Pastelize => EFFECT_NAME_PASTELIZE,
            Self::Soften => EFFECT_NAME_SOFTEN,
            Self::Luminize => EFFECT_NAME_LUMINIZE,
        }
    }

    /// Apply the selected transform to a single color.
    pub fn apply(self, color: Color) -> Color {
        match self {
            Self::None => color,
            Self::Pastelize => color.pastelize(),
            Self::Soften => color.soften(),
            Self::Luminize => color.luminize(LUMINIZE_TARGET),
        }
    }
}

/// Ordered post-processing for a whole reconciled palette.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    /// Effect applied to every color first.
    pub effect: EffectKind,
    /// Blend toward black applied after the effect; 0.0 is a no-op.
    pub intensity: f64,
    /// Explicit `(index, color)` replacements applied last, verbatim.
    pub overrides: Vec<(usize, Color)>,
}

impl Pipeline {
    /// Run the pipeline over a palette in place.
    ///
    /// Overrides bypass effect and intensity; an index outside the palette
    /// is ignored and the palette is never grown to satisfy one. Later
    /// overrides for the same index win.
    pub fn apply(&self, palette: &mut [Color]) {
        for color in palette.iter_mut() {
            *color = self.effect.apply(*color).intensify(self.intensity);
        }
        for &(index, color) in &self.overrides {
            if let Some(slot) = palette.get_mut(index) {
                *slot = color;
            }
        }
    }
}
