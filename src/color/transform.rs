//! Per-color transforms used by the effect pipeline.
//!
//! All transforms are total: there is no error path, only channel clamping.
//! Channel rounding is half-up everywhere so results are deterministic.

use crate::color::Color;

/// Near-white reference that pastelize/soften blend toward.
const PASTEL_REFERENCE: Color = Color::new(250, 250, 240);

/// Blend amount toward the pastel reference for [`Color::pastelize`].
pub const PASTEL_BLEND: f64 = 0.5;

/// Blend amount toward the pastel reference for [`Color::soften`].
pub const SOFTEN_BLEND: f64 = 0.25;

// Rec. 709 luma coefficients, applied to linearized channels.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

impl Color {
    /// Blend toward another color.
    ///
    /// `amount` is the share of `other` in the result, clamped to [0, 1].
    pub fn blend(self, other: Self, amount: f64) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            w: lerp_channel(self.w, other.w, t),
        }
    }

    /// Lighter, desaturated variant: a [`PASTEL_BLEND`] mix toward near-white.
    pub fn pastelize(self) -> Self {
        self.blend(PASTEL_REFERENCE, PASTEL_BLEND)
    }

    /// Milder desaturating blend than [`Color::pastelize`].
    pub fn soften(self) -> Self {
        self.blend(PASTEL_REFERENCE, SOFTEN_BLEND)
    }

    /// Linear blend toward black: 0.0 is a no-op, 1.0 is pure black.
    pub fn intensify(self, factor: f64) -> Self {
        self.blend(Self::BLACK, factor)
    }

    /// Relative luminance in [0, 1] from linearized sRGB channels.
    ///
    /// The white channel does not participate.
    pub fn luminance(self) -> f64 {
        LUMA_R * srgb_to_linear(self.r)
            + LUMA_G * srgb_to_linear(self.g)
            + LUMA_B * srgb_to_linear(self.b)
    }

    /// Scale linear RGB so relative luminance approaches `target`.
    ///
    /// Hue and chroma are preserved up to channel clamping. Pure black has
    /// no hue to preserve and becomes a neutral gray at the target level.
    pub fn luminize(self, target: f64) -> Self {
        let target = target.clamp(0.0, 1.0);
        let (lr, lg, lb) = (
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        );
        let luminance = LUMA_R * lr + LUMA_G * lg + LUMA_B * lb;
        if luminance <= f64::EPSILON {
            let level = linear_to_srgb(target);
            return Self {
                r: level,
                g: level,
                b: level,
                w: self.w,
            };
        }
        let scale = target / luminance;
        Self {
            r: linear_to_srgb((lr * scale).min(1.0)),
            g: linear_to_srgb((lg * scale).min(1.0)),
            b: linear_to_srgb((lb * scale).min(1.0)),
            w: self.w,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Convert an sRGB byte to a linear channel value.
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear channel value back to an sRGB byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn linear_to_srgb(channel: f64) -> u8 {
    let c = if channel <= 0.003_130_8 {
        channel * 12.92
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    };
    (c * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
