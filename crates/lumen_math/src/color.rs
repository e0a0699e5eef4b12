//! RGB color helpers.
//!
//! Colors are `Vec3` values whose components stay in `[0, 1]`. Mixing and
//! attenuating colors that satisfy this keeps it, so image writers can
//! quantize without clamping again.

use crate::{Interval, Vec3};

/// Color type alias (RGB values 0-1)
pub type Color = Vec3;

/// True if every channel lies in `[0, 1]`.
pub fn is_unit_color(c: Color) -> bool {
    let unit = Interval::UNIT;
    unit.contains(c.x) && unit.contains(c.y) && unit.contains(c.z)
}

/// Linear blend `a * (1 - t) + b * t`.
#[inline]
pub fn color_mix(a: Color, b: Color, t: f64) -> Color {
    debug_assert!(Interval::UNIT.contains(t), "mix factor {t} outside [0, 1]");
    a * (1.0 - t) + b * t
}

/// Componentwise product of two colors.
#[inline]
pub fn attenuation(a: Color, b: Color) -> Color {
    a * b
}
