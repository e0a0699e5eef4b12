//! Double-precision vector algebra for Lumen.
//!
//! Everything is built on `glam::DVec3`. The same type is used as a
//! geometric vector, a point, and an RGB color.

pub use glam::{dvec3, DVec3};

mod color;
mod interval;
mod ray;

pub use color::{attenuation, color_mix, is_unit_color, Color};
pub use interval::Interval;
pub use ray::Ray;

/// A 3-component `f64` vector.
pub type Vec3 = DVec3;

/// A point in 3D space.
pub type Point3 = DVec3;

/// Reflect `v` about the normal `n`: `v - 2(v·n)n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`
/// facing against it, for the index ratio `etai_over_etat`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_index_one_keeps_direction() {
        for dir in [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.3, -1.0, 0.2),
            Vec3::new(-0.8, -0.5, 0.1),
        ] {
            let uv = dir.normalize();
            let out = refract(uv, Vec3::Y, 1.0);
            assert!((out - uv).length() < 1e-12, "{uv:?} bent to {out:?}");
        }
    }
}
