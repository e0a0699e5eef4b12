//! Materials: how light scatters off and is attenuated by a surface.
//!
//! The set of materials is closed. Each variant answers the same two
//! questions: where does the path go next ([`Material::scatter`]) and how
//! does the surface tint light on its way back to the eye
//! ([`Material::attenuate`]).

use crate::random::{gen_f64, random_unit_vector};
use crate::{HitRecord, Ray};
use lumen_core::MaterialDesc;
use lumen_math::{attenuation, reflect, refract, Color, Vec3};
use rand::RngCore;

/// Scatter directions shorter than this fall back to the surface normal.
const DEGENERATE_SCATTER: f64 = 0.001;

/// Surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Specular reflector; `fuzz` (>= 0) blurs the reflection, 0 is a mirror.
    Metal { albedo: Color, fuzz: f64 },
    /// Ideal diffuse surface.
    Lambertian { albedo: Color },
    /// Refractive surface such as glass; `ref_idx` is the index of refraction.
    Dielectric { albedo: Color, ref_idx: f64 },
}

impl Material {
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        debug_assert!(fuzz >= 0.0, "metal fuzz must be non-negative");
        Material::Metal { albedo, fuzz }
    }

    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    pub fn dielectric(albedo: Color, ref_idx: f64) -> Self {
        debug_assert!(ref_idx > 0.0, "refractive index must be positive");
        Material::Dielectric { albedo, ref_idx }
    }

    pub fn albedo(&self) -> Color {
        match self {
            Material::Metal { albedo, .. }
            | Material::Lambertian { albedo }
            | Material::Dielectric { albedo, .. } => *albedo,
        }
    }

    /// Produce the next ray of the path from the hit `rec`.
    pub fn scatter(&self, rec: &HitRecord, rng: &mut dyn RngCore) -> Ray {
        let p = rec.point();
        match *self {
            Material::Metal { fuzz, .. } => {
                let reflected = reflect(rec.ray.direction().normalize(), rec.normal);
                let fuzzed = reflected + fuzz * random_unit_vector(rng);
                if fuzzed.length() < DEGENERATE_SCATTER {
                    Ray::new(p, reflected)
                } else {
                    Ray::new(p, fuzzed)
                }
            }
            Material::Lambertian { .. } => {
                let mut target = rec.normal + random_unit_vector(rng);

                // Catch degenerate scatter direction
                if target.length() < DEGENERATE_SCATTER {
                    target = rec.normal;
                }
                Ray::new(p, target)
            }
            Material::Dielectric { ref_idx, .. } => {
                let front_face = rec.front_face();
                let normal = if front_face { rec.normal } else { -rec.normal };
                let refraction_ratio = if front_face { 1.0 / ref_idx } else { ref_idx };

                let unit_direction = rec.ray.direction().normalize();
                let cos_theta = (-unit_direction).dot(normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Total internal reflection
                let cannot_refract = refraction_ratio * sin_theta > 1.0;

                let direction: Vec3 = if cannot_refract
                    || gen_f64(rng) < schlick(cos_theta, refraction_ratio)
                {
                    reflect(unit_direction, normal)
                } else {
                    refract(unit_direction, normal, refraction_ratio)
                };

                Ray::new(p, direction)
            }
        }
    }

    /// Tint `color`, the light arriving from later in the path.
    ///
    /// Every material attenuates by its albedo; none emit.
    #[inline]
    pub fn attenuate(&self, color: Color, _rng: &mut dyn RngCore) -> Color {
        attenuation(color, self.albedo())
    }
}

impl From<&MaterialDesc> for Material {
    fn from(desc: &MaterialDesc) -> Self {
        match *desc {
            MaterialDesc::Lambertian { albedo } => Material::lambertian(albedo),
            MaterialDesc::Metal { albedo, fuzz } => Material::metal(albedo, fuzz),
            MaterialDesc::Dielectric { albedo, ref_idx } => Material::dielectric(albedo, ref_idx),
        }
    }
}

/// Schlick's approximation for reflectance.
#[inline]
pub fn schlick(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
