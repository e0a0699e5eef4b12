//! Sphere primitive for ray tracing.

use crate::{hittable::HIT_RANGE, HitRecord, Ray};
use lumen_math::Point3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Point3, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }

    /// Solve `|O + tD - C|² = r²` for the nearest root at or beyond `T_MIN`.
    ///
    /// If the near root is too close the far root is tried, so a ray
    /// starting inside the sphere (a path refracted into glass) hits the far
    /// wall. Taking only the near root would report a miss there and lose
    /// the refraction out of the sphere.
    pub fn intersect(&self, ray: &Ray) -> HitRecord {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return HitRecord::miss(*ray);
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !HIT_RANGE.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !HIT_RANGE.contains(root) {
                return HitRecord::miss(*ray);
            }
        }

        let outward_normal = (ray.at(root) - self.center).normalize();
        HitRecord::new(*ray, root, outward_normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    #[test]
    fn test_sphere_hit_matches_analytic_root() {
        let radius = 0.75;
        let sphere = Sphere::new(Vec3::ZERO, radius);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.intersect(&ray);

        assert!(rec.is_hit());
        assert!((rec.t - (5.0 - radius)).abs() < 1e-9);
        let expected_normal = (rec.point() - Vec3::ZERO).normalize();
        assert!((rec.normal - expected_normal).length() < 1e-12);
        assert!((rec.normal - Vec3::Z).length() < 1e-12);
        assert!(rec.front_face());
    }

    #[test]
    fn test_sphere_hit_off_axis() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.3, 0.2, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.intersect(&ray);

        let expected_t = 5.0 - (1.0_f64 - 0.13).sqrt();
        assert!((rec.t - expected_t).abs() < 1e-9);
        assert!((rec.normal.length() - 1.0).abs() < 1e-12);
        assert!((rec.normal - rec.point()).length() < 1e-12);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -4.0));
        let rec = sphere.intersect(&ray);
        assert!((rec.t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(!sphere.intersect(&ray).is_hit());

        // Sphere entirely behind the origin
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let rec = sphere.intersect(&ray);
        assert!(!rec.is_hit());
        assert_eq!(rec.t, crate::hittable::NO_HIT);
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let rec = sphere.intersect(&ray);

        assert!((rec.t - 2.0).abs() < 1e-12);
        assert_eq!(rec.normal, Vec3::X);
        assert!(!rec.front_face());
    }

    #[test]
    fn test_surface_origin_ignores_self_hit() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        // Leaving the surface outward: only the root at t = 0 exists
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.3, 1.0, 0.0));
        assert!(!sphere.intersect(&ray).is_hit());
    }

    #[test]
    fn test_intersection_is_idempotent() {
        let sphere = Sphere::new(Vec3::new(0.1, -0.2, -3.0), 1.3);
        let ray = Ray::new(Vec3::new(0.05, 0.1, 0.0), Vec3::new(0.02, -0.1, -1.0));
        let first = sphere.intersect(&ray);
        for _ in 0..10 {
            let again = sphere.intersect(&ray);
            assert_eq!(first.t.to_bits(), again.t.to_bits());
            assert_eq!(first, again);
        }
    }
}
