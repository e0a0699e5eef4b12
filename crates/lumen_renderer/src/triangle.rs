//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{hittable::HIT_RANGE, HitRecord, Ray};
use lumen_math::{Point3, Vec3};

/// Determinant magnitude below which the ray counts as parallel to the plane.
pub const DET_EPSILON: f64 = 0.001;

/// A triangle primitive.
///
/// The outward normal is `normalize((b - a) × (c - a))` for every triangle:
/// counter-clockwise winding, seen from the side the normal points to, is
/// the front. It is never flipped toward the viewer, and both sides can be
/// hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex; the edges start here
    a: Point3,
    /// Pre-computed edges and face normal (unit length)
    edge1: Vec3,
    edge2: Vec3,
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        let edge1 = b - a;
        let edge2 = c - a;
        let normal = edge1.cross(edge2).normalize_or_zero();

        Self {
            a,
            edge1,
            edge2,
            normal,
        }
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Barycentric `u = 0, v = 0` (the vertex `a`) and the other edges are
    /// inside; only strictly negative or over-one coordinates miss.
    pub fn intersect(&self, ray: &Ray) -> HitRecord {
        let pvec = ray.direction().cross(self.edge2);
        let det = self.edge1.dot(pvec);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if det.abs() < DET_EPSILON {
            return HitRecord::miss(*ray);
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - self.a;
        let u = inv_det * tvec.dot(pvec);
        if !(0.0..=1.0).contains(&u) {
            return HitRecord::miss(*ray);
        }

        let qvec = tvec.cross(self.edge1);
        let v = inv_det * ray.direction().dot(qvec);
        if v < 0.0 || u + v > 1.0 {
            return HitRecord::miss(*ray);
        }

        let t = inv_det * self.edge2.dot(qvec);
        if !HIT_RANGE.contains(t) {
            return HitRecord::miss(*ray);
        }

        HitRecord::new(*ray, t, self.normal)
    }
}
