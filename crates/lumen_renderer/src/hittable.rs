//! Hit records and the closed set of intersectable geometry.

use crate::{Ray, Sphere, Triangle};
use lumen_math::{Interval, Point3, Vec3};

/// Minimum accepted hit distance.
///
/// Hits closer than this are discarded so a scattered ray does not
/// re-intersect the surface it just left ("shadow acne"). The value is an
/// absolute distance and does not scale with the scene.
pub const T_MIN: f64 = 0.001;

/// `t` value of a record that did not hit anything.
pub const NO_HIT: f64 = -1.0;

/// Range of accepted hit distances.
pub const HIT_RANGE: Interval = Interval::new(T_MIN, f64::INFINITY);

/// Result of one ray/shape intersection test.
///
/// A miss is a record with negative `t`, not an error. The hit point and
/// the front-face flag are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// The ray that was tested
    pub ray: Ray,
    /// Parameter t where the intersection occurs, or [`NO_HIT`]
    pub t: f64,
    /// Outward unit surface normal (not flipped toward the ray)
    pub normal: Vec3,
}

impl HitRecord {
    /// A hit at `t` with the given outward normal.
    #[inline]
    pub fn new(ray: Ray, t: f64, normal: Vec3) -> Self {
        Self { ray, t, normal }
    }

    /// The "no hit" record for `ray`.
    #[inline]
    pub fn miss(ray: Ray) -> Self {
        Self {
            ray,
            t: NO_HIT,
            normal: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t >= 0.0
    }

    /// Point of intersection.
    #[inline]
    pub fn point(&self) -> Point3 {
        self.ray.at(self.t)
    }

    /// Whether the ray arrived from outside the surface.
    #[inline]
    pub fn front_face(&self) -> bool {
        self.normal.dot(self.ray.direction()) < 0.0
    }

    /// Replace `self` with `candidate` if the candidate is a valid hit that
    /// is either the first one seen or strictly nearer.
    ///
    /// Returns true if `self` was replaced. On equal distances the current
    /// record is kept, so the first entity scanned wins ties.
    #[inline]
    pub fn closer(&mut self, candidate: HitRecord) -> bool {
        if !candidate.is_hit() {
            return false;
        }
        if !self.is_hit() || candidate.t < self.t {
            *self = candidate;
            return true;
        }
        false
    }
}

/// Intersectable shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Geometry {
    /// Nearest forward intersection of `ray` with this shape.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> HitRecord {
        match self {
            Geometry::Sphere(sphere) => sphere.intersect(ray),
            Geometry::Triangle(triangle) => triangle.intersect(ray),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Triangle> for Geometry {
    fn from(triangle: Triangle) -> Self {
        Geometry::Triangle(triangle)
    }
}
