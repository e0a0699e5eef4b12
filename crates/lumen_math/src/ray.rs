use crate::{Point3, Vec3};

/// A ray in 3D space with an origin and a non-zero direction.
///
/// The direction is not required to be normalized, only to have positive
/// length. A zero-length direction is a caller bug, so [`Ray::new`] panics
/// on it rather than normalizing it away.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// # Panics
    ///
    /// Panics if `direction` has zero (or non-finite) length.
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        match Self::try_new(origin, direction) {
            Some(ray) => ray,
            None => panic!("ray direction must have positive length, got {direction:?}"),
        }
    }

    /// Create a new ray, or `None` if `direction` is degenerate.
    #[inline]
    pub fn try_new(origin: Point3, direction: Vec3) -> Option<Self> {
        let len_sq = direction.length_squared();
        if len_sq > 0.0 && len_sq.is_finite() {
            Some(Self { origin, direction })
        } else {
            None
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
