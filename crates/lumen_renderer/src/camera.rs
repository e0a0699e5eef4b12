//! Viewport camera for ray generation.

use crate::random::sample_square;
use crate::Ray;
use lumen_core::CameraDesc;
use lumen_math::{Point3, Vec3};
use rand::RngCore;

/// Fixed pinhole camera looking down -Z through a rectangular viewport.
///
/// Pixel coordinates have `y = 0` at the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    /// Camera for a `width` x `height` image from scene camera parameters.
    pub fn new(desc: &CameraDesc, width: u32, height: u32) -> Self {
        Self {
            image_width: width,
            image_height: height,
            origin: desc.origin,
            horizontal: desc.horizontal(),
            vertical: desc.vertical(),
            lower_left_corner: desc.lower_left_corner(),
        }
    }

    /// Ray through pixel `(x, y)` offset by the sub-pixel jitter `(jx, jy)`.
    pub fn get_ray(&self, x: u32, y: u32, jitter: (f64, f64)) -> Ray {
        // Single-pixel images would divide by zero
        let w = (self.image_width.max(2) - 1) as f64;
        let h = (self.image_height.max(2) - 1) as f64;

        let u = (x as f64 + jitter.0) / w;
        let v = (y as f64 + jitter.1) / h;

        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(self.origin, direction)
    }

    /// Jittered ray through pixel `(x, y)`.
    #[inline]
    pub fn sample_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        self.get_ray(x, y, sample_square(rng))
    }
}
