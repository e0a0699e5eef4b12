//! Lumen renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over a small closed set of analytic shapes
//! and materials. Paths are evaluated iteratively with a fixed bounce
//! budget; images are rendered one rayon task per row.

mod camera;
mod hittable;
mod material;
mod parallel;
pub mod random;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use hittable::{Geometry, HitRecord, HIT_RANGE, NO_HIT, T_MIN};
pub use material::{schlick, Material};
pub use parallel::{render_parallel, render_parallel_with_progress, render_row, render_rows};
pub use random::{XorShift32, DEFAULT_SEED};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ConfigError,
    ImageBuffer, RenderConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
pub use scene::{Entity, Scene};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
