//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - An iterative light-transport loop bounded by a configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Optional gamma correction on output

use crate::{Camera, HitRecord, Material, Scene};
use lumen_math::{color_mix, is_unit_color, Color, Interval, Ray};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard upper bound on the number of bounces per path.
pub const MAX_DEPTH_LIMIT: usize = 16;

/// Bounce limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Errors raised by [`RenderConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Max depth {0} exceeds the limit of {}", MAX_DEPTH_LIMIT)]
    DepthTooLarge(u32),

    #[error("{name} color {value:?} has a channel outside [0, 1]")]
    ColorOutOfRange { name: &'static str, value: Color },
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per path
    pub max_depth: u32,
    /// Global seed; every image row derives its own generator from it
    pub seed: u64,
    /// Color of paths that run out of bounces
    pub absorbed: Color,
    /// Sky color looking straight down
    pub sky_horizon: Color,
    /// Sky color looking straight up
    pub sky_zenith: Color,
    /// Apply gamma-2 correction when quantizing
    pub gamma: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            samples_per_pixel: 100,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: crate::random::DEFAULT_SEED,
            absorbed: Color::ZERO,
            sky_horizon: Color::ONE,
            sky_zenith: Color::new(0.5, 0.7, 1.0),
            gamma: false,
        }
    }
}

impl RenderConfig {
    /// Check the configuration before rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.max_depth as usize > MAX_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge(self.max_depth));
        }
        for (name, value) in [
            ("Absorbed", self.absorbed),
            ("Sky horizon", self.sky_horizon),
            ("Sky zenith", self.sky_zenith),
        ] {
            if !is_unit_color(value) {
                return Err(ConfigError::ColorOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Bounce budget actually used by [`ray_color`].
    #[inline]
    pub fn effective_depth(&self) -> usize {
        (self.max_depth as usize).min(MAX_DEPTH_LIMIT)
    }
}

/// Surfaces visited by one path, in bounce order.
///
/// Fixed capacity, lives on the stack for a single radiance evaluation.
struct PathRecord<'a> {
    bounces: [Option<(HitRecord, &'a Material)>; MAX_DEPTH_LIMIT],
    len: usize,
}

impl<'a> PathRecord<'a> {
    fn new() -> Self {
        Self {
            bounces: [None; MAX_DEPTH_LIMIT],
            len: 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn push(&mut self, rec: HitRecord, material: &'a Material) {
        debug_assert!(self.len < MAX_DEPTH_LIMIT);
        self.bounces[self.len] = Some((rec, material));
        self.len += 1;
    }

    /// Materials from the last bounce back to the first.
    fn materials_rev(&self) -> impl Iterator<Item = &'a Material> + '_ {
        self.bounces[..self.len]
            .iter()
            .rev()
            .filter_map(|bounce| bounce.map(|(_, material)| material))
    }
}

/// Compute the color seen by a ray.
///
/// Follows the path until it escapes to the sky or exhausts the bounce
/// budget, then folds the recorded materials' attenuation over the
/// terminal color, last bounce first.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let max_depth = config.effective_depth();
    let mut path = PathRecord::new();
    let mut ray = *ray;
    let mut escaped = false;

    while path.len() < max_depth {
        match scene.hit(&ray) {
            Some((rec, material)) => {
                ray = material.scatter(&rec, rng);
                path.push(rec, material);
            }
            None => {
                escaped = true;
                break;
            }
        }
    }

    let terminal = if escaped {
        sky_gradient(&ray, config)
    } else {
        config.absorbed
    };

    path.materials_rev()
        .fold(terminal, |color, material| material.attenuate(color, rng))
}

/// Background color of a ray that escaped the scene.
pub fn sky_gradient(ray: &Ray, config: &RenderConfig) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = Interval::UNIT.clamp(0.5 * (unit_direction.y + 1.0));
    color_mix(config.sky_horizon, config.sky_zenith, a)
}

/// Render a single pixel with multi-sampling.
///
/// `y = 0` is the bottom row of the viewport.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.sample_ray(x, y, rng);
        pixel_color += ray_color(&ray, scene, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel.max(1) as f64
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Quantize a `[0, 1]` color to 8-bit RGB as `floor(255.999 * c)`.
pub fn color_to_rgb(color: Color, gamma: bool) -> [u8; 3] {
    let quantize = |c: f64| {
        let c = if gamma { linear_to_gamma(c) } else { c };
        (255.999 * Interval::UNIT.clamp(c)) as u8
    };
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Rendered image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at column `x`, row `row` (counted from the top).
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[self.index(x, row)]
    }

    /// Set the pixel at column `x`, row `row` (counted from the top).
    pub fn set(&mut self, x: u32, row: u32, color: Color) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, row: u32) -> usize {
        row as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes, top row first.
    pub fn to_rgb8(&self, gamma: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color, gamma));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// This is a simple single-threaded renderer with one shared generator.
/// Rows are produced top to bottom.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for row in 0..camera.image_height {
        let y = camera.image_height - 1 - row;
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config, rng);
            image.set(x, row, color);
        }
    }

    image
}
