//! Row-parallel rendering with rayon.
//!
//! Every image row is an independent task with its own generator seeded
//! from the global seed and the row index, so the output only depends on
//! the seed, never on how rayon schedules rows onto threads.

use std::time::Instant;

use lumen_math::Color;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::random::row_seed;
use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::{Camera, Scene};

/// Render one image row (counted from the top) into `pixels`.
pub fn render_row<R: RngCore + SeedableRng>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    row: usize,
    pixels: &mut [Color],
) {
    let mut rng = R::seed_from_u64(row_seed(config.seed, row));
    let y = camera.image_height - 1 - row as u32;

    for (x, pixel) in pixels.iter_mut().enumerate() {
        *pixel = render_pixel(camera, scene, x as u32, y, config, &mut rng);
    }
}

/// Render the scene with one rayon task per image row.
pub fn render_parallel<R: RngCore + SeedableRng>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> ImageBuffer {
    render_parallel_with_progress::<R, _>(camera, scene, config, |_| {})
}

/// [`render_parallel`], calling `on_row` with the index of each finished row.
///
/// Rows finish in scheduling order, not image order.
pub fn render_parallel_with_progress<R, F>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    on_row: F,
) -> ImageBuffer
where
    R: RngCore + SeedableRng,
    F: Fn(usize) + Sync,
{
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    if image.pixels.is_empty() {
        return image;
    }

    log::info!(
        "Rendering {}x{} with {} samples, max depth {} on {} threads",
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        config.effective_depth(),
        rayon::current_num_threads()
    );

    let start = Instant::now();

    image
        .pixels
        .par_chunks_mut(camera.image_width as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            render_row::<R>(camera, scene, config, row, pixels);
            on_row(row);
        });

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

/// Single-threaded version of [`render_parallel`], producing the same image.
pub fn render_rows<R: RngCore + SeedableRng>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    if image.pixels.is_empty() {
        return image;
    }

    for (row, pixels) in image
        .pixels
        .chunks_mut(camera.image_width as usize)
        .enumerate()
    {
        render_row::<R>(camera, scene, config, row, pixels);
    }
    image
}
