//! Simple path tracer example.
//!
//! Builds a small scene in code, renders it on all cores and saves a PNG.
//!
//! Usage: cargo run -p lumen_renderer --example simple_render --release

use lumen_renderer::{
    render_parallel, Camera, Color, Entity, ImageBuffer, Material, RenderConfig, Scene, Sphere,
    Triangle, Vec3, XorShift32,
};
use lumen_core::CameraDesc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Lumen Path Tracer - Simple Example");
    println!("==================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} entities)", start.elapsed(), scene.len());

    let config = RenderConfig {
        width: 400,
        height: 400,
        samples_per_pixel: 50,
        max_depth: 8,
        gamma: true,
        ..RenderConfig::default()
    };
    let camera = Camera::new(&CameraDesc::default(), config.width, config.height);

    let start = std::time::Instant::now();
    let image = render_parallel::<XorShift32>(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    match save_png(&image, config.gamma, filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(e) => eprintln!("Failed to save image: {}", e),
    }
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground
    scene.add(Entity::new(
        Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0),
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));

    scene.add(Entity::new(
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5),
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
    ));
    scene.add(Entity::new(
        Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5),
        Material::dielectric(Color::ONE, 1.5),
    ));
    scene.add(Entity::new(
        Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5),
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.0),
    ));

    // Backdrop mirror
    scene.add(Entity::new(
        Triangle::new(
            Vec3::new(-2.0, -0.5, -3.0),
            Vec3::new(2.0, -0.5, -3.0),
            Vec3::new(0.0, 2.0, -3.0),
        ),
        Material::metal(Color::splat(0.9), 0.05),
    ));

    scene
}

fn save_png(buffer: &ImageBuffer, gamma: bool, filename: &str) -> image::ImageResult<()> {
    image::save_buffer(
        filename,
        &buffer.to_rgb8(gamma),
        buffer.width,
        buffer.height,
        image::ColorType::Rgb8,
    )
}
