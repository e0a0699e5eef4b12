//! Load a scene file and print what it contains.
//!
//! Usage: cargo run -p lumen_core --example load_scene -- path/to/scene.txt

use lumen_core::{load_scene, MaterialDesc, ShapeDesc};

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scenes/spheres.txt".to_string());

    let scene = match load_scene(&path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("Scene: {}", path);
    println!("  camera origin: {:?}", scene.camera.origin);
    println!(
        "  viewport: {} x {} at focal length {}",
        scene.camera.viewport_width, scene.camera.viewport_height, scene.camera.focal_length
    );
    println!("  entities: {}", scene.entity_count());

    for (i, entity) in scene.entities.iter().enumerate() {
        let shape = match &entity.shape {
            ShapeDesc::Sphere { center, radius } => format!("sphere at {center:?} r={radius}"),
            ShapeDesc::Triangle { a, b, c } => format!("triangle {a:?} {b:?} {c:?}"),
        };
        let material = match &entity.material {
            MaterialDesc::Lambertian { albedo } => format!("lambertian {albedo:?}"),
            MaterialDesc::Metal { albedo, fuzz } => format!("metal {albedo:?} fuzz={fuzz}"),
            MaterialDesc::Dielectric { albedo, ref_idx } => {
                format!("dielectric {albedo:?} ior={ref_idx}")
            }
        };
        println!("  [{i}] {shape} / {material}");
    }
}
