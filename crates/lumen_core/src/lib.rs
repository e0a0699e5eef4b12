//! Lumen Core - scene descriptions and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `EntityDesc`,
//!   `ShapeDesc`, `MaterialDesc`, `CameraDesc`
//! - **Scene file support**: parsing of the line-based text scene format
//!   and JSON scenes, with validation at load time
//!
//! Descriptions are plain data. The renderer turns them into its own
//! intersectable entities once, before any rendering starts.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("Loaded {} entities", scene.entity_count());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{
    CameraDesc, EntityDesc, MaterialDesc, SceneDescription, ShapeDesc, ValidationError,
};
pub use scene_file::{load_scene, parse_scene, LoadError, ParseError};
