//! High-level scene loading.
//!
//! Picks the format from the file extension and validates the result, so a
//! successfully loaded scene is ready to hand to the renderer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{SceneDescription, ValidationError};
use crate::scene_file::parser::{parse_scene, ParseError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid entity {index}: {source}")]
    InvalidEntity {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid camera: {0}")]
    InvalidCamera(#[source] ValidationError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file.
///
/// Files ending in `.json` are read as JSON; anything else is read as the
/// line-based text format.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let scene = if is_json {
        load_scene_json(&content)?
    } else {
        parse_scene(&content)?
    };

    log::info!(
        "Loaded {} entities from {}",
        scene.entity_count(),
        path.display()
    );
    if scene.is_empty() {
        log::warn!("Scene {} contains no entities", path.display());
    }

    Ok(scene)
}

/// Parse and validate a JSON scene.
pub fn load_scene_json(content: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(content)?;

    for (index, entity) in scene.entities.iter().enumerate() {
        entity
            .validate()
            .map_err(|source| LoadError::InvalidEntity { index, source })?;
    }
    scene.camera.validate().map_err(LoadError::InvalidCamera)?;

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lumen_core_{}_{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_text_scene() {
        let path = temp_file(
            "basic.scene",
            "1\nsphere { 0 0 -1 0.5 } lambertian { 0.5 0.5 0.5 }\n",
        );
        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.entity_count(), 1);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_json_scene() {
        let path = temp_file(
            "basic.json",
            r#"{ "entities": [ {
                "shape": { "type": "triangle", "a": [0, 0, -1], "b": [1, 0, -1], "c": [0, 1, -1] },
                "material": { "type": "metal", "albedo": [0.9, 0.9, 0.9], "fuzz": 0.0 }
            } ],
            "camera": { "viewport_width": 4.0 } }"#,
        );
        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.entity_count(), 1);
        assert_eq!(scene.camera.viewport_width, 4.0);
        assert_eq!(scene.camera.viewport_height, 2.0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_json_validation_errors() {
        let json = r#"{ "entities": [ {
            "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1.0 },
            "material": { "type": "metal", "albedo": [0.9, 0.9, 0.9], "fuzz": -1.0 }
        } ] }"#;
        assert!(matches!(
            load_scene_json(json),
            Err(LoadError::InvalidEntity {
                index: 0,
                source: ValidationError::Fuzz(_)
            })
        ));

        let json = r#"{ "entities": [], "camera": { "focal_length": 0.0 } }"#;
        assert!(matches!(load_scene_json(json), Err(LoadError::InvalidCamera(_))));

        let json = r#"{ "entities": [ { "shape": { "type": "cube" }, "material": { "type": "lambertian", "albedo": [1, 1, 1] } } ] }"#;
        assert!(matches!(load_scene_json(json), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("/definitely/not/here.scene");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let path = temp_file("bad.scene", "sphere { 0 0 0 1 } plastic { 1 1 1 }\n");
        assert!(matches!(load_scene(&path), Err(LoadError::Parse(_))));
        fs::remove_file(path).ok();
    }
}
