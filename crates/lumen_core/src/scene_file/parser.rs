//! Line-based scene text parser.
//!
//! Each non-empty, non-comment line is one of:
//!
//! - `<count>`: expected number of entities (only before the first entity)
//! - `<shape> { numbers } <material> { numbers }`
//! - `camera { ox oy oz viewport_w viewport_h focal }` (at most once)
//!
//! Shapes: `sphere { cx cy cz r }`, `triangle { ax ay az bx by bz cx cy cz }`.
//! Materials: `lambertian { r g b }`, `metal { r g b fuzz }`,
//! `dielectric { r g b ref_idx }`.

use lumen_math::{Color, Point3};
use thiserror::Error;

use crate::scene::{
    CameraDesc, EntityDesc, MaterialDesc, SceneDescription, ShapeDesc, ValidationError,
};

/// Errors that can occur while parsing scene text.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number `{token}` at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Unclosed block at line {0}")]
    UnclosedBlock(usize),

    #[error("Unknown shape `{tag}` at line {line}")]
    UnknownShape { line: usize, tag: String },

    #[error("Unknown material `{tag}` at line {line}")]
    UnknownMaterial { line: usize, tag: String },

    #[error("`{tag}` at line {line} takes {expected} values, found {found}")]
    FieldCount {
        line: usize,
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid value at line {line}: {source}")]
    InvalidValue {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Camera defined twice (line {0})")]
    DuplicateCamera(usize),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// One `tag { values }` group on a line.
#[derive(Debug)]
struct Block<'a> {
    tag: &'a str,
    values: Vec<f64>,
}

/// Parse scene text into a validated description.
pub fn parse_scene(content: &str) -> ParseResult<SceneDescription> {
    let mut scene = SceneDescription::new();
    let mut expected_count: Option<(usize, usize)> = None;
    let mut camera_line: Option<usize> = None;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = strip_comment(raw).trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Ok(count) = trimmed.parse::<usize>() {
            if expected_count.is_some() || !scene.is_empty() {
                return Err(ParseError::Parse {
                    line,
                    message: "entity count must come before any entity".to_string(),
                });
            }
            expected_count = Some((count, line));
            continue;
        }

        let blocks = split_blocks(trimmed, line)?;
        match blocks.as_slice() {
            [camera] if camera.tag == "camera" => {
                if camera_line.is_some() {
                    return Err(ParseError::DuplicateCamera(line));
                }
                scene.camera = parse_camera(camera, line)?;
                camera_line = Some(line);
            }
            [shape, material] => {
                let entity = EntityDesc::new(
                    parse_shape(shape, line)?,
                    parse_material(material, line)?,
                );
                entity
                    .validate()
                    .map_err(|source| ParseError::InvalidValue { line, source })?;
                log::debug!(
                    "line {}: {} with {} material",
                    line,
                    entity.shape.tag(),
                    entity.material.tag()
                );
                scene.entities.push(entity);
            }
            _ => {
                return Err(ParseError::Parse {
                    line,
                    message: "expected `<shape> { ... } <material> { ... }` or `camera { ... }`"
                        .to_string(),
                })
            }
        }
    }

    if let Some((count, line)) = expected_count {
        if count != scene.entity_count() {
            log::warn!(
                "Scene declares {} entities (line {}) but defines {}",
                count,
                line,
                scene.entity_count()
            );
        }
    }

    Ok(scene)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split a line into `tag { values }` groups.
fn split_blocks(line_text: &str, line: usize) -> ParseResult<Vec<Block<'_>>> {
    let mut blocks = Vec::new();
    let mut rest = line_text.trim_start();

    while !rest.is_empty() {
        let tag_end = rest
            .find(|c: char| c.is_whitespace() || c == '{' || c == '}')
            .unwrap_or(rest.len());
        let tag = &rest[..tag_end];
        if tag.is_empty() {
            return Err(ParseError::Parse {
                line,
                message: format!("expected a tag before `{}`", &rest[..1]),
            });
        }

        rest = rest[tag_end..].trim_start();
        rest = rest.strip_prefix('{').ok_or_else(|| ParseError::Parse {
            line,
            message: format!("expected `{{` after `{tag}`"),
        })?;

        let close = rest.find('}').ok_or(ParseError::UnclosedBlock(line))?;
        let body = &rest[..close];
        if body.contains('{') {
            return Err(ParseError::UnclosedBlock(line));
        }

        let values = body
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<ParseResult<Vec<_>>>()?;

        blocks.push(Block { tag, values });
        rest = rest[close + 1..].trim_start();
    }

    Ok(blocks)
}

fn expect_values<'b>(block: &'b Block<'_>, expected: usize, line: usize) -> ParseResult<&'b [f64]> {
    if block.values.len() == expected {
        Ok(&block.values)
    } else {
        Err(ParseError::FieldCount {
            line,
            tag: block.tag.to_string(),
            expected,
            found: block.values.len(),
        })
    }
}

fn point(v: &[f64]) -> Point3 {
    Point3::new(v[0], v[1], v[2])
}

fn parse_shape(block: &Block<'_>, line: usize) -> ParseResult<ShapeDesc> {
    match block.tag {
        "sphere" => {
            let v = expect_values(block, 4, line)?;
            Ok(ShapeDesc::Sphere {
                center: point(&v[0..3]),
                radius: v[3],
            })
        }
        "triangle" => {
            let v = expect_values(block, 9, line)?;
            Ok(ShapeDesc::Triangle {
                a: point(&v[0..3]),
                b: point(&v[3..6]),
                c: point(&v[6..9]),
            })
        }
        other => Err(ParseError::UnknownShape {
            line,
            tag: other.to_string(),
        }),
    }
}

fn parse_material(block: &Block<'_>, line: usize) -> ParseResult<MaterialDesc> {
    match block.tag {
        "lambertian" => {
            let v = expect_values(block, 3, line)?;
            Ok(MaterialDesc::Lambertian {
                albedo: Color::new(v[0], v[1], v[2]),
            })
        }
        "metal" => {
            let v = expect_values(block, 4, line)?;
            Ok(MaterialDesc::Metal {
                albedo: Color::new(v[0], v[1], v[2]),
                fuzz: v[3],
            })
        }
        "dielectric" => {
            let v = expect_values(block, 4, line)?;
            Ok(MaterialDesc::Dielectric {
                albedo: Color::new(v[0], v[1], v[2]),
                ref_idx: v[3],
            })
        }
        other => Err(ParseError::UnknownMaterial {
            line,
            tag: other.to_string(),
        }),
    }
}

fn parse_camera(block: &Block<'_>, line: usize) -> ParseResult<CameraDesc> {
    let v = expect_values(block, 6, line)?;
    let camera = CameraDesc {
        origin: point(&v[0..3]),
        viewport_width: v[3],
        viewport_height: v[4],
        focal_length: v[5],
    };
    camera
        .validate()
        .map_err(|source| ParseError::InvalidValue { line, source })?;
    Ok(camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_scene() {
        let text = r#"
# three entities
3
sphere { 0 0 -1 0.5 } lambertian { 0.1 0.2 0.5 }
triangle { -1 -1 -2  1 -1 -2  0 1 -2 } metal { 0.8 0.8 0.8 0.1 }
sphere { 1 0 -1 0.5 } dielectric { 1 1 1 1.5 }   # glass
"#;
        let scene = parse_scene(text).unwrap();
        assert_eq!(scene.entity_count(), 3);
        assert_eq!(
            scene.entities[0].shape,
            ShapeDesc::Sphere {
                center: Point3::new(0.0, 0.0, -1.0),
                radius: 0.5
            }
        );
        assert_eq!(
            scene.entities[1].material,
            MaterialDesc::Metal {
                albedo: Color::splat(0.8),
                fuzz: 0.1
            }
        );
        assert_eq!(scene.entities[2].material.tag(), "dielectric");
        assert_eq!(scene.camera, CameraDesc::default());
    }

    #[test]
    fn test_parse_camera_line() {
        let scene = parse_scene("camera { 0 1 0  4 2 1.5 }\n").unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.camera.origin, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(scene.camera.viewport_width, 4.0);
        assert_eq!(scene.camera.focal_length, 1.5);
    }

    #[test]
    fn test_blocks_without_spaces() {
        let scene = parse_scene("sphere{0 0 -1 0.5}lambertian{1 1 1}").unwrap();
        assert_eq!(scene.entity_count(), 1);
    }

    #[test]
    fn test_unknown_shape() {
        let err = parse_scene("cube { 0 0 0 1 } lambertian { 1 1 1 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownShape {
                line: 1,
                tag: "cube".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_material() {
        let err = parse_scene("\nsphere { 0 0 0 1 } glossy { 1 1 1 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownMaterial {
                line: 2,
                tag: "glossy".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_scene("sphere { 0 0 0 } lambertian { 1 1 1 }").unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldCount { expected: 4, found: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_scene("sphere { 0 0 zero 1 } lambertian { 1 1 1 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                token: "zero".to_string()
            }
        );
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_scene("sphere { 0 0 0 1 lambertian { 1 1 1 }").unwrap_err();
        assert_eq!(err, ParseError::UnclosedBlock(1));

        let err = parse_scene("sphere { 0 0 0 1 } lambertian { 1 1 1").unwrap_err();
        assert_eq!(err, ParseError::UnclosedBlock(1));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = parse_scene("sphere { 0 0 0 1 } lambertian { 1.5 1 1 }").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { line: 1, .. }));

        let err = parse_scene("sphere { 0 0 0 -1 } lambertian { 1 1 1 }").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { line: 1, .. }));

        let err = parse_scene("sphere { 0 0 0 1 } dielectric { 1 1 1 0 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue {
                line: 1,
                source: ValidationError::RefractiveIndex(0.0)
            }
        );
    }

    #[test]
    fn test_single_block_entity_rejected() {
        let err = parse_scene("sphere { 0 0 0 1 }").unwrap_err();
        assert!(matches!(err, ParseError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_camera() {
        let text = "camera { 0 0 0 2 2 1 }\ncamera { 0 0 0 2 2 1 }";
        assert_eq!(parse_scene(text).unwrap_err(), ParseError::DuplicateCamera(2));
    }

    #[test]
    fn test_count_after_entity_rejected() {
        let text = "sphere { 0 0 0 1 } lambertian { 1 1 1 }\n1";
        assert!(matches!(
            parse_scene(text).unwrap_err(),
            ParseError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn test_count_mismatch_is_not_fatal() {
        let scene = parse_scene("5\nsphere { 0 0 0 1 } lambertian { 1 1 1 }").unwrap();
        assert_eq!(scene.entity_count(), 1);
    }
}
