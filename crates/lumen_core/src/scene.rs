//! Scene description types.
//!
//! These mirror the scene file one-to-one and carry no rendering state.

use lumen_math::{is_unit_color, Color, Point3, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scene value outside the range the renderer accepts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("sphere center {0:?} is not finite")]
    SphereCenter(Point3),

    #[error("sphere radius must be positive, got {0}")]
    SphereRadius(f64),

    #[error("triangle vertices must be finite")]
    TriangleVertex,

    #[error("{material} albedo {albedo:?} has channels outside [0, 1]")]
    Albedo { material: &'static str, albedo: Color },

    #[error("metal fuzz must be >= 0, got {0}")]
    Fuzz(f64),

    #[error("dielectric refractive index must be > 0, got {0}")]
    RefractiveIndex(f64),

    #[error("camera origin {0:?} is not finite")]
    CameraOrigin(Point3),

    #[error("camera {name} must be positive, got {value}")]
    CameraExtent { name: &'static str, value: f64 },
}

/// Geometry of one entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDesc {
    Sphere { center: Point3, radius: f64 },
    /// Vertices in winding order; the outward normal is `(b - a) × (c - a)`.
    Triangle { a: Point3, b: Point3, c: Point3 },
}

impl ShapeDesc {
    /// Tag used for this shape in the text format.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeDesc::Sphere { .. } => "sphere",
            ShapeDesc::Triangle { .. } => "triangle",
        }
    }

    /// Check the numeric constraints a renderer relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            ShapeDesc::Sphere { center, radius } => {
                if !center.is_finite() {
                    return Err(ValidationError::SphereCenter(center));
                }
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(ValidationError::SphereRadius(radius));
                }
                Ok(())
            }
            ShapeDesc::Triangle { a, b, c } => {
                if a.is_finite() && b.is_finite() && c.is_finite() {
                    Ok(())
                } else {
                    Err(ValidationError::TriangleVertex)
                }
            }
        }
    }
}

/// Surface material of one entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDesc {
    Lambertian { albedo: Color },
    Metal { albedo: Color, fuzz: f64 },
    Dielectric { albedo: Color, ref_idx: f64 },
}

impl MaterialDesc {
    /// Tag used for this material in the text format.
    pub fn tag(&self) -> &'static str {
        match self {
            MaterialDesc::Lambertian { .. } => "lambertian",
            MaterialDesc::Metal { .. } => "metal",
            MaterialDesc::Dielectric { .. } => "dielectric",
        }
    }

    /// The material's albedo.
    pub fn albedo(&self) -> Color {
        match self {
            MaterialDesc::Lambertian { albedo }
            | MaterialDesc::Metal { albedo, .. }
            | MaterialDesc::Dielectric { albedo, .. } => *albedo,
        }
    }

    /// Check the numeric constraints a renderer relies on.
    ///
    /// Albedo channels must lie in `[0, 1]` so that composed colors never
    /// leave that range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let albedo = self.albedo();
        if !is_unit_color(albedo) {
            return Err(ValidationError::Albedo {
                material: self.tag(),
                albedo,
            });
        }
        match *self {
            MaterialDesc::Lambertian { .. } => Ok(()),
            MaterialDesc::Metal { fuzz, .. } => {
                if fuzz.is_finite() && fuzz >= 0.0 {
                    Ok(())
                } else {
                    Err(ValidationError::Fuzz(fuzz))
                }
            }
            MaterialDesc::Dielectric { ref_idx, .. } => {
                if ref_idx.is_finite() && ref_idx > 0.0 {
                    Ok(())
                } else {
                    Err(ValidationError::RefractiveIndex(ref_idx))
                }
            }
        }
    }
}

/// A placed shape with its material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityDesc {
    pub shape: ShapeDesc,
    pub material: MaterialDesc,
}

impl EntityDesc {
    pub fn new(shape: ShapeDesc, material: MaterialDesc) -> Self {
        Self { shape, material }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.shape.validate()?;
        self.material.validate()
    }
}

/// Pinhole viewport camera parameters.
///
/// The viewport is an axis-aligned rectangle `focal_length` in front of the
/// origin along -Z, `viewport_width` wide and `viewport_height` tall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub origin: Point3,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            origin: Point3::ZERO,
            viewport_width: 2.0,
            viewport_height: 2.0,
            focal_length: 1.0,
        }
    }
}

impl CameraDesc {
    /// Horizontal extent of the viewport.
    pub fn horizontal(&self) -> Vec3 {
        Vec3::new(self.viewport_width, 0.0, 0.0)
    }

    /// Vertical extent of the viewport.
    pub fn vertical(&self) -> Vec3 {
        Vec3::new(0.0, self.viewport_height, 0.0)
    }

    /// Lower-left corner of the viewport in world space.
    pub fn lower_left_corner(&self) -> Point3 {
        self.origin
            - 0.5 * (self.horizontal() + self.vertical())
            - Vec3::new(0.0, 0.0, self.focal_length)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.origin.is_finite() {
            return Err(ValidationError::CameraOrigin(self.origin));
        }
        for (name, value) in [
            ("viewport width", self.viewport_width),
            ("viewport height", self.viewport_height),
            ("focal length", self.focal_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::CameraExtent { name, value });
            }
        }
        Ok(())
    }
}

/// A complete, validated scene: ordered entities plus a camera.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub entities: Vec<EntityDesc>,
    #[serde(default)]
    pub camera: CameraDesc,
}

impl SceneDescription {
    /// Create an empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Order is kept; it breaks exact distance ties.
    pub fn add(&mut self, shape: ShapeDesc, material: MaterialDesc) {
        self.entities.push(EntityDesc::new(shape, material));
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_matches_unit_viewport() {
        let camera = CameraDesc::default();
        assert_eq!(camera.horizontal(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(camera.vertical(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.lower_left_corner(), Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_material_validation() {
        let ok = MaterialDesc::Metal { albedo: Color::splat(0.8), fuzz: 0.3 };
        assert!(ok.validate().is_ok());

        let bright = MaterialDesc::Lambertian { albedo: Color::new(1.2, 0.0, 0.0) };
        assert_eq!(
            bright.validate(),
            Err(ValidationError::Albedo {
                material: "lambertian",
                albedo: Color::new(1.2, 0.0, 0.0)
            })
        );

        let negative_fuzz = MaterialDesc::Metal { albedo: Color::ONE, fuzz: -0.1 };
        assert_eq!(negative_fuzz.validate(), Err(ValidationError::Fuzz(-0.1)));

        let zero_index = MaterialDesc::Dielectric { albedo: Color::ONE, ref_idx: 0.0 };
        assert_eq!(zero_index.validate(), Err(ValidationError::RefractiveIndex(0.0)));
    }

    #[test]
    fn test_shape_validation() {
        let sphere = ShapeDesc::Sphere { center: Point3::ZERO, radius: 0.0 };
        assert_eq!(sphere.validate(), Err(ValidationError::SphereRadius(0.0)));

        let tri = ShapeDesc::Triangle {
            a: Point3::ZERO,
            b: Point3::X,
            c: Point3::new(f64::NAN, 0.0, 0.0),
        };
        assert_eq!(tri.validate(), Err(ValidationError::TriangleVertex));
    }

    #[test]
    fn test_camera_validation() {
        assert!(CameraDesc::default().validate().is_ok());

        let flat = CameraDesc {
            focal_length: 0.0,
            ..CameraDesc::default()
        };
        assert_eq!(
            flat.validate(),
            Err(ValidationError::CameraExtent {
                name: "focal length",
                value: 0.0
            })
        );
        assert_eq!(
            flat.validate().unwrap_err().to_string(),
            "camera focal length must be positive, got 0"
        );
    }

    #[test]
    fn test_scene_json_round_trip_shape() {
        let json = r#"{
            "entities": [
                {
                    "shape": { "type": "sphere", "center": [0.0, 0.0, -1.0], "radius": 0.5 },
                    "material": { "type": "dielectric", "albedo": [1.0, 1.0, 1.0], "ref_idx": 1.5 }
                }
            ]
        }"#;
        let scene: SceneDescription = serde_json::from_str(json).unwrap();
        assert_eq!(scene.entity_count(), 1);
        assert_eq!(scene.camera, CameraDesc::default());
        assert_eq!(scene.entities[0].material.tag(), "dielectric");
    }
}
