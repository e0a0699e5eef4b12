//! Renderable scene: an ordered list of (geometry, material) entities.

use crate::{Geometry, HitRecord, Material, Ray, Sphere, Triangle};
use lumen_core::{SceneDescription, ShapeDesc};

/// A shape with its material, stored inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub geometry: Geometry,
    pub material: Material,
}

impl Entity {
    pub fn new(geometry: impl Into<Geometry>, material: Material) -> Self {
        Self {
            geometry: geometry.into(),
            material,
        }
    }
}

/// Immutable collection of entities tested by brute-force linear scan.
///
/// Entity order matters: on exactly equal hit distances the entity with
/// the lowest index wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Build the renderable scene from a validated description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let entities: Vec<Entity> = desc
            .entities
            .iter()
            .map(|entity| {
                let geometry = match entity.shape {
                    ShapeDesc::Sphere { center, radius } => {
                        Geometry::Sphere(Sphere::new(center, radius))
                    }
                    ShapeDesc::Triangle { a, b, c } => Geometry::Triangle(Triangle::new(a, b, c)),
                };
                let material = Material::from(&entity.material);
                log::debug!("Entity: {} / {}", entity.shape.tag(), entity.material.tag());
                Entity { geometry, material }
            })
            .collect();

        log::info!("Built scene with {} entities", entities.len());
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Nearest hit of `ray` and the index of the entity that produced it.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(usize, HitRecord)> {
        let mut closest = HitRecord::miss(*ray);
        let mut index = None;

        for (i, entity) in self.entities.iter().enumerate() {
            if closest.closer(entity.geometry.intersect(ray)) {
                index = Some(i);
            }
        }

        index.map(|i| (i, closest))
    }

    /// Nearest hit of `ray` together with the material that was hit.
    #[inline]
    pub fn hit(&self, ray: &Ray) -> Option<(HitRecord, &Material)> {
        self.closest_hit(ray)
            .map(|(i, rec)| (rec, &self.entities[i].material))
    }
}

impl FromIterator<Entity> for Scene {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}
