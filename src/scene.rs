//! Collection of primitives forming a scene.
//!
//! Uses a linear scan for every query: each primary, shadow and reflection ray
//! costs one pass over the primitive list. There is no acceleration structure.

use glam::Vec3A;

use crate::hittable::Hittable;
use crate::primitive::Primitive;
use crate::ray::Ray;

/// Closest intersection found in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the primitive that was hit; identifies it for shadow tests.
    pub index: usize,
    /// Point where the ray intersects the primitive
    pub point: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
}

/// Ordered list of primitives.
///
/// Order only matters for exactly equal hit distances, where the first
/// primitive wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// All primitives, in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Primitive at `index`.
    ///
    /// Panics if `index` did not come from a [`SceneHit`] of this scene.
    pub fn get(&self, index: usize) -> &Primitive {
        &self.primitives[index]
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Closest valid hit along `r`.
    pub fn closest_hit(&self, r: &Ray) -> Option<SceneHit> {
        let mut closest: Option<SceneHit> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(hit) = primitive.intersect(r) {
                // strict comparison keeps the first primitive on exact ties
                if closest.map_or(true, |c| hit.t < c.t) {
                    closest = Some(SceneHit {
                        index,
                        point: hit.point,
                        t: hit.t,
                    });
                }
            }
        }

        closest
    }

    /// Whether a primitive other than `skip` is hit by `r` at a point closer
    /// to `light` than `max_distance`.
    ///
    /// Distances are measured to the light, not along the ray, so a blocker
    /// just past the light still counts.
    pub fn occluded(&self, r: &Ray, light: Vec3A, max_distance: f32, skip: usize) -> bool {
        self.primitives
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .filter_map(|(_, primitive)| primitive.intersect(r))
            .any(|hit| hit.point.distance(light) < max_distance)
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl Extend<Primitive> for Scene {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}
