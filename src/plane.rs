//! Infinite horizontal plane.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::EPSILON;
use crate::material::Material;
use crate::ray::Ray;

/// Horizontal plane `y = height`, facing up.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// World-space y level of the plane.
    pub height: f32,
    /// Surface appearance, typically a checkerboard.
    pub material: Material,
}

impl Plane {
    /// Create a plane at the given y level.
    pub fn new(height: f32, material: Material) -> Self {
        Self { height, material }
    }
}

impl Hittable for Plane {
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        // Parallel rays never meet an infinite plane worth shading
        if r.direction.y.abs() < EPSILON {
            return None;
        }
        let t = (self.height - r.origin.y) / r.direction.y;
        Hit::along(r, t)
    }

    fn normal(&self, _point: Vec3A) -> Vec3A {
        Vec3A::Y
    }
}
