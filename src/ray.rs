//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and unit direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a slightly offset surface
    /// point for shadow and reflection rays.
    pub origin: Vec3A,

    /// Direction of the ray, always unit length.
    ///
    /// Because the direction is normalized, `t` is the euclidean distance
    /// from the origin, which the shadow test relies on.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray starting `offset` units along `direction` from `origin`.
    ///
    /// Used for secondary rays so they do not immediately re-hit the surface
    /// they leave.
    pub fn offset(origin: Vec3A, direction: Vec3A, offset: f32) -> Self {
        let direction = direction.normalize();
        Self {
            origin: origin + direction * offset,
            direction,
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
