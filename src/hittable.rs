//! Ray-object intersection contract.
//!
//! Defines the Hittable trait implemented by every geometric primitive and the
//! Hit record it returns.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point where the ray intersects the object
    pub point: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
}

impl Hit {
    /// Build a hit at parameter `t` along `r`, or `None` when `t` is not a
    /// valid hit distance.
    ///
    /// Every primitive funnels its candidate distance through here so the
    /// epsilon rule is applied in one place.
    pub fn along(r: &Ray, t: f32) -> Option<Self> {
        if Interval::HIT.surrounds(t) {
            Some(Self { point: r.at(t), t })
        } else {
            None
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so a scene can be shared by the rayon
/// workers during a frame.
pub trait Hittable: Sync + Send {
    /// Nearest valid intersection of `r` with this object, if any.
    ///
    /// Degenerate configurations (parallel rays, negative discriminants, hits at
    /// or behind the origin) are reported as `None`, never as errors.
    fn intersect(&self, r: &Ray) -> Option<Hit>;

    /// Unit surface normal at `point`, assumed to lie on the surface.
    fn normal(&self, point: Vec3A) -> Vec3A;
}
