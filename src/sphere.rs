//! Sphere primitive for ray tracing.
//!
//! Solves the ray-sphere quadratic and keeps the nearest root in front of the
//! ray origin.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Surface appearance.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        // Vector from sphere center to ray origin
        let oc = r.origin - self.center;

        // at² + bt + c = 0
        let a = r.direction.dot(r.direction);
        let b = 2.0 * r.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);

        // near <= far: take the near root when it is in front of the origin,
        // otherwise the origin is inside the sphere and only the far root counts
        let t = if Interval::HIT.surrounds(near) { near } else { far };
        Hit::along(r, t)
    }

    fn normal(&self, point: Vec3A) -> Vec3A {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn unit_sphere() -> Sphere {
        Sphere::new(
            Vec3A::new(0.0, 0.0, -5.0),
            1.0,
            Material::matte(Color::new(255.0, 0.0, 0.0)),
        )
    }

    #[test]
    fn hit_head_on() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&r).expect("ray should hit sphere");
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.point - Vec3A::new(0.0, 0.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn miss_sideways() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::X);
        assert!(unit_sphere().intersect(&r).is_none());
    }

    #[test]
    fn miss_when_sphere_is_behind() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::Z);
        assert!(unit_sphere().intersect(&r).is_none());
    }

    #[test]
    fn origin_inside_takes_far_root() {
        let r = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&r).expect("ray from inside should hit");
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!((hit.point - Vec3A::new(0.0, 0.0, -6.0)).length() < 1e-5);
    }

    #[test]
    fn normal_points_outward() {
        let n = unit_sphere().normal(Vec3A::new(0.0, 0.0, -4.0));
        assert!((n - Vec3A::Z).length() < 1e-6);
    }

    #[test]
    fn negative_radius_is_clamped() {
        let s = Sphere::new(Vec3A::ZERO, -2.0, Material::matte(Color::ONE));
        assert_eq!(s.radius, 0.0);
    }
}
