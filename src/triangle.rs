//! Triangle primitive using the Möller-Trumbore intersection test.

use glam::Vec3A;

use crate::hittable::{Hit, Hittable};
use crate::interval::EPSILON;
use crate::material::Material;
use crate::ray::Ray;

/// Triangle with a supplied face normal.
///
/// The normal is taken as given rather than derived from the vertices, so
/// meshes can carry authored shading normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Vec3A,
    /// Second vertex.
    pub v1: Vec3A,
    /// Third vertex.
    pub v2: Vec3A,
    /// Face normal, normalized on construction.
    pub normal: Vec3A,
    /// Surface appearance.
    pub material: Material,
}

impl Triangle {
    /// Create a triangle from three vertices and a face normal.
    pub fn new(v0: Vec3A, v1: Vec3A, v2: Vec3A, normal: Vec3A, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    /// Barycentric coordinates `(u, v)` and distance `t` of the ray's crossing
    /// with the triangle, if it lies inside the triangle.
    ///
    /// `t` is not checked against the epsilon here; [`Hittable::intersect`]
    /// does that.
    pub fn barycentric(&self, r: &Ray) -> Option<(f32, f32, f32)> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let p = r.direction.cross(e2);
        let det = e1.dot(p);

        // Ray parallel to the triangle plane
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = r.origin - self.v0;
        let u = inv_det * s.dot(p);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = inv_det * r.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * e2.dot(q);
        Some((u, v, t))
    }
}

impl Hittable for Triangle {
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        let (_, _, t) = self.barycentric(r)?;
        Hit::along(r, t)
    }

    fn normal(&self, _point: Vec3A) -> Vec3A {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn facing_triangle() -> Triangle {
        Triangle::new(
            Vec3A::new(-1.0, -1.0, -3.0),
            Vec3A::new(1.0, -1.0, -3.0),
            Vec3A::new(0.0, 1.0, -3.0),
            Vec3A::Z,
            Material::matte(Color::splat(128.0)),
        )
    }

    #[test]
    fn hit_through_centroid() {
        let tri = facing_triangle();
        let centroid = (tri.v0 + tri.v1 + tri.v2) / 3.0;
        let origin = Vec3A::new(centroid.x, centroid.y, 0.0);
        let r = Ray::new(origin, -Vec3A::Z);

        let (u, v, t) = tri.barycentric(&r).expect("centroid ray should cross");
        assert!(u >= 0.0 && v >= 0.0 && u + v <= 1.0);
        assert!(t > 0.0);

        let hit = tri.intersect(&r).expect("centroid ray should hit");
        assert!((hit.t - 3.0).abs() < 1e-5);
        assert!((hit.point - centroid).length() < 1e-5);
    }

    #[test]
    fn miss_outside_edges() {
        let tri = facing_triangle();
        for origin in [
            Vec3A::new(5.0, 0.0, 0.0),
            Vec3A::new(0.0, -3.0, 0.0),
            Vec3A::new(-0.9, 0.9, 0.0),
        ] {
            assert!(tri.intersect(&Ray::new(origin, -Vec3A::Z)).is_none());
        }
    }

    #[test]
    fn miss_parallel_and_behind() {
        let tri = facing_triangle();
        let parallel = Ray::new(Vec3A::new(0.0, 0.0, -3.0), Vec3A::X);
        assert!(tri.intersect(&parallel).is_none());
        let behind = Ray::new(Vec3A::new(0.0, 0.0, -5.0), -Vec3A::Z);
        assert!(tri.intersect(&behind).is_none());
    }

    #[test]
    fn normal_is_the_supplied_one() {
        let tri = Triangle::new(
            Vec3A::ZERO,
            Vec3A::X,
            Vec3A::Y,
            Vec3A::new(0.0, 2.0, 2.0),
            Material::matte(Color::ONE),
        );
        let expected = Vec3A::new(0.0, 1.0, 1.0).normalize();
        assert!((tri.normal(Vec3A::ZERO) - expected).length() < 1e-6);
    }
}
