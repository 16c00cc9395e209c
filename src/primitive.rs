//! Closed set of scene primitives.

use glam::Vec3A;

use crate::color::Color;
use crate::hittable::{Hit, Hittable};
use crate::material::Material;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Any primitive a scene can hold.
///
/// Dispatches intersection and normal queries to the concrete shape and
/// exposes the shading inputs (base color, reflectivity) the integrator needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// See [`Sphere`].
    Sphere(Sphere),
    /// See [`Plane`].
    Plane(Plane),
    /// See [`Triangle`].
    Triangle(Triangle),
}

impl Primitive {
    /// Appearance of the surface.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Plane(p) => &p.material,
            Primitive::Triangle(t) => &t.material,
        }
    }

    /// Base color at a point on the surface, before lighting.
    pub fn color_at(&self, point: Vec3A) -> Color {
        self.material().pigment.color_at(point)
    }

    /// Blend factor towards the reflected color.
    pub fn reflectivity(&self) -> f32 {
        self.material().reflectivity
    }

    /// Short lowercase name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Triangle(_) => "triangle",
        }
    }
}

impl Hittable for Primitive {
    fn intersect(&self, r: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(s) => s.intersect(r),
            Primitive::Plane(p) => p.intersect(r),
            Primitive::Triangle(t) => t.intersect(r),
        }
    }

    fn normal(&self, point: Vec3A) -> Vec3A {
        match self {
            Primitive::Sphere(s) => s.normal(point),
            Primitive::Plane(p) => p.normal(point),
            Primitive::Triangle(t) => t.normal(point),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
