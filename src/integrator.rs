//! Whitted-style shading with hard shadows and a single mirror bounce.
//!
//! For a primary hit the integrator computes Lambert shading from the point
//! light, attenuates it when the light is blocked, and optionally blends in the
//! color seen along the mirror direction. Reflected hits get local shading only.
//! Rays that escape the scene sample the skybox.

use glam::Vec3A;

use crate::color::{self, Color};
use crate::hittable::Hittable;
use crate::interval::EPSILON;
use crate::light::Light;
use crate::ray::Ray;
use crate::scene::{Scene, SceneHit};
use crate::skybox::Skybox;

/// Factor applied to the shaded color of points that cannot see the light.
pub const SHADOW_ATTENUATION: f32 = 0.2;

/// Number of mirror bounces actually evaluated, whatever depth is requested.
pub const MAX_BOUNCES: u32 = 1;

/// Read-only snapshot of everything a frame needs to color a ray.
#[derive(Debug, Clone, Copy)]
pub struct Integrator<'a> {
    /// Geometry
    pub scene: &'a Scene,
    /// The single point light
    pub light: &'a Light,
    /// Background for escaping rays
    pub skybox: &'a Skybox,
    /// Requested reflection depth; 0 disables reflections
    pub depth: u32,
}

impl<'a> Integrator<'a> {
    /// Create an integrator with the default single-bounce depth.
    pub fn new(scene: &'a Scene, light: &'a Light, skybox: &'a Skybox) -> Self {
        Self {
            scene,
            light,
            skybox,
            depth: MAX_BOUNCES,
        }
    }

    /// Set the requested reflection depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Final color for a primary ray, channels in [0, 255].
    pub fn trace(&self, r: &Ray) -> Color {
        match self.scene.closest_hit(r) {
            Some(hit) => self.shade(r, &hit, self.depth.min(MAX_BOUNCES)),
            None => self.skybox.sample(r.direction),
        }
    }

    /// Lambert term for `hit` without shadows or reflections.
    pub fn local_shade(&self, hit: &SceneHit) -> Color {
        let primitive = self.scene.get(hit.index);
        let normal = primitive.normal(hit.point);
        let light_dir = self.light.direction_from(hit.point);

        let intensity = normal.dot(light_dir).max(0.0) * self.light.strength;
        let base = primitive.color_at(hit.point);
        color::clamp_channels(base * intensity * self.light.color)
    }

    /// Whether another primitive crosses the ray towards the light at a point
    /// nearer the light than `hit` is.
    pub fn in_shadow(&self, hit: &SceneHit) -> bool {
        let light_dir = self.light.direction_from(hit.point);
        let shadow_ray = Ray::offset(hit.point, light_dir, EPSILON);
        let light_distance = self.light.distance_from(hit.point);
        self.scene
            .occluded(&shadow_ray, self.light.position, light_distance, hit.index)
    }

    /// Shadowed local shading plus up to `bounces` mirror reflections.
    fn shade(&self, r: &Ray, hit: &SceneHit, bounces: u32) -> Color {
        let mut shaded = self.local_shade(hit);
        if self.in_shadow(hit) {
            shaded = color::clamp_channels(shaded * SHADOW_ATTENUATION);
        }

        let primitive = self.scene.get(hit.index);
        let reflectivity = primitive.reflectivity();
        if reflectivity <= 0.0 || bounces == 0 {
            return shaded;
        }

        let normal = primitive.normal(hit.point);
        let reflected = self.reflected_color(hit.point, reflect(r.direction, normal));
        color::clamp_channels(color::blend(shaded, reflected, reflectivity))
    }

    /// Color seen from `point` along the mirror direction: local shading of
    /// whatever is hit there, or the skybox.
    fn reflected_color(&self, point: Vec3A, direction: Vec3A) -> Color {
        let mirror_ray = Ray::offset(point, direction, EPSILON);
        match self.scene.closest_hit(&mirror_ray) {
            Some(hit) => self.local_shade(&hit),
            None => self.skybox.sample(mirror_ray.direction),
        }
    }
}

/// Mirror `direction` about `normal`: `d - 2(d·n)n`.
pub fn reflect(direction: Vec3A, normal: Vec3A) -> Vec3A {
    direction - 2.0 * direction.dot(normal) * normal
}
