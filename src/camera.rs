//! Pinhole camera for primary ray generation.

use glam::Vec3A;

use crate::ray::Ray;

/// Discrete one-unit step applied to the camera or light between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// -x
    Left,
    /// +x
    Right,
    /// +y
    Up,
    /// -y
    Down,
    /// -z, the direction the camera looks
    Forward,
    /// +z
    Backward,
}

impl Movement {
    /// World-space translation for this step.
    pub fn step(self) -> Vec3A {
        match self {
            Movement::Left => -Vec3A::X,
            Movement::Right => Vec3A::X,
            Movement::Up => Vec3A::Y,
            Movement::Down => -Vec3A::Y,
            Movement::Forward => -Vec3A::Z,
            Movement::Backward => Vec3A::Z,
        }
    }
}

/// Camera looking down -z with +y up.
///
/// Ray generation is a pure function of the fields at call time, so the
/// position can be changed between frames without any re-initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Point rays are cast from
    pub position: Vec3A,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Field of view in degrees (default: 90)
    pub fov: f32,
}

impl Camera {
    /// Creates a camera at `position` rendering `image_width` x `image_height`
    /// pixels with the given field of view in degrees.
    ///
    /// Zero dimensions are raised to 1 so ray generation never divides by zero.
    pub fn new(position: Vec3A, image_width: u32, image_height: u32, fov: f32) -> Self {
        Self {
            position,
            image_width: image_width.max(1),
            image_height: image_height.max(1),
            fov,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Primary ray through the center of pixel (x, y); row 0 is the top.
    pub fn cast_ray(&self, x: u32, y: u32) -> Ray {
        let scale = (self.fov.to_radians() / 2.0).tan();

        // Map the pixel center to [-1, 1], then widen x by the aspect ratio
        let ndc_x = 2.0 * (x as f32 + 0.5) / self.image_width as f32 - 1.0;
        let screen_x = ndc_x * self.aspect_ratio() * scale;

        // Image rows grow downwards, +y is up
        let screen_y = 1.0 - 2.0 * (y as f32 + 0.5) / self.image_height as f32;

        Ray::new(self.position, Vec3A::new(screen_x, screen_y, -1.0))
    }

    /// Move the camera one step between frames.
    pub fn apply(&mut self, movement: Movement) {
        self.position += movement.step();
    }
}

impl Default for Camera {
    /// 800x600 at the origin with a 90 degree field of view.
    fn default() -> Self {
        Self::new(Vec3A::ZERO, 800, 600, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_are_unit_length() {
        let camera = Camera::new(Vec3A::new(1.0, 2.0, 3.0), 64, 48, 75.0);
        for y in 0..camera.image_height {
            for x in 0..camera.image_width {
                let r = camera.cast_ray(x, y);
                assert!((r.direction.length() - 1.0).abs() < 1e-6, "pixel ({x}, {y})");
                assert_eq!(r.origin, camera.position);
            }
        }
    }

    #[test]
    fn center_of_odd_image_looks_forward() {
        let camera = Camera::new(Vec3A::ZERO, 5, 5, 90.0);
        let r = camera.cast_ray(2, 2);
        assert!((r.direction - -Vec3A::Z).length() < 1e-6);
    }

    #[test]
    fn top_left_points_up_and_left() {
        let camera = Camera::new(Vec3A::ZERO, 4, 4, 90.0);
        let r = camera.cast_ray(0, 0);
        assert!(r.direction.x < 0.0);
        assert!(r.direction.y > 0.0);
        assert!(r.direction.z < 0.0);
    }

    #[test]
    fn corner_matches_fov_and_aspect() {
        // 2x1 image, 90 degrees: pixel (0, 0) center sits at ndc (-0.5, 0)
        let camera = Camera::new(Vec3A::ZERO, 2, 1, 90.0);
        let r = camera.cast_ray(0, 0);
        let expected = Vec3A::new(-1.0, 0.0, -1.0).normalize();
        assert!((r.direction - expected).length() < 1e-6);
    }

    #[test]
    fn movement_changes_ray_origin() {
        let mut camera = Camera::default();
        camera.apply(Movement::Forward);
        camera.apply(Movement::Right);
        assert_eq!(camera.cast_ray(0, 0).origin, Vec3A::new(1.0, 0.0, -1.0));
    }
}
