//! Point light source.

use glam::Vec3A;

use crate::camera::Movement;
use crate::color::Color;

/// Point light with a normalized color and a scalar strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Vec3A,
    /// Light color with channels in [0, 1].
    pub color: Color,
    /// Intensity multiplier, non-negative.
    pub strength: f32,
}

impl Light {
    /// Create a light from a color given in [0, 255] channels.
    ///
    /// The color is divided down to [0, 1] so it tints rather than amplifies
    /// surface colors; negative strength is clamped to zero.
    pub fn new(position: Vec3A, color: Color, strength: f32) -> Self {
        Self {
            position,
            color: (color / 255.0).clamp(Color::ZERO, Color::ONE),
            strength: strength.max(0.0),
        }
    }

    /// Unit vector from `point` towards the light.
    pub fn direction_from(&self, point: Vec3A) -> Vec3A {
        (self.position - point).normalize()
    }

    /// Euclidean distance from `point` to the light.
    pub fn distance_from(&self, point: Vec3A) -> f32 {
        self.position.distance(point)
    }

    /// Move the light one step between frames.
    pub fn apply(&mut self, movement: Movement) {
        self.position += movement.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_normalized() {
        let light = Light::new(Vec3A::ZERO, Color::new(255.0, 127.5, 0.0), 1.0);
        assert!((light.color - Color::new(1.0, 0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn direction_and_distance() {
        let light = Light::new(Vec3A::new(0.0, 4.0, 0.0), Color::splat(255.0), 1.0);
        assert_eq!(light.direction_from(Vec3A::ZERO), Vec3A::Y);
        assert_eq!(light.distance_from(Vec3A::ZERO), 4.0);
    }

    #[test]
    fn movement_translates_position() {
        let mut light = Light::new(Vec3A::ZERO, Color::splat(255.0), 1.0);
        light.apply(Movement::Up);
        light.apply(Movement::Left);
        assert_eq!(light.position, Vec3A::new(-1.0, 1.0, 0.0));
    }
}
