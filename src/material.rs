//! Surface appearance for primitives.
//!
//! A material is a color source (solid or checkerboard) plus a reflectivity
//! used to blend the locally shaded color with the mirrored scene.

use glam::Vec3A;

use crate::color::Color;

/// Edge length of one checkerboard tile in world units.
pub const CHECKER_TILE: f32 = 1.25;

/// Where the base color of a surface point comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pigment {
    /// One color everywhere.
    Solid(Color),

    /// Alternating tiles on the xz grid.
    Checker {
        /// Color of tiles whose index sum is even.
        even: Color,
        /// Color of tiles whose index sum is odd.
        odd: Color,
    },
}

impl Pigment {
    /// Base color at a world-space point.
    ///
    /// Checker parity is `floor(x / tile) + floor(z / tile)`; the y coordinate
    /// is ignored, so the pattern is meant for horizontal surfaces.
    pub fn color_at(&self, point: Vec3A) -> Color {
        match *self {
            Pigment::Solid(color) => color,
            Pigment::Checker { even, odd } => {
                let ix = (point.x / CHECKER_TILE).floor() as i64;
                let iz = (point.z / CHECKER_TILE).floor() as i64;
                if (ix + iz).rem_euclid(2) == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

/// Appearance of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color source.
    pub pigment: Pigment,
    /// Blend factor towards the reflected color, in [0, 1].
    pub reflectivity: f32,
}

impl Material {
    /// Create a material; reflectivity is clamped into [0, 1].
    pub fn new(pigment: Pigment, reflectivity: f32) -> Self {
        Self {
            pigment,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }

    /// Non-reflective solid color.
    pub fn matte(color: Color) -> Self {
        Self::new(Pigment::Solid(color), 0.0)
    }

    /// Solid color with the given reflectivity.
    pub fn solid(color: Color, reflectivity: f32) -> Self {
        Self::new(Pigment::Solid(color), reflectivity)
    }

    /// Checkerboard with the given reflectivity.
    pub fn checker(even: Color, odd: Color, reflectivity: f32) -> Self {
        Self::new(Pigment::Checker { even, odd }, reflectivity)
    }

    /// Whether the integrator should trace a reflection ray for this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}
