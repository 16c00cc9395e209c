//! Equirectangular environment map.
//!
//! Directions are mapped to longitude/latitude texture coordinates:
//! `u = 0.5 + atan2(d.z, d.x) / 2π`, `v = 0.5 - asin(d.y) / π`.

use std::f32::consts::{PI, TAU};
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3A;
use image::RgbImage;
use log::info;

use crate::color::{self, Color};

/// Panorama texture sampled by direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Skybox {
    width: u32,
    height: u32,
    /// Row-major texels with channels in [0, 255]
    texels: Vec<Color>,
}

impl Skybox {
    /// Create a skybox from row-major texels.
    ///
    /// Fails when either dimension is zero or the texel count does not match.
    pub fn new(width: u32, height: u32, texels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("skybox must have non-zero dimensions, got {width}x{height}");
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            bail!(
                "skybox {width}x{height} needs {expected} texels, got {}",
                texels.len()
            );
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Build a skybox from a decoded RGB image.
    pub fn from_image(image: &RgbImage) -> Result<Self> {
        let texels = image.pixels().map(|p| color::from_rgb8(p.0)).collect();
        Self::new(image.width(), image.height(), texels)
    }

    /// Load and decode a panorama image; any alpha channel is dropped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to open skybox image {}", path.display()))?
            .into_rgb8();
        info!(
            "Loaded skybox {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::from_image(&image).with_context(|| format!("invalid skybox {}", path.display()))
    }

    /// Single-color environment.
    pub fn uniform(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            texels: vec![color],
        }
    }

    /// Procedural sky blending from `horizon` at and below the horizon to
    /// `zenith` straight up.
    pub fn gradient(width: u32, height: u32, horizon: Color, zenith: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            // Latitude of the row center, +π/2 at the top row
            let v = (y as f32 + 0.5) / height as f32;
            let elevation = (0.5 - v) * PI;
            let a = elevation.sin().max(0.0);
            let row = color::blend(horizon, zenith, a);
            texels.extend(std::iter::repeat(row).take(width as usize));
        }
        Self {
            width,
            height,
            texels,
        }
    }

    /// Texture width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texture coordinates (u, v) in [0, 1] for a unit direction.
    pub fn map_uv(direction: Vec3A) -> (f32, f32) {
        let u = 0.5 + direction.z.atan2(direction.x) / TAU;
        let v = 0.5 - direction.y.clamp(-1.0, 1.0).asin() / PI;
        (u, v)
    }

    /// Texel column and row for a unit direction.
    ///
    /// The modulo wraps the horizontal seam and keeps `u == 1` or `v == 1`
    /// inside the texture.
    pub fn texel_coords(&self, direction: Vec3A) -> (u32, u32) {
        let (u, v) = Self::map_uv(direction);
        let x = ((u * self.width as f32).floor() as i64).rem_euclid(self.width as i64);
        let y = ((v * self.height as f32).floor() as i64).rem_euclid(self.height as i64);
        (x as u32, y as u32)
    }

    /// Environment color seen along `direction`.
    pub fn sample(&self, direction: Vec3A) -> Color {
        let (x, y) = self.texel_coords(direction);
        self.texels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn indexed(width: u32, height: u32) -> Skybox {
        let texels = (0..width * height)
            .map(|i| Color::new((i % width) as f32, (i / width) as f32, 0.0))
            .collect();
        Skybox::new(width, height, texels).unwrap()
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        assert!(Skybox::new(0, 4, vec![]).is_err());
        assert!(Skybox::new(2, 2, vec![Color::ZERO; 3]).is_err());
    }

    #[test]
    fn cardinal_directions() {
        let sky = indexed(8, 4);
        // +x sits at u = 0.5, the horizon at v = 0.5
        assert_eq!(sky.texel_coords(Vec3A::X), (4, 2));
        // straight up is the top row, straight down wraps to the last
        assert_eq!(sky.texel_coords(Vec3A::Y).1, 0);
        assert_eq!(sky.texel_coords(-Vec3A::Y).1, 0);
        assert_eq!(sky.texel_coords(-Vec3A::Y * 0.999_999).1, 3);
        // +z is a quarter turn past +x
        assert_eq!(sky.texel_coords(Vec3A::Z), (6, 2));
    }

    #[test]
    fn full_turn_about_vertical_maps_to_same_column() {
        let sky = indexed(64, 32);
        let turn = Quat::from_rotation_y(TAU);
        for d in [
            Vec3A::new(0.3, 0.2, -0.9),
            Vec3A::new(-0.7, -0.1, 0.2),
            Vec3A::new(0.1, 0.8, 0.5),
        ] {
            let d = d.normalize();
            let rotated = Vec3A::from(turn * glam::Vec3::from(d)).normalize();
            assert_eq!(sky.texel_coords(d).0, sky.texel_coords(rotated).0);
        }
    }

    #[test]
    fn missing_image_is_an_error() {
        assert!(Skybox::load("no/such/sky.png").is_err());
    }

    #[test]
    fn sample_returns_stored_texel() {
        let sky = indexed(8, 4);
        assert_eq!(sky.sample(Vec3A::X), Color::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn from_image_reads_rgb() {
        let image = RgbImage::from_fn(2, 1, |x, _| image::Rgb([x as u8 * 100, 7, 9]));
        let sky = Skybox::from_image(&image).unwrap();
        assert_eq!(sky.width(), 2);
        assert_eq!(sky.height(), 1);
        assert_eq!(sky.texels[1], Color::new(100.0, 7.0, 9.0));
    }

    #[test]
    fn gradient_is_brighter_towards_zenith() {
        let horizon = Color::splat(255.0);
        let zenith = Color::new(127.5, 178.5, 255.0);
        let sky = Skybox::gradient(4, 16, horizon, zenith);
        let up = sky.sample(Vec3A::Y * 0.99 + Vec3A::X * 0.01);
        let below = sky.sample(-Vec3A::Y * 0.5 + Vec3A::X);
        assert_eq!(below, horizon);
        assert!(up.x < horizon.x);
    }
}
