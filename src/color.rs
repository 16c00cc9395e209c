//! Color helpers.
//!
//! Colors are stored as channel values in [0, 255] until they reach the pixel
//! buffer; light colors are the exception and live in [0, 1].

use glam::Vec3A;

use crate::interval::Interval;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Clamp every channel into [0, 255].
pub fn clamp_channels(color: Color) -> Color {
    let range = Interval::CHANNEL;
    Color::new(
        range.clamp(color.x),
        range.clamp(color.y),
        range.clamp(color.z),
    )
}

/// Blend `base` towards `other` by `amount` in [0, 1].
///
/// Written as a weighted sum so `amount == 1.0` yields `other` exactly.
pub fn blend(base: Color, other: Color, amount: f32) -> Color {
    base * (1.0 - amount) + other * amount
}

/// Build a color from an 8-bit RGB triple.
pub fn from_rgb8(rgb: [u8; 3]) -> Color {
    Color::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
}
