//! Interval arithmetic for ray parameter ranges and color channels.
//!
//! Provides closed intervals [min, max] used for hit distances and clamping.

/// Smallest hit distance accepted along any ray.
///
/// Rejects hits behind the origin and self-intersections of secondary rays
/// that start on a surface.
pub const EPSILON: f32 = 1e-4;

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Valid hit distances: strictly above [`EPSILON`], unbounded above.
    pub const HIT: Interval = Interval {
        min: EPSILON,
        max: f32::INFINITY,
    };

    /// Valid color channel values in the pixel buffer.
    pub const CHANNEL: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_interval_excludes_epsilon() {
        assert!(!Interval::HIT.surrounds(EPSILON));
        assert!(!Interval::HIT.surrounds(-1.0));
        assert!(Interval::HIT.surrounds(1.0));
        assert!(Interval::HIT.surrounds(1e9));
    }

    #[test]
    fn channel_clamp() {
        assert_eq!(Interval::CHANNEL.clamp(300.0), 255.0);
        assert_eq!(Interval::CHANNEL.clamp(-3.0), 0.0);
        assert_eq!(Interval::CHANNEL.clamp(255.0), 255.0);
    }
}
