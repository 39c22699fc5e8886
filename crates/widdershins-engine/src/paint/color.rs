//! Premultiplied-alpha RGBA color.
//!
//! Every color inside the engine is premultiplied: the RGB channels are
//! already scaled by alpha. The renderers rely on this — their blend state is
//! `ONE, ONE_MINUS_SRC_ALPHA` — so a straight-alpha color smuggled into a
//! draw command shows up as an over-bright fringe. Construct colors through
//! [`Color::from_straight`] and the invariant holds by itself.

/// RGBA color with premultiplied alpha, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Wraps channels that are already premultiplied.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts a straight-alpha color by multiplying RGB through by alpha.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Premultiplied channels as an array, the form instance buffers take.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Scales overall opacity. Valid in premultiplied space only because all
    /// four channels scale together.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: self.r * f,
            g: self.g * f,
            b: self.b * f,
            a: self.a * f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn scale_alpha_scales_all_channels() {
        let c = Color::from_straight(1.0, 1.0, 1.0, 1.0).scale_alpha(0.3);
        assert!((c.r - 0.3).abs() < 1e-6);
        assert!((c.a - 0.3).abs() < 1e-6);
    }

    #[test]
    fn scale_alpha_clamps_the_factor() {
        let c = Color::from_straight(0.5, 0.5, 0.5, 1.0).scale_alpha(2.0);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.r, 0.5);
    }
}
