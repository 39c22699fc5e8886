use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Capsule radiating from a pivot: the shape of a clock hand.
///
/// A spoke is the segment of the ray at `angle_deg` between `inner` and
/// `outer` logical pixels from the pivot, thickened to `width` and capped
/// with half-circles. Hands, tick marks, the toggle track and the glass
/// reflection band are all spokes; only the numbers differ.
#[derive(Debug, Clone, PartialEq)]
pub struct SpokeCmd {
    pub pivot: Vec2,
    /// Face angle in degrees: `0.0` points straight up, positive turns
    /// clockwise, negative counter-clockwise. Unbounded; the direction
    /// wraps naturally through the trigonometry.
    pub angle_deg: f32,
    /// Distance from the pivot to the near end. Negative values reach past
    /// the pivot in the opposite direction, giving a hand its tail.
    pub inner: f32,
    /// Distance from the pivot to the far end. Expected to be `> inner`.
    pub outer: f32,
    /// Full thickness of the capsule, caps included.
    pub width: f32,
    pub paint: Paint,
}

impl SpokeCmd {
    #[inline]
    pub fn new(
        pivot: Vec2,
        angle_deg: f32,
        inner: f32,
        outer: f32,
        width: f32,
        paint: Paint,
    ) -> Self {
        Self {
            pivot,
            angle_deg,
            inner,
            outer,
            width,
            paint,
        }
    }
}

/// Unit vector for a face angle, in window coordinates (+y down).
///
/// `0.0` maps to straight up, `90.0` to the right, `-90.0` to the left, so a
/// decreasing angle sweeps counter-clockwise on screen.
#[inline]
pub fn direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

impl DrawList {
    /// Records a spoke draw command.
    #[inline]
    pub fn push_spoke(
        &mut self,
        z: ZIndex,
        pivot: Vec2,
        angle_deg: f32,
        inner: f32,
        outer: f32,
        width: f32,
        paint: Paint,
    ) {
        self.push(
            z,
            DrawCmd::Spoke(SpokeCmd::new(pivot, angle_deg, inner, outer, width, paint)),
        );
    }

    /// Records a solid spoke.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn push_solid_spoke(
        &mut self,
        z: ZIndex,
        pivot: Vec2,
        angle_deg: f32,
        inner: f32,
        outer: f32,
        width: f32,
        color: Color,
    ) {
        self.push_spoke(z, pivot, angle_deg, inner, outer, width, Paint::Solid(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(v: Vec2, x: f32, y: f32) {
        assert!(
            (v.x - x).abs() < 1e-6 && (v.y - y).abs() < 1e-6,
            "expected ({x}, {y}), got {v:?}"
        );
    }

    #[test]
    fn zero_degrees_points_up() {
        assert_close(direction(0.0), 0.0, -1.0);
    }

    #[test]
    fn positive_angles_turn_clockwise() {
        assert_close(direction(90.0), 1.0, 0.0);
        assert_close(direction(180.0), 0.0, 1.0);
    }

    #[test]
    fn negative_angles_turn_counter_clockwise() {
        assert_close(direction(-90.0), -1.0, 0.0);
        assert_close(direction(-180.0), 0.0, 1.0);
    }

    #[test]
    fn direction_wraps_past_a_full_turn() {
        let a = direction(-390.0);
        let b = direction(-30.0);
        assert_close(a, b.x, b.y);
    }
}
