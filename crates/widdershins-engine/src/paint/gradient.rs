//! Two-color linear gradients.

use crate::coords::Vec2;
use crate::paint::color::Color;

/// Linear fade from one color to another along an axis.
///
/// Two colors cover every fill in the clock face, so there is no stop list:
/// points before `start` take `from`, points past `end` take `to`, and a
/// degenerate axis (`start == end`) renders as `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self { start, end, from, to }
    }
}
