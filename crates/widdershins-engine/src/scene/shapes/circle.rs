use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroke along a circle's outer edge, drawn inside the radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Circle draw payload: the face disc, the hub, the toggle thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a filled circle, optionally with an edge stroke.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd {
                center,
                radius,
                paint,
                border,
            }),
        );
    }

    /// Records a solid filled circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Paint::Solid(color), None);
    }

    /// Records a stroke-only ring: a circle with a transparent interior.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push_circle(
            z,
            center,
            radius,
            Paint::Solid(Color::TRANSPARENT),
            Some(Border::new(width, color)),
        );
    }
}
