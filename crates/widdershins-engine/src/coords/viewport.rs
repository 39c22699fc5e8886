//! Logical viewport dimensions, shared with the shaders.

/// Size of the drawable area in logical pixels.
///
/// Renderers upload this as a uniform so vertex shaders can map logical
/// coordinates straight to normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
