//! Fill descriptions for draw commands.
//!
//! Colors are stored premultiplied so the renderers can blend with a single
//! fixed pipeline state; see [`Color`] for the conversion helpers.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::LinearGradient;

/// How a shape is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
