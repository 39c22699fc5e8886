//! Geometry primitives in logical pixels.
//!
//! Everything the engine hands to an app — pointer positions, window sizes,
//! draw-list coordinates — is expressed in logical pixels. Conversion to
//! physical pixels happens once, inside the renderers, using the window's
//! scale factor.

pub mod rect;
pub mod vec2;
pub mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
