//! wgpu renderers for the scene's draw commands.
//!
//! Each shape renderer consumes one `DrawCmd` variant from the frame's draw
//! lists and owns its GPU state (pipeline, instance buffer, atlas), created
//! lazily on first use. CPU-side geometry stays in logical pixels with a
//! top-left origin and +Y down; the vertex shaders map to NDC through a
//! viewport uniform, and physical pixels appear only in scissor rects, via
//! the scale factor riding on [`RenderCtx`].

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
