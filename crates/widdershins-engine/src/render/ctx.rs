use crate::coords::Viewport;

/// What a shape renderer needs to build pipelines and upload buffers.
///
/// Borrowed fresh each frame; renderers keep no device references of their
/// own across frames.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Drawable area in logical pixels.
    pub viewport: Viewport,
    /// Physical pixels per logical pixel, for scissor conversion.
    pub scale_factor: f32,
}

/// Where a shape renderer records its pass.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
