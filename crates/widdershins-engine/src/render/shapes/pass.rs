//! Shared GPU plumbing for the shape passes.
//!
//! Every renderer in this module draws the same way: a unit quad expanded
//! from the vertex index, instanced once per shape, blended over the existing
//! frame with premultiplied alpha, with the viewport size as a uniform at
//! binding 0. [`QuadPass`] owns that machinery once; the renderers keep only
//! their instance encoding and their draw-call splitting.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};
use crate::paint::Paint;
use crate::render::{RenderCtx, RenderTarget};

/// Viewport size uniform at binding 0 of every shape shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

/// Static description of one shape pass.
pub(super) struct PassDesc {
    /// Debug label applied to every GPU object the pass creates.
    pub label: &'static str,
    pub shader_src: &'static str,
    pub instance_layout: wgpu::VertexBufferLayout<'static>,
    /// Bind group layout entries beyond the viewport uniform at binding 0.
    pub resources: &'static [wgpu::BindGroupLayoutEntry],
}

/// Lazily created pipeline and binding state for one shape pass.
///
/// Everything is built on first use against the current surface format; a
/// format change (window moved to a differently configured monitor) rebuilds
/// the pipeline and invalidates the bind group. The quad lives in the vertex
/// shader, so the only geometry buffer is the per-shape instance buffer.
#[derive(Default)]
pub(super) struct QuadPass {
    format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl QuadPass {
    /// Builds the pipeline if missing, rebuilding it when the surface format
    /// has changed.
    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>, desc: &PassDesc) {
        if self.format != Some(ctx.surface_format) || self.pipeline.is_none() {
            self.build_pipeline(ctx, desc);
        }
    }

    /// True when [`rebind`](Self::rebind) must run before drawing.
    pub(super) fn needs_bindings(&self) -> bool {
        self.bind_group.is_none() || self.viewport_ubo.is_none()
    }

    /// Creates the viewport uniform and the bind group. `resources` fill
    /// bindings 1.. and must match the layout entries in `desc.resources`.
    pub(super) fn rebind(
        &mut self,
        ctx: &RenderCtx<'_>,
        desc: &PassDesc,
        resources: &[wgpu::BindGroupEntry<'_>],
    ) {
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(desc.label),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut entries = Vec::with_capacity(1 + resources.len());
        entries.push(wgpu::BindGroupEntry {
            binding: 0,
            resource: viewport_ubo.as_entire_binding(),
        });
        entries.extend_from_slice(resources);

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.label),
            layout: bgl,
            entries: &entries,
        }));
        self.viewport_ubo = Some(viewport_ubo);
    }

    /// Writes this frame's viewport size into the uniform.
    pub(super) fn write_viewport(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let uniform = ViewportUniform {
            size: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
    }

    /// Uploads the frame's instances, growing the buffer in powers of two so
    /// steady-state frames never reallocate.
    pub(super) fn upload_instances<T: Pod>(
        &mut self,
        ctx: &RenderCtx<'_>,
        desc: &PassDesc,
        instances: &[T],
    ) {
        if instances.len() > self.instance_capacity || self.instance_vbo.is_none() {
            let cap = instances.len().next_power_of_two().max(64);
            self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(desc.label),
                size: (cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = cap;
        }
        if let Some(vbo) = self.instance_vbo.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(instances));
        }
    }

    /// Begins the render pass with pipeline, bind group, and instance buffer
    /// set, then hands it to `record` for the draw calls.
    ///
    /// Quietly does nothing if any piece of state is missing; `prepare`,
    /// `rebind`, and `upload_instances` must have run this frame.
    pub(super) fn draw(
        &self,
        target: &mut RenderTarget<'_>,
        desc: &PassDesc,
        record: impl FnOnce(&mut wgpu::RenderPass<'_>),
    ) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(desc.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, instance_vbo.slice(..));
        record(&mut rpass);
    }

    fn build_pipeline(&mut self, ctx: &RenderCtx<'_>, desc: &PassDesc) {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label),
            source: wgpu::ShaderSource::Wgsl(desc.shader_src.into()),
        });

        let mut bgl_entries = Vec::with_capacity(1 + desc.resources.len());
        bgl_entries.push(wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<ViewportUniform>() as u64
                ),
            },
            count: None,
        });
        bgl_entries.extend_from_slice(desc.resources);

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(desc.label),
            entries: &bgl_entries,
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[desc.instance_layout.clone()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        // The old bind group was laid out against the old pipeline.
        self.bind_group = None;
        self.viewport_ubo = None;
    }
}

/// Issues one instanced draw per run of consecutive instances that share a
/// clip rect, skipping runs whose scissor region is empty.
///
/// The clock's lists are almost entirely unclipped, so this is one draw call
/// in practice, with a second for the clipped reflection band.
pub(super) fn draw_clip_batches(
    rpass: &mut wgpu::RenderPass<'_>,
    clips: &[Option<Rect>],
    viewport: Viewport,
    scale: f32,
) {
    let mut start = 0usize;
    while start < clips.len() {
        let clip = clips[start];
        let mut end = start + 1;
        while end < clips.len() && clips[end] == clip {
            end += 1;
        }
        if let Some((x, y, w, h)) = scissor_rect(clip, viewport, scale) {
            rpass.set_scissor_rect(x, y, w, h);
            rpass.draw(0..4, start as u32..end as u32);
        }
        start = end;
    }
}

/// Physical-pixel scissor arguments for a logical clip rect.
///
/// `None` for the clip means no scissor and yields the full surface; `None`
/// as the result means the clip has zero area and the draw should be
/// skipped entirely.
fn scissor_rect(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let vw = (viewport.width * scale).max(1.0) as u32;
    let vh = (viewport.height * scale).max(1.0) as u32;
    let Some(r) = clip else { return Some((0, 0, vw, vh)) };

    let to_px = |v: f32, limit: u32| ((v * scale).max(0.0) as u32).min(limit);
    let x0 = to_px(r.origin.x, vw);
    let y0 = to_px(r.origin.y, vh);
    let x1 = to_px(r.origin.x + r.size.x, vw);
    let y1 = to_px(r.origin.y + r.size.y, vh);

    let (w, h) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
    (w > 0 && h > 0).then_some((x0, y0, w, h))
}

/// Per-instance fill fields resolved from a [`Paint`].
///
/// A solid fill becomes the same color at both ends of a zero-length axis;
/// the shaders detect the degenerate axis and skip the gradient math.
pub(super) struct PaintData {
    pub fill0: [f32; 4],
    pub fill1: [f32; 4],
    /// Gradient axis, `xy` = start and `zw` = end, in logical pixels.
    pub axis: [f32; 4],
}

pub(super) fn paint_data(paint: &Paint) -> PaintData {
    match paint {
        Paint::Solid(c) => PaintData {
            fill0: c.to_array(),
            fill1: c.to_array(),
            axis: [0.0; 4],
        },
        Paint::LinearGradient(g) => PaintData {
            fill0: g.from.to_array(),
            fill1: g.to.to_array(),
            axis: [g.start.x, g.start.y, g.end.x, g.end.y],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn unclipped_scissor_is_the_full_surface() {
        let vp = Viewport::new(100.0, 50.0);
        assert_eq!(scissor_rect(None, vp, 2.0), Some((0, 0, 200, 100)));
    }

    #[test]
    fn scissor_clamps_to_the_surface_edges() {
        let vp = Viewport::new(100.0, 100.0);
        let clip = Rect::new(Vec2::new(-10.0, 90.0), Vec2::new(30.0, 30.0));
        // Left edge clamps to 0, bottom edge to the surface.
        assert_eq!(scissor_rect(Some(clip), vp, 1.0), Some((0, 90, 20, 10)));
    }

    #[test]
    fn empty_clip_yields_no_scissor() {
        let vp = Viewport::new(100.0, 100.0);
        let clip = Rect::new(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(scissor_rect(Some(clip), vp, 1.0), None);
    }

    #[test]
    fn solid_fill_has_a_degenerate_gradient_axis() {
        let data = paint_data(&Paint::Solid(Color::from_straight(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(data.fill0, data.fill1);
        assert_eq!([data.axis[0], data.axis[1]], [data.axis[2], data.axis[3]]);
    }
}
