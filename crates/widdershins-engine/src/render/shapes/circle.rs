use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::pass::{draw_clip_batches, paint_data, PassDesc, QuadPass};

const CIRCLE_PASS: PassDesc = PassDesc {
    label: "widdershins circle",
    shader_src: include_str!("shaders/circle.wgsl"),
    instance_layout: CircleInstance::LAYOUT,
    resources: &[],
};

/// Renderer for `DrawCmd::Circle`.
///
/// Instanced: every circle in the frame goes into one vertex buffer and the
/// fragment shader evaluates an anti-aliased disc per instance. Supported
/// paints are solid colors and two-stop linear gradients; borders render as
/// a ring inset from the outer edge.
#[derive(Default)]
pub struct CircleRenderer {
    pass: QuadPass,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let mut instances: Vec<CircleInstance> = Vec::new();
        let mut clips: Vec<Option<Rect>> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Circle(cmd) = &item.cmd else { continue };

            if cmd.radius <= 0.0 {
                continue;
            }

            let paint = paint_data(&cmd.paint);
            let (border_width, border_color) = cmd
                .border
                .as_ref()
                .map_or((0.0, [0.0; 4]), |b| (b.width.max(0.0), b.color.to_array()));

            instances.push(CircleInstance {
                center: [cmd.center.x, cmd.center.y],
                disc: [cmd.radius, border_width],
                fill0: paint.fill0,
                fill1: paint.fill1,
                axis: paint.axis,
                border_color,
            });
            clips.push(item.clip);
        }

        if instances.is_empty() {
            return;
        }

        self.pass.prepare(ctx, &CIRCLE_PASS);
        if self.pass.needs_bindings() {
            self.pass.rebind(ctx, &CIRCLE_PASS, &[]);
        }
        self.pass.write_viewport(ctx);
        self.pass.upload_instances(ctx, &CIRCLE_PASS, &instances);

        self.pass.draw(target, &CIRCLE_PASS, |rpass| {
            draw_clip_batches(rpass, &clips, ctx.viewport, ctx.scale_factor);
        });
    }
}

/// One disc, 80 bytes. `disc` packs radius (x) and border width (y); the
/// gradient axis rides as a single vec4, start in `xy` and end in `zw`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],       // loc 1
    disc: [f32; 2],         // loc 2
    fill0: [f32; 4],        // loc 3
    fill1: [f32; 4],        // loc 4
    axis: [f32; 4],         // loc 5
    border_color: [f32; 4], // loc 6
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CircleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &Self::ATTRS,
    };
}
