use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::spoke;
use crate::scene::{DrawCmd, DrawList};

use super::pass::{draw_clip_batches, paint_data, PassDesc, QuadPass};

const SPOKE_PASS: PassDesc = PassDesc {
    label: "widdershins spoke",
    shader_src: include_str!("shaders/spoke.wgsl"),
    instance_layout: SpokeInstance::LAYOUT,
    resources: &[],
};

/// Renderer for `DrawCmd::Spoke`.
///
/// Each spoke becomes one instanced quad oriented along its direction
/// vector; the fragment shader evaluates an anti-aliased capsule SDF in the
/// spoke's own (along, across) frame. The face angle is resolved to a unit
/// vector here on the CPU, so the shader never sees degrees.
///
/// Supported paints match the circle renderer: solid colors and two-stop
/// linear gradients.
#[derive(Default)]
pub struct SpokeRenderer {
    pass: QuadPass,
}

impl SpokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let mut instances: Vec<SpokeInstance> = Vec::new();
        let mut clips: Vec<Option<Rect>> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Spoke(cmd) = &item.cmd else { continue };

            // inner == outer is a legal degenerate spoke (a dot).
            if cmd.width <= 0.0 || cmd.outer < cmd.inner {
                continue;
            }

            let paint = paint_data(&cmd.paint);
            let dir = spoke::direction(cmd.angle_deg);

            instances.push(SpokeInstance {
                pivot: [cmd.pivot.x, cmd.pivot.y],
                dir: [dir.x, dir.y],
                span: [cmd.inner, cmd.outer, cmd.width / 2.0],
                fill0: paint.fill0,
                fill1: paint.fill1,
                axis: paint.axis,
            });
            clips.push(item.clip);
        }

        if instances.is_empty() {
            return;
        }

        self.pass.prepare(ctx, &SPOKE_PASS);
        if self.pass.needs_bindings() {
            self.pass.rebind(ctx, &SPOKE_PASS, &[]);
        }
        self.pass.write_viewport(ctx);
        self.pass.upload_instances(ctx, &SPOKE_PASS, &instances);

        // The sixty dial ticks all share `None` for a clip, so the dial is a
        // single draw call; the clipped reflection band gets its own.
        self.pass.draw(target, &SPOKE_PASS, |rpass| {
            draw_clip_batches(rpass, &clips, ctx.viewport, ctx.scale_factor);
        });
    }
}

/// One capsule, 76 bytes. `dir` is the unit vector toward the outer end;
/// `span` packs inner reach, outer reach, and half width; the gradient axis
/// rides as a single vec4, start in `xy` and end in `zw`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SpokeInstance {
    pivot: [f32; 2], // loc 1
    dir: [f32; 2],   // loc 2
    span: [f32; 3],  // loc 3
    fill0: [f32; 4], // loc 4
    fill1: [f32; 4], // loc 5
    axis: [f32; 4],  // loc 6
}

impl SpokeInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x3,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4
    ];

    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpokeInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &Self::ATTRS,
    };
}
