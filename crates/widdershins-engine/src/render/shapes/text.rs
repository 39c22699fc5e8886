use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::Fonts;

use super::pass::{PassDesc, QuadPass};

const ATLAS_SIZE: u32 = 2048;
const PAD: u32 = 1; // pixels between glyphs

const TEXT_PASS: PassDesc = PassDesc {
    label: "widdershins text",
    shader_src: include_str!("shaders/text.wgsl"),
    instance_layout: GlyphInstance::LAYOUT,
    resources: &[
        wgpu::BindGroupLayoutEntry {
            binding: 1,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: 2,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ],
};

/// Where one rasterized glyph landed in the atlas, as a UV rect
/// (`xy` = min corner, `zw` = max corner).
#[derive(Debug, Copy, Clone)]
struct AtlasSlot {
    uv: [f32; 4],
}

/// Row-packed R8Unorm coverage atlas.
///
/// Glyphs are appended left to right; when one no longer fits on the
/// current row a new row opens below. Nothing is ever evicted: the clock
/// sets a couple dozen distinct glyphs, so a 2048 x 2048 page never fills
/// in practice. If it somehow does, further glyphs are skipped with a
/// warning rather than corrupting earlier entries.
struct CoverageAtlas {
    texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    generation: u64,
    full: bool,
}

impl CoverageAtlas {
    fn new() -> Self {
        Self {
            texture: None,
            view: None,
            cursor_x: PAD,
            cursor_y: PAD,
            row_height: 0,
            generation: 0,
            full: false,
        }
    }

    fn ensure(&mut self, ctx: &RenderCtx<'_>) {
        if self.texture.is_some() {
            return;
        }
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("widdershins text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.texture = Some(texture);
        self.generation += 1;
        self.cursor_x = PAD;
        self.cursor_y = PAD;
        self.row_height = 0;
        self.full = false;
    }

    /// Uploads a glyph bitmap into the next free slot.
    fn place(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<AtlasSlot> {
        if self.full {
            return None;
        }
        let texture = self.texture.as_ref()?;

        if self.cursor_x + w + PAD > ATLAS_SIZE {
            self.cursor_y += self.row_height + PAD;
            self.cursor_x = PAD;
            self.row_height = 0;
        }
        if self.cursor_y + h + PAD > ATLAS_SIZE {
            log::warn!("glyph atlas full ({ATLAS_SIZE}x{ATLAS_SIZE}); further glyphs are skipped");
            self.full = true;
            return None;
        }

        let (gx, gy) = (self.cursor_x, self.cursor_y);
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );

        self.cursor_x += w + PAD;
        self.row_height = self.row_height.max(h);

        let px = 1.0 / ATLAS_SIZE as f32;
        Some(AtlasSlot {
            uv: [
                gx as f32 * px,
                gy as f32 * px,
                (gx + w) as f32 * px,
                (gy + h) as f32 * px,
            ],
        })
    }
}

/// Renderer for `DrawCmd::Text`.
///
/// Each glyph becomes one instanced quad sampling the atlas, so a frame of
/// text is a single draw call. Glyphs are rasterized through fontdue on
/// first use and cached for the renderer's lifetime, keyed by
/// `GlyphRasterConfig` (font, glyph index, pixel size); the dial numerals
/// and the date line cost nothing after their first frame.
///
/// Text draws unclipped; clip rects on text items are ignored.
pub struct TextRenderer {
    pass: QuadPass,
    atlas: CoverageAtlas,
    sampler: Option<wgpu::Sampler>,
    /// Atlas generation the current bind group was built against.
    bound_generation: u64,

    slots: HashMap<GlyphRasterConfig, AtlasSlot>,

    // reused across commands to keep fontdue's buffers warm
    layout: Layout<()>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            pass: QuadPass::default(),
            atlas: CoverageAtlas::new(),
            sampler: None,
            bound_generation: u64::MAX,
            slots: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    /// Renders every `DrawCmd::Text` entry in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &Fonts,
    ) {
        self.atlas.ensure(ctx);

        let mut instances: Vec<GlyphInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };

            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("text renderer: unknown {:?}, skipping", cmd.font);
                continue;
            };
            let tint = cmd.color.to_array();

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x,
                y: cmd.origin.y,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

            for g in self.layout.glyphs() {
                if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                    continue;
                }
                if !self.slots.contains_key(&g.key) {
                    let (metrics, bitmap) = font.rasterize_config(g.key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    let Some(slot) = self.atlas.place(
                        ctx,
                        &bitmap,
                        metrics.width as u32,
                        metrics.height as u32,
                    ) else {
                        continue;
                    };
                    self.slots.insert(g.key, slot);
                }
                let Some(slot) = self.slots.get(&g.key).copied() else { continue };

                instances.push(GlyphInstance {
                    rect: [g.x, g.y, g.x + g.width as f32, g.y + g.height as f32],
                    uv: slot.uv,
                    tint,
                });
            }
        }

        if instances.is_empty() {
            return;
        }

        self.pass.prepare(ctx, &TEXT_PASS);

        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("widdershins text sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            }));
        }

        if self.pass.needs_bindings() || self.bound_generation != self.atlas.generation {
            let Some(view) = self.atlas.view.as_ref() else { return };
            let Some(sampler) = self.sampler.as_ref() else { return };
            self.pass.rebind(
                ctx,
                &TEXT_PASS,
                &[
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            );
            self.bound_generation = self.atlas.generation;
        }

        self.pass.write_viewport(ctx);
        self.pass.upload_instances(ctx, &TEXT_PASS, &instances);

        self.pass.draw(target, &TEXT_PASS, |rpass| {
            rpass.draw(0..4, 0..instances.len() as u32);
        });
    }
}

/// One glyph quad, 48 bytes. `rect` is the destination in logical pixels
/// and `uv` the atlas sample region, both as min `xy` / max `zw` corner
/// pairs; `tint` is the premultiplied text color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    rect: [f32; 4], // loc 1
    uv: [f32; 4],   // loc 2
    tint: [f32; 4], // loc 3
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4
    ];

    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<GlyphInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &Self::ATTRS,
    };
}
