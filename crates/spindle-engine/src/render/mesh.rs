use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};
use crate::shape::Mesh;
use crate::transform::Mat3;

/// Renderer for uploaded triangle meshes.
///
/// The vertex shader multiplies local positions by a per-mesh `mat3x3`
/// transform, converts pixel space to NDC using the viewport, flips Y so the
/// origin sits top-left, and rasterizes with per-vertex interpolated color.
///
/// Meshes are uploaded once via [`upload`] and drawn every frame; only the
/// small transform uniform is rewritten per draw.
///
/// [`upload`]: MeshRenderer::upload
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
}

/// GPU residency for one [`Mesh`]: static vertex/index buffers plus the
/// per-mesh transform uniform and its bind group.
pub struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// One draw request: an uploaded mesh and its composed transform.
pub struct MeshDraw<'m> {
    pub mesh: &'m GpuMesh,
    pub transform: Mat3,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads a mesh once. The returned [`GpuMesh`] stays valid for the
    /// device's lifetime and is drawn by passing it to [`render`].
    ///
    /// [`render`]: MeshRenderer::render
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh) -> GpuMesh {
        self.ensure_pipeline(ctx);

        debug_assert_eq!(mesh.positions.len(), mesh.colors.len());

        let vertices: Vec<MeshVertex> = mesh
            .positions
            .iter()
            .zip(mesh.colors.iter())
            .map(|(p, c)| MeshVertex {
                pos: [p.x, p.y],
                color: c.to_array(),
            })
            .collect();

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spindle mesh vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spindle mesh ibo"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("spindle mesh ubo"),
            size: std::mem::size_of::<MeshUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // ensure_pipeline ran above, so the layout exists.
        let bgl = self
            .bind_group_layout
            .as_ref()
            .expect("pipeline initialized by ensure_pipeline");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spindle mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        GpuMesh {
            vbo,
            ibo,
            index_count: (mesh.indices.len() * 3) as u32,
            ubo,
            bind_group,
        }
    }

    /// Draws the given meshes with their transforms, in order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draws: &[MeshDraw<'_>],
    ) {
        if draws.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        for draw in draws {
            ctx.queue.write_buffer(
                &draw.mesh.ubo,
                0,
                bytemuck::bytes_of(&MeshUniform::new(draw.transform, ctx.viewport)),
            );
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("spindle mesh pass"),
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

        for draw in draws {
            rpass.set_bind_group(0, &draw.mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, draw.mesh.vbo.slice(..));
            rpass.set_index_buffer(draw.mesh.ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..draw.mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spindle mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("spindle mesh bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(MeshUniform::min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("spindle mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spindle mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Negative scale flips winding; the demo allows mirroring,
                // so both faces stay visible.
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uniform layout (64 bytes): a WGSL `mat3x3<f32>` (three 16-byte columns)
/// followed by the viewport and tail padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    matrix: [[f32; 4]; 3],
    viewport: [f32; 2],
    _pad: [f32; 2],
}

impl MeshUniform {
    fn new(transform: Mat3, viewport: Viewport) -> Self {
        Self {
            matrix: transform.to_uniform_columns(),
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }

    fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<MeshUniform>() as u64)
            .expect("MeshUniform has non-zero size by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn uniform_is_sixteen_byte_aligned() {
        assert_eq!(std::mem::size_of::<MeshUniform>(), 64);
        assert_eq!(std::mem::size_of::<MeshUniform>() % 16, 0);
    }

    #[test]
    fn uniform_packs_translation_and_viewport() {
        let u = MeshUniform::new(
            Mat3::translation(Vec2::new(550.0, 250.0)),
            Viewport::new(1100.0, 500.0),
        );
        assert_eq!(u.matrix[2][0], 550.0);
        assert_eq!(u.matrix[2][1], 250.0);
        assert_eq!(u.viewport, [1100.0, 500.0]);
    }

    #[test]
    fn vertex_stride_matches_attribute_layout() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    }
}
