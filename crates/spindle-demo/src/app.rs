use spindle_engine::core::{App, AppControl, FrameCtx};
use spindle_engine::coords::{ColorRgba, Vec2, Viewport};
use spindle_engine::render::{GpuMesh, MeshDraw, MeshRenderer, Quad, QuadRenderer};
use spindle_engine::shape::{self, Mesh};

use crate::panel::Panel;
use crate::scene::SceneState;

const PIVOT_SIDES: u32 = 6;
const PIVOT_RADIUS: f32 = 25.0;
const FACE_RADIUS: f32 = 50.0;

const CLEAR: ColorRgba = ColorRgba::opaque(0.02, 0.02, 0.04);

/// The demo application: a pivot hexagon, a face orbiting it, and the panel.
pub struct DemoApp {
    scene: SceneState,
    panel: Panel,

    mesh_renderer: MeshRenderer,
    quad_renderer: QuadRenderer,

    // CPU meshes built once at startup; GPU residency created on first frame
    // (the device exists only once the window is up) and reused forever.
    pivot_mesh: Mesh,
    face_mesh: Mesh,
    pivot_gpu: Option<GpuMesh>,
    face_gpu: Option<GpuMesh>,

    panel_quads: Vec<Quad>,
}

impl DemoApp {
    pub fn new(canvas: Viewport) -> Self {
        let mut rng = rand::rng();

        Self {
            scene: SceneState::centered(canvas.width, canvas.height),
            panel: Panel::for_scene(canvas),
            mesh_renderer: MeshRenderer::new(),
            quad_renderer: QuadRenderer::new(),
            pivot_mesh: shape::fan_random(PIVOT_SIDES, Vec2::zero(), PIVOT_RADIUS, &mut rng),
            face_mesh: shape::face(FACE_RADIUS),
            pivot_gpu: None,
            face_gpu: None,
            panel_quads: Vec::new(),
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Panel edits land in the scene before this frame's matrices are built.
        self.panel.handle_input(ctx.input, &mut self.scene);

        let pivot_matrix = self.scene.pivot.matrix(None);
        let face_matrix = self.scene.face.matrix(Some(&self.scene.pivot));

        self.panel_quads.clear();
        self.panel.draw(&self.scene, &mut self.panel_quads);

        let Self {
            mesh_renderer,
            quad_renderer,
            pivot_mesh,
            face_mesh,
            pivot_gpu,
            face_gpu,
            panel_quads,
            ..
        } = self;

        ctx.render(CLEAR, |rctx, target| {
            let pivot = &*pivot_gpu.get_or_insert_with(|| mesh_renderer.upload(rctx, pivot_mesh));
            let face = &*face_gpu.get_or_insert_with(|| mesh_renderer.upload(rctx, face_mesh));

            mesh_renderer.render(
                rctx,
                target,
                &[
                    MeshDraw {
                        mesh: pivot,
                        transform: pivot_matrix,
                    },
                    MeshDraw {
                        mesh: face,
                        transform: face_matrix,
                    },
                ],
            );

            quad_renderer.render(rctx, target, panel_quads);
        })
    }
}
