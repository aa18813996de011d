use std::f32::consts::TAU;

use spindle_engine::coords::{ColorRgba, Rect, Vec2, Viewport};
use spindle_engine::input::PointerInput;
use spindle_engine::render::Quad;

use crate::scene::{Field, SceneState, ShapeId};

const ROW_PITCH: f32 = 24.0;
const SLIDER_WIDTH: f32 = 180.0;
const TRACK_HEIGHT: f32 = 4.0;
const THUMB_SIZE: Vec2 = Vec2::new(6.0, 14.0);
const MARGIN: f32 = 12.0;

const PANEL_BG: ColorRgba = ColorRgba::new(0.08, 0.09, 0.12, 0.85);
const TRACK: ColorRgba = ColorRgba::opaque(0.18, 0.2, 0.26);
const PIVOT_FILL: ColorRgba = ColorRgba::opaque(0.25, 0.65, 0.6);
const FACE_FILL: ColorRgba = ColorRgba::opaque(0.85, 0.55, 0.25);
const THUMB: ColorRgba = ColorRgba::white();

/// One slider: a scalar transform field with a fixed numeric range.
#[derive(Debug, Copy, Clone)]
pub struct Binding {
    pub shape: ShapeId,
    pub field: Field,
    pub min: f32,
    pub max: f32,
}

impl Binding {
    pub fn new(shape: ShapeId, field: Field, min: f32, max: f32) -> Self {
        Self { shape, field, min, max }
    }
}

/// Live-edit slider panel bound to the scene's transform fields.
///
/// Drags write straight into the shared state the draw pass reads on the next
/// frame — no validation, no debouncing, no undo. Slider groups are
/// color-coded (pivot teal, face orange) in place of text labels.
pub struct Panel {
    bindings: Vec<Binding>,
    origin: Vec2,
    /// Index of the binding currently being dragged.
    active: Option<usize>,
}

impl Panel {
    pub fn new(origin: Vec2, bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            origin,
            active: None,
        }
    }

    /// The standard demo panel: pivot position/scale, face position/rotation/
    /// scale. Position ranges are bounded by the canvas size at construction.
    pub fn for_scene(canvas: Viewport) -> Self {
        let (w, h) = (canvas.width, canvas.height);
        Self::new(
            Vec2::new(16.0, 16.0),
            vec![
                Binding::new(ShapeId::Pivot, Field::TranslationX, 0.0, w),
                Binding::new(ShapeId::Pivot, Field::TranslationY, 0.0, h),
                Binding::new(ShapeId::Pivot, Field::ScaleX, -5.0, 5.0),
                Binding::new(ShapeId::Pivot, Field::ScaleY, -5.0, 5.0),
                Binding::new(ShapeId::Face, Field::TranslationX, 0.0, w),
                Binding::new(ShapeId::Face, Field::TranslationY, 0.0, h),
                Binding::new(ShapeId::Face, Field::RotationZ, 0.0, TAU),
                Binding::new(ShapeId::Face, Field::ScaleX, -5.0, 5.0),
                Binding::new(ShapeId::Face, Field::ScaleY, -5.0, 5.0),
            ],
        )
    }

    /// Applies this frame's pointer input, mutating the bound fields in place.
    ///
    /// A press inside a slider row starts a drag; the drag keeps tracking the
    /// cursor's horizontal position until release, even outside the row.
    pub fn handle_input(&mut self, input: &PointerInput, scene: &mut SceneState) {
        if input.pressed {
            if let Some(pos) = input.pos {
                self.active = (0..self.bindings.len()).find(|&i| self.row_rect(i).contains(pos));
            }
        }

        if let (Some(i), Some(pos)) = (self.active, input.pos) {
            if input.down || input.released {
                let binding = self.bindings[i];
                let value = self.value_at(i, pos.x);
                binding.field.set(scene.transform_mut(binding.shape), value);
            }
        }

        if input.released || !input.down {
            self.active = None;
        }
    }

    /// Emits the panel's quads (background, then track/fill/thumb per row).
    pub fn draw(&self, scene: &SceneState, out: &mut Vec<Quad>) {
        out.push(Quad::new(self.background_rect(), PANEL_BG));

        for (i, binding) in self.bindings.iter().enumerate() {
            let row = self.row_rect(i);
            let cy = row.center().y;

            let track = Rect::new(row.origin.x, cy - TRACK_HEIGHT / 2.0, row.size.x, TRACK_HEIGHT);
            out.push(Quad::new(track, TRACK));

            let value = binding.field.get(scene.transform(binding.shape));
            let t = self.normalized(i, value);
            let thumb_cx = row.origin.x + t * row.size.x;

            let fill_w = thumb_cx - row.origin.x;
            if fill_w > 0.0 {
                let fill = Rect::new(track.origin.x, track.origin.y, fill_w, track.size.y);
                let color = match binding.shape {
                    ShapeId::Pivot => PIVOT_FILL,
                    ShapeId::Face => FACE_FILL,
                };
                out.push(Quad::new(fill, color));
            }

            let thumb = Rect::new(
                thumb_cx - THUMB_SIZE.x / 2.0,
                cy - THUMB_SIZE.y / 2.0,
                THUMB_SIZE.x,
                THUMB_SIZE.y,
            );
            out.push(Quad::new(thumb, THUMB));
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    // ── geometry / mapping ─────────────────────────────────────────────────

    fn row_rect(&self, i: usize) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y + i as f32 * ROW_PITCH,
            SLIDER_WIDTH,
            ROW_PITCH - 4.0,
        )
    }

    fn background_rect(&self) -> Rect {
        Rect::new(
            self.origin.x - MARGIN,
            self.origin.y - MARGIN,
            SLIDER_WIDTH + MARGIN * 2.0,
            self.bindings.len() as f32 * ROW_PITCH + MARGIN * 2.0 - 4.0,
        )
    }

    /// Value for binding `i` at horizontal cursor position `x`, clamped to
    /// the binding's range.
    fn value_at(&self, i: usize, x: f32) -> f32 {
        let row = self.row_rect(i);
        let b = self.bindings[i];
        let t = ((x - row.origin.x) / row.size.x).clamp(0.0, 1.0);
        b.min + t * (b.max - b.min)
    }

    /// Normalized position of `value` within binding `i`'s range, in [0, 1].
    fn normalized(&self, i: usize, value: f32) -> f32 {
        let b = self.bindings[i];
        if (b.max - b.min).abs() < f32::EPSILON {
            0.0
        } else {
            ((value - b.min) / (b.max - b.min)).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel {
        Panel::for_scene(Viewport::new(1100.0, 500.0))
    }

    fn press_at(pos: Vec2) -> PointerInput {
        PointerInput {
            pos: Some(pos),
            down: true,
            pressed: true,
            released: false,
        }
    }

    #[test]
    fn standard_panel_matches_the_original_layout() {
        let p = panel();
        assert_eq!(p.bindings().len(), 9);

        // Position sliders are bounded by the canvas.
        assert_eq!(p.bindings()[0].max, 1100.0);
        assert_eq!(p.bindings()[5].max, 500.0);

        // Rotation covers a full turn, scale is symmetric.
        let rot = p.bindings()[6];
        assert_eq!(rot.field, Field::RotationZ);
        assert_eq!((rot.min, rot.max), (0.0, TAU));
        assert_eq!((p.bindings()[2].min, p.bindings()[2].max), (-5.0, 5.0));
    }

    #[test]
    fn value_mapping_covers_the_range() {
        let p = panel();
        let row = p.row_rect(2); // pivot scale x, [-5, 5]
        assert_eq!(p.value_at(2, row.origin.x), -5.0);
        assert_eq!(p.value_at(2, row.origin.x + row.size.x), 5.0);
        assert_eq!(p.value_at(2, row.origin.x + row.size.x / 2.0), 0.0);
    }

    #[test]
    fn value_mapping_clamps_outside_the_track() {
        let p = panel();
        let row = p.row_rect(2);
        assert_eq!(p.value_at(2, row.origin.x - 100.0), -5.0);
        assert_eq!(p.value_at(2, row.origin.x + row.size.x + 100.0), 5.0);
    }

    #[test]
    fn press_on_a_row_writes_the_bound_field() {
        let mut p = panel();
        let mut scene = SceneState::centered(1100.0, 500.0);

        // Press at the far right of row 6 (face rotation): value = 2π.
        let row = p.row_rect(6);
        let pos = Vec2::new(row.origin.x + row.size.x - 0.5, row.center().y);
        p.handle_input(&press_at(pos), &mut scene);

        assert!(scene.face.rotation.z > 0.99 * TAU);
        // Pivot untouched.
        assert_eq!(scene.pivot.rotation.z, 0.0);
    }

    #[test]
    fn drag_keeps_tracking_outside_the_row_until_release() {
        let mut p = panel();
        let mut scene = SceneState::centered(1100.0, 500.0);

        let row = p.row_rect(0); // pivot translation x
        p.handle_input(&press_at(Vec2::new(row.center().x, row.center().y)), &mut scene);

        // Cursor wanders far below the row mid-drag; the slider still follows x.
        let drag = PointerInput {
            pos: Some(Vec2::new(row.origin.x, row.center().y + 300.0)),
            down: true,
            pressed: false,
            released: false,
        };
        p.handle_input(&drag, &mut scene);
        assert_eq!(scene.pivot.translation.x, 0.0);

        // Release ends the drag; later motion changes nothing.
        let release = PointerInput {
            pos: Some(Vec2::new(row.origin.x + row.size.x, row.center().y)),
            down: false,
            pressed: false,
            released: true,
        };
        p.handle_input(&release, &mut scene);
        let settled = scene.pivot.translation.x;

        let hover = PointerInput {
            pos: Some(Vec2::new(row.center().x, row.center().y)),
            down: false,
            pressed: false,
            released: false,
        };
        p.handle_input(&hover, &mut scene);
        assert_eq!(scene.pivot.translation.x, settled);
    }

    #[test]
    fn press_outside_every_row_is_inert() {
        let mut p = panel();
        let mut scene = SceneState::centered(1100.0, 500.0);
        let before = scene;

        p.handle_input(&press_at(Vec2::new(900.0, 400.0)), &mut scene);
        assert_eq!(scene, before);
    }

    #[test]
    fn draw_emits_background_and_per_row_quads() {
        let p = panel();
        let scene = SceneState::centered(1100.0, 500.0);
        let mut quads = Vec::new();
        p.draw(&scene, &mut quads);

        // 1 background + per row: track + thumb, plus a fill wherever the
        // value sits above its minimum.
        assert!(quads.len() >= 1 + 9 * 2);
        assert_eq!(quads[0].color, PANEL_BG);
    }
}
