use spindle_engine::transform::Transform;

/// Which shape a panel binding edits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeId {
    Pivot,
    Face,
}

/// One scalar transform field, addressable by the panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Field {
    TranslationX,
    TranslationY,
    RotationZ,
    ScaleX,
    ScaleY,
}

impl Field {
    pub fn get(self, t: &Transform) -> f32 {
        match self {
            Field::TranslationX => t.translation.x,
            Field::TranslationY => t.translation.y,
            Field::RotationZ => t.rotation.z,
            Field::ScaleX => t.scale.x,
            Field::ScaleY => t.scale.y,
        }
    }

    pub fn set(self, t: &mut Transform, v: f32) {
        match self {
            Field::TranslationX => t.translation.x = v,
            Field::TranslationY => t.translation.y = v,
            Field::RotationZ => t.rotation.z = v,
            Field::ScaleX => t.scale.x = v,
            Field::ScaleY => t.scale.y = v,
        }
    }
}

/// The live transform state read by every frame and mutated by the panel.
///
/// Explicit state passed by reference into panel update and draw; nothing
/// here is global.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneState {
    pub pivot: Transform,
    pub face: Transform,
}

impl SceneState {
    /// Both shapes start coincident at the canvas center.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            pivot: Transform::at(width / 2.0, height / 2.0),
            face: Transform::at(width / 2.0, height / 2.0),
        }
    }

    pub fn transform(&self, id: ShapeId) -> &Transform {
        match id {
            ShapeId::Pivot => &self.pivot,
            ShapeId::Face => &self.face,
        }
    }

    pub fn transform_mut(&mut self, id: ShapeId) -> &mut Transform {
        match id {
            ShapeId::Pivot => &mut self.pivot,
            ShapeId::Face => &mut self.face,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_scene_puts_both_shapes_on_the_midpoint() {
        let s = SceneState::centered(1100.0, 500.0);
        assert_eq!(s.pivot.translation.x, 550.0);
        assert_eq!(s.face.translation.y, 250.0);
        assert_eq!(s.pivot, s.face);
    }

    #[test]
    fn fields_round_trip_through_accessors() {
        let mut t = Transform::at(0.0, 0.0);
        for (field, v) in [
            (Field::TranslationX, 10.0),
            (Field::TranslationY, 20.0),
            (Field::RotationZ, 1.5),
            (Field::ScaleX, -2.0),
            (Field::ScaleY, 3.0),
        ] {
            field.set(&mut t, v);
            assert_eq!(field.get(&t), v);
        }
    }
}
