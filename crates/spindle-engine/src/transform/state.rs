use crate::coords::Vec3;

use super::Mat3;

/// Live transform state for one shape.
///
/// Mutated in place by the parameter panel and read every frame by the draw
/// pass. Only `rotation.z` participates in the 2D matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Identity placed at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, 0.0),
            rotation: Vec3::zero(),
            scale: Vec3::splat(1.0),
        }
    }

    /// Composes the shape's matrix, optionally parented to a pivot.
    ///
    /// Right-to-left:
    ///
    /// ```text
    /// T = Translate(pivot) · Rotate(rotation.z) · Translate(translation − pivot) · Scale(scale)
    /// ```
    ///
    /// The translation is expressed relative to the pivot before the rotation
    /// is applied, then the pivot's absolute position is added back — so the
    /// rotation orbits the shape around the pivot. Without a pivot the
    /// relative translation is the absolute one and the final step is skipped.
    pub fn matrix(&self, pivot: Option<&Transform>) -> Mat3 {
        let rel = match pivot {
            Some(p) => self.translation.xy() - p.translation.xy(),
            None => self.translation.xy(),
        };

        let mut m = Mat3::scale(self.scale.xy());
        m = Mat3::translation(rel) * m;
        m = Mat3::rotation(self.rotation.z) * m;

        if let Some(p) = pivot {
            m = Mat3::translation(p.translation.xy()) * m;
        }

        m
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec2_near(a: Vec2, b: Vec2) {
        const EPS: f32 = 1e-3;
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    /// The shape's rendered center is wherever its matrix sends the local origin.
    fn center(t: &Transform, pivot: Option<&Transform>) -> Vec2 {
        t.matrix(pivot).transform_point(Vec2::zero())
    }

    #[test]
    fn without_pivot_translation_is_absolute() {
        let t = Transform::at(120.0, 80.0);
        assert_vec2_near(center(&t, None), Vec2::new(120.0, 80.0));
    }

    #[test]
    fn rotation_without_pivot_orbits_the_origin() {
        // No pivot means no translate-back step: the rotation applies after
        // the translation, so the center swings around the local origin.
        let mut t = Transform::at(120.0, 80.0);
        t.rotation.z = 1.234;

        let expected = Mat3::rotation(1.234).transform_point(Vec2::new(120.0, 80.0));
        assert_vec2_near(center(&t, None), expected);
    }

    #[test]
    fn coincident_shape_stays_on_the_pivot_under_rotation() {
        let pivot = Transform::at(100.0, 100.0);
        let mut face = Transform::at(100.0, 100.0);

        for angle in [0.0, 0.7, FRAC_PI_2, PI, 5.5] {
            face.rotation.z = angle;
            assert_vec2_near(center(&face, Some(&pivot)), Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn half_turn_mirrors_the_offset_through_the_pivot() {
        let pivot = Transform::at(100.0, 100.0);
        let mut face = Transform::at(150.0, 100.0); // offset (50, 0)
        face.rotation.z = PI;

        // 180° about the pivot: pivot position minus the original offset.
        assert_vec2_near(center(&face, Some(&pivot)), Vec2::new(50.0, 100.0));
    }

    #[test]
    fn quarter_turn_orbits_the_offset() {
        let pivot = Transform::at(100.0, 100.0);
        let mut face = Transform::at(150.0, 100.0);
        face.rotation.z = FRAC_PI_2;

        assert_vec2_near(center(&face, Some(&pivot)), Vec2::new(100.0, 150.0));
    }

    #[test]
    fn scale_applies_before_the_orbit() {
        let pivot = Transform::at(100.0, 100.0);
        let mut face = Transform::at(150.0, 100.0);
        face.scale = Vec3::new(3.0, 3.0, 1.0);
        face.rotation.z = PI;

        // Scale acts on local geometry only; the center still mirrors to (50, 100),
        // while a local point 10px right of center scales to 30px then mirrors.
        let m = face.matrix(Some(&pivot));
        assert_vec2_near(m.transform_point(Vec2::zero()), Vec2::new(50.0, 100.0));
        assert_vec2_near(m.transform_point(Vec2::new(10.0, 0.0)), Vec2::new(20.0, 100.0));
    }

    #[test]
    fn pivot_itself_uses_no_parent() {
        // The pivot exposes no rotation slider; with zero rotation its center
        // sits exactly at its translation regardless of scale.
        let mut pivot = Transform::at(300.0, 200.0);
        pivot.scale = Vec3::new(2.0, 2.0, 1.0);
        assert_vec2_near(center(&pivot, None), Vec2::new(300.0, 200.0));
    }
}
