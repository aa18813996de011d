use core::ops::Mul;

use crate::coords::Vec2;

/// 3×3 homogeneous transform matrix mapping local shape space to pixel space.
///
/// Storage is column-major: `e[col * 3 + row]`. Points are treated as column
/// vectors, so `(a * b).transform_point(p) == a.transform_point(b.transform_point(p))`
/// — the right-hand factor applies first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    e: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        e: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `t`.
    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Mat3 {
            e: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                t.x, t.y, 1.0,
            ],
        }
    }

    /// Counter-clockwise rotation by `radians`, standard sine/cosine form.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Mat3 {
            e: [
                cos, sin, 0.0, //
                -sin, cos, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Non-uniform scale by `s`. Negative components mirror the axis.
    #[inline]
    pub const fn scale(s: Vec2) -> Self {
        Mat3 {
            e: [
                s.x, 0.0, 0.0, //
                0.0, s.y, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f32 {
        self.e[col * 3 + row]
    }

    /// Applies the map to a point (`w = 1`).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2),
            self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2),
        )
    }

    /// Columns padded to 16 bytes, the std140-style layout WGSL expects for a
    /// `mat3x3<f32>` uniform.
    #[inline]
    pub fn to_uniform_columns(&self) -> [[f32; 4]; 3] {
        [
            [self.e[0], self.e[1], self.e[2], 0.0],
            [self.e[3], self.e[4], self.e[5], 0.0],
            [self.e[6], self.e[7], self.e[8], 0.0],
        ]
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    /// Standard matrix product. Not commutative: the product applies `rhs`
    /// first, then `self`.
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut e = [0.0f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                e[col * 3 + row] = sum;
            }
        }
        Mat3 { e }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec2_near(a: Vec2, b: Vec2) {
        const EPS: f32 = 1e-4;
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    fn assert_mat3_near(a: Mat3, b: Mat3) {
        const EPS: f32 = 1e-5;
        for (x, y) in a.e.iter().zip(b.e.iter()) {
            assert!((x - y).abs() < EPS, "{a:?} != {b:?}");
        }
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn rotation_by_zero_is_identity() {
        assert_eq!(Mat3::rotation(0.0), Mat3::IDENTITY);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // +x rotated by 90° lands on +y.
        let p = Mat3::rotation(FRAC_PI_2).transform_point(Vec2::new(1.0, 0.0));
        assert_vec2_near(p, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn translation_moves_the_origin() {
        let m = Mat3::translation(Vec2::new(3.0, -2.0));
        assert_eq!(m.transform_point(Vec2::zero()), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn scale_is_per_axis() {
        let m = Mat3::scale(Vec2::new(2.0, -1.0));
        assert_eq!(m.transform_point(Vec2::new(3.0, 4.0)), Vec2::new(6.0, -4.0));
    }

    // ── multiplication ────────────────────────────────────────────────────

    #[test]
    fn identity_is_a_two_sided_unit() {
        let m = Mat3::translation(Vec2::new(5.0, 7.0)) * Mat3::rotation(0.3);
        assert_mat3_near(Mat3::IDENTITY * m, m);
        assert_mat3_near(m * Mat3::IDENTITY, m);
    }

    #[test]
    fn product_applies_right_factor_first() {
        let t = Mat3::translation(Vec2::new(10.0, 0.0));
        let r = Mat3::rotation(PI);

        // r * t: translate first, then rotate — the offset is spun around.
        let p = (r * t).transform_point(Vec2::zero());
        assert_vec2_near(p, Vec2::new(-10.0, 0.0));

        // t * r: rotate first (no-op on the origin), then translate.
        let q = (t * r).transform_point(Vec2::zero());
        assert_vec2_near(q, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn rotations_compose_additively() {
        let a = Mat3::rotation(0.4) * Mat3::rotation(0.6);
        assert_mat3_near(a, Mat3::rotation(1.0));
    }

    #[test]
    fn product_matches_sequential_application() {
        let m = Mat3::translation(Vec2::new(1.0, 2.0)) * Mat3::scale(Vec2::new(2.0, 3.0));
        let p = Vec2::new(-4.0, 5.0);
        let expected = Mat3::translation(Vec2::new(1.0, 2.0))
            .transform_point(Mat3::scale(Vec2::new(2.0, 3.0)).transform_point(p));
        assert_vec2_near(m.transform_point(p), expected);
    }

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn uniform_columns_carry_translation_in_third_column() {
        let cols = Mat3::translation(Vec2::new(9.0, 8.0)).to_uniform_columns();
        assert_eq!(cols[2], [9.0, 8.0, 1.0, 0.0]);
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cols[1], [0.0, 1.0, 0.0, 0.0]);
    }
}
