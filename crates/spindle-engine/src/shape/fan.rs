use std::f32::consts::TAU;

use rand::Rng;

use crate::coords::{ColorRgba, Vec2};

use super::Mesh;

/// Builds a closed fan triangulation of a disc.
///
/// One white center vertex plus `sides` perimeter vertices at equal angular
/// steps starting at angle 0, all perimeter vertices sharing `rim_color`.
/// Triangle `s` is `(0, s + 1, s + 2)` with the last wrapping back to vertex 1,
/// so the disc closes with no gaps or overlaps.
///
/// # Panics
/// Panics if `sides < 3`; a disc needs at least a triangle.
pub fn fan(sides: u32, center: Vec2, radius: f32, rim_color: ColorRgba) -> Mesh {
    assert!(sides >= 3, "fan requires at least 3 sides, got {sides}");

    let mut mesh = Mesh::default();
    mesh.positions.push(center);
    mesh.colors.push(ColorRgba::white());

    let angle_step = TAU / sides as f32;
    for s in 0..sides {
        let angle = angle_step * s as f32;
        mesh.positions.push(Vec2::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        ));
        mesh.colors.push(rim_color);

        let wrap = if s + 2 <= sides { s + 2 } else { 1 };
        mesh.indices.push([0, s + 1, wrap]);
    }

    mesh
}

/// [`fan`] with a random opaque rim color shared by the whole shape.
pub fn fan_random(sides: u32, center: Vec2, radius: f32, rng: &mut impl Rng) -> Mesh {
    let rim = ColorRgba::opaque(rng.random(), rng.random(), rng.random());
    fan(sides, center, radius, rim)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIM: ColorRgba = ColorRgba::opaque(0.2, 0.4, 0.6);

    #[test]
    fn hexagon_has_seven_vertices_and_six_triangles() {
        let m = fan(6, Vec2::zero(), 25.0, RIM);
        assert_eq!(m.vertex_count(), 7);
        assert_eq!(m.triangle_count(), 6);
    }

    #[test]
    fn last_triangle_wraps_to_vertex_one() {
        let m = fan(6, Vec2::zero(), 25.0, RIM);
        assert_eq!(m.indices[0], [0, 1, 2]);
        assert_eq!(m.indices[4], [0, 5, 6]);
        assert_eq!(m.indices[5], [0, 6, 1]);
    }

    #[test]
    fn every_triangle_starts_at_the_center() {
        let m = fan(9, Vec2::zero(), 10.0, RIM);
        for tri in &m.indices {
            assert_eq!(tri[0], 0);
        }
    }

    #[test]
    fn center_is_white_and_rim_shares_one_color() {
        let m = fan(5, Vec2::new(3.0, 4.0), 10.0, RIM);
        assert_eq!(m.colors[0], ColorRgba::white());
        assert!(m.colors[1..].iter().all(|&c| c == RIM));
    }

    #[test]
    fn perimeter_vertices_sit_on_the_radius() {
        let center = Vec2::new(100.0, 50.0);
        let m = fan(12, center, 25.0, RIM);
        for p in &m.positions[1..] {
            let d = *p - center;
            let len = (d.x * d.x + d.y * d.y).sqrt();
            assert!((len - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn first_perimeter_vertex_is_at_angle_zero() {
        let m = fan(8, Vec2::zero(), 25.0, RIM);
        assert_eq!(m.positions[1], Vec2::new(25.0, 0.0));
    }

    #[test]
    fn minimum_sides_is_a_triangle() {
        let m = fan(3, Vec2::zero(), 1.0, RIM);
        assert_eq!(m.triangle_count(), 3);
        assert_eq!(m.indices[2], [0, 3, 1]);
    }

    #[test]
    #[should_panic(expected = "at least 3 sides")]
    fn fewer_than_three_sides_is_a_precondition_violation() {
        let _ = fan(2, Vec2::zero(), 1.0, RIM);
    }

    #[test]
    fn random_rim_is_opaque_and_shared() {
        let mut rng = rand::rng();
        let m = fan_random(6, Vec2::zero(), 25.0, &mut rng);
        let rim = m.colors[1];
        assert_eq!(rim.a, 1.0);
        assert!(m.colors[1..].iter().all(|&c| c == rim));
    }
}
