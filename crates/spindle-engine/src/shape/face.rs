use crate::coords::{ColorRgba, Vec2};

use super::{fan, Mesh};

const FACE_SIDES: u32 = 18;
const SKIN: ColorRgba = ColorRgba::opaque(0.5, 0.3, 0.2);

/// Builds the face mesh: an 18-sided fan at the origin recolored to a skin
/// tone, plus two eye triangles and a mouth triangle in black.
///
/// The eyes and mouth are decorative overlays — standalone triangles appended
/// to the same vertex/index buffers, sharing no vertices with the fan. All
/// feature geometry is proportional to `radius`.
pub fn face(radius: f32) -> Mesh {
    let mut mesh = fan(FACE_SIDES, Vec2::zero(), radius, SKIN);

    // The fan paints its center white; the whole base disc is skin.
    for color in &mut mesh.colors {
        *color = SKIN;
    }

    let eye_offset_x = radius / 3.0;
    let eye_offset_y = radius / 4.0;
    let eye_size = radius / 10.0;

    for side in [-1.0, 1.0] {
        let cx = side * eye_offset_x;
        let cy = -eye_offset_y;
        mesh.push_triangle(
            Vec2::new(cx - eye_size, cy + eye_size),
            Vec2::new(cx + eye_size, cy + eye_size),
            Vec2::new(cx, cy - eye_size),
            ColorRgba::black(),
        );
    }

    let mouth_offset_y = radius * 0.35;
    let mouth_width = radius * 0.60;
    let mouth_height = radius * 0.12;

    mesh.push_triangle(
        Vec2::new(-mouth_width / 2.0, mouth_offset_y),
        Vec2::new(mouth_width / 2.0, mouth_offset_y),
        Vec2::new(0.0, mouth_offset_y + mouth_height),
        ColorRgba::black(),
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_vertex_and_triangle_counts() {
        let m = face(50.0);
        // 19 fan vertices + 3 per eye + 3 for the mouth.
        assert_eq!(m.vertex_count(), 28);
        // 18 fan triangles + 2 eyes + 1 mouth.
        assert_eq!(m.triangle_count(), 21);
    }

    #[test]
    fn fan_vertices_are_skin_toned() {
        let m = face(50.0);
        assert!(m.colors[..19].iter().all(|&c| c == SKIN));
    }

    #[test]
    fn feature_vertices_are_black() {
        let m = face(50.0);
        assert!(m.colors[19..].iter().all(|&c| c == ColorRgba::black()));
    }

    #[test]
    fn feature_triangles_do_not_touch_the_fan() {
        let m = face(50.0);
        for tri in &m.indices[18..] {
            assert!(tri.iter().all(|&i| i >= 19));
        }
    }

    #[test]
    fn eyes_sit_symmetrically_above_center() {
        let m = face(50.0);
        // Eye tips (third vertex of each eye triangle).
        let left_tip = m.positions[21];
        let right_tip = m.positions[24];
        assert_eq!(left_tip, Vec2::new(-50.0 / 3.0, -50.0 / 4.0 - 5.0));
        assert_eq!(right_tip, Vec2::new(50.0 / 3.0, -50.0 / 4.0 - 5.0));
    }

    #[test]
    fn mouth_geometry_is_proportional_to_radius() {
        let r = 50.0;
        let m = face(r);
        let left = m.positions[25];
        let right = m.positions[26];
        let tip = m.positions[27];
        assert_eq!(right.x - left.x, r * 0.60);
        assert_eq!(left.y, r * 0.35);
        assert_eq!(tip, Vec2::new(0.0, r * 0.35 + r * 0.12));
    }
}
