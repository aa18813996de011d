use crate::coords::{ColorRgba, Vec2};

/// Indexed triangle mesh with per-vertex color, positions in local pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec2>,
    pub colors: Vec<ColorRgba>,
    pub indices: Vec<[u32; 3]>,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends one standalone triangle with a single color on all three vertices.
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: ColorRgba) {
        let base = self.positions.len() as u32;
        self.positions.extend([a, b, c]);
        self.colors.extend([color; 3]);
        self.indices.push([base, base + 1, base + 2]);
    }
}
