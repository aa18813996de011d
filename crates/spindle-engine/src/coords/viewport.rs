/// Drawable surface size in logical pixels.
///
/// Renderers use this as the basis for converting pixel-space positions to
/// NDC in shaders, matching what the frame driver uploads each frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the viewport can be rendered to. A minimized window reports a
    /// zero size, which would divide by zero in the NDC conversion.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_finite_size_is_valid() {
        assert!(Viewport::new(1100.0, 500.0).is_valid());
    }

    #[test]
    fn zero_negative_or_non_finite_size_is_invalid() {
        assert!(!Viewport::new(0.0, 500.0).is_valid());
        assert!(!Viewport::new(1100.0, 0.0).is_valid());
        assert!(!Viewport::new(-800.0, 500.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 500.0).is_valid());
    }
}
