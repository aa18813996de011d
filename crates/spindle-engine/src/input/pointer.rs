use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::Window;

use crate::coords::Vec2;

/// Pointer state for one window, in logical pixels.
///
/// Held state persists across frames; `pressed`/`released` are edges that
/// last exactly one frame and are cleared by [`end_frame`].
///
/// [`end_frame`]: PointerInput::end_frame
#[derive(Debug, Default)]
pub struct PointerInput {
    /// Pointer position; `None` while the cursor is outside the window.
    pub pos: Option<Vec2>,

    /// Primary button currently held.
    pub down: bool,

    /// Primary button went down this frame.
    pub pressed: bool,

    /// Primary button came up this frame.
    pub released: bool,
}

impl PointerInput {
    /// Folds a winit window event into the pointer state.
    ///
    /// Non-pointer events are ignored. Positions are converted to logical
    /// pixels using the window's scale factor.
    pub fn apply_event(&mut self, window: &Window, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let scale = window.scale_factor();
                let logical = position.to_logical::<f64>(scale);
                self.pos = Some(Vec2::new(logical.x as f32, logical.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.pos = None;
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    if !self.down {
                        self.pressed = true;
                    }
                    self.down = true;
                }
                ElementState::Released => {
                    if self.down {
                        self.released = true;
                    }
                    self.down = false;
                }
            },

            _ => {}
        }
    }

    /// Clears the per-frame edges after the frame has consumed them.
    pub fn end_frame(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_clear_but_held_state_persists() {
        let mut input = PointerInput {
            pos: Some(Vec2::new(10.0, 10.0)),
            down: true,
            pressed: true,
            released: false,
        };

        input.end_frame();

        assert!(input.down);
        assert!(!input.pressed);
        assert!(!input.released);
        assert_eq!(input.pos, Some(Vec2::new(10.0, 10.0)));
    }
}
