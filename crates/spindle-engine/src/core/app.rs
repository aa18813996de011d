use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
///
/// The redraw loop runs until the app (or the window) asks to stop; there is
/// no implicit termination condition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo layer.
pub trait App {
    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
