use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::{FrameCtx, ReadyCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo.
pub trait App {
    /// Called exactly once, after the window and GPU exist but before the
    /// first frame. All GPU resources the app needs must be created here;
    /// nothing is created mid-run. A returned error aborts startup.
    fn on_ready(&mut self, ctx: &mut ReadyCtx<'_, '_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
