use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};

/// Wrapper around winit Window
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Hide the cursor and keep it inside the window.
    ///
    /// Locked is preferred; platforms without it fall back to Confined.
    /// Returns false when neither mode is available.
    pub fn grab_cursor(&self) -> bool {
        let grabbed = self
            .inner
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                self.inner.set_cursor_visible(false);
                true
            }
            Err(e) => {
                log::warn!("Cursor grab unavailable: {}", e);
                false
            }
        }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
