// Window host for the demo: shows the composited mask and reports the input
// that drives it (resizes and the style-toggle keys).

use crate::error::Error;
use crate::types::Raster;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct MaskWindow {
    window: Window, // the on-screen window you see
}

impl MaskWindow {
    /// Create a resizable window; resizes act as the size-change callback.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            ..WindowOptions::default()
        };
        let window =
            Window::new(title, width, height, opts).map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &Raster) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client size in pixels; compared against the last layout to
    /// detect resizes.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    // we cycle the outside color in main when this fires.
    pub fn o_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::O, KeyRepeat::No)
    }

    // we toggle the inside fill in main when this fires.
    pub fn i_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::I, KeyRepeat::No)
    }
}
