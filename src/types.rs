// Core pixel types shared by the compositor, the view, and the demo host.

use std::fmt::{self, Display};

/// The distinguished "transparent" value. Fill passes compare pixels against
/// this exact u32, not against the alpha channel.
pub const TRANSPARENT: u32 = 0x0000_0000;

/// Default outside fill: light gray.
pub const DEFAULT_OUTSIDE_COLOR: u32 = 0xFFCC_CCCC;
/// Default inside fill: fully transparent (the hole stays see-through).
pub const DEFAULT_INSIDE_COLOR: u32 = TRANSPARENT;
/// Default boundary-substitute color. Nearly transparent on purpose: it acts
/// as a scratch marker during filling and must not collide with colors that
/// actually occur in anchor art.
pub const DEFAULT_ANCHOR_COLOR: u32 = 0x0000_0001;

/// A row-major pixel raster. Each entry is packed 0xAARRGGBB.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>, // length = width * height
}

impl Raster {
    /// A fully transparent canvas of the given size.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        self.pixels[y * self.width + x] = color;
    }
}

/// Placement rectangle in integer pixels: where the anchor image was actually
/// drawn, post centering/scaling decision.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

impl Display for Rect {
    // How the rect reads in the host's log line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_raster_dimensions() {
        let r = Raster::transparent(7, 3);
        assert_eq!(r.pixels.len(), 21);
        assert!(r.pixels.iter().all(|&p| p == TRANSPARENT));
    }

    #[test]
    fn raster_get_set_round_trip() {
        let mut r = Raster::transparent(4, 4);
        r.set(2, 3, 0xFF11_2233);
        assert_eq!(r.get(2, 3), 0xFF11_2233);
        assert_eq!(r.get(3, 2), TRANSPARENT);
    }

    #[test]
    fn rect_display_reads_as_origin_and_size() {
        assert_eq!(Rect::new(30, 30, 40, 40).to_string(), "(30, 30, 40x40)");
    }
}
