// Anchor image: the foreground bitmap the mask is built around.
// Decoding and scaling go through the `image` crate; pixels are handed to the
// compositor as packed 0xAARRGGBB values.

use crate::error::Error;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// An immutable RGBA raster. May come from a decoded file, from raw pixels,
/// or from a scaled copy of another anchor.
#[derive(Clone, Debug)]
pub struct AnchorImage {
    img: RgbaImage,
}

impl AnchorImage {
    /// Decode an image file (PNG etc.) into an anchor.
    pub fn open(path: &str) -> Result<Self, Error> {
        let img = image::open(path)
            .map_err(|e| Error::AnchorDecode(format!("{path}: {e}")))?
            .to_rgba8();
        Ok(Self { img })
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        Self { img }
    }

    /// Build an anchor from packed 0xAARRGGBB pixels, row-major.
    /// `pixels.len()` must equal `width * height`.
    pub fn from_argb_pixels(width: u32, height: u32, pixels: &[u32]) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let p = pixels[(y * width + x) as usize];
            Rgba([
                ((p >> 16) & 0xFF) as u8,
                ((p >> 8) & 0xFF) as u8,
                (p & 0xFF) as u8,
                ((p >> 24) & 0xFF) as u8,
            ])
        });
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Non-uniform nearest-neighbor scale to exactly (width, height).
    /// No aspect-ratio preservation and no filtering.
    pub fn scaled_to(&self, width: u32, height: u32) -> AnchorImage {
        Self {
            img: imageops::resize(&self.img, width, height, FilterType::Nearest),
        }
    }

    /// Packed 0xAARRGGBB value at (x, y).
    #[inline]
    pub fn argb(&self, x: u32, y: u32) -> u32 {
        let Rgba([r, g, b, a]) = *self.img.get_pixel(x, y);
        ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_round_trip() {
        let px = [0xFF10_2030, 0x8001_0203, 0x0000_0000, 0xFFFF_FFFF];
        let a = AnchorImage::from_argb_pixels(2, 2, &px);
        assert_eq!(a.argb(0, 0), 0xFF10_2030);
        assert_eq!(a.argb(1, 0), 0x8001_0203);
        assert_eq!(a.argb(0, 1), 0x0000_0000);
        assert_eq!(a.argb(1, 1), 0xFFFF_FFFF);
    }

    #[test]
    fn scaled_to_reports_new_dimensions() {
        let a = AnchorImage::from_argb_pixels(2, 2, &[0xFF00_0000; 4]);
        let s = a.scaled_to(5, 3);
        assert_eq!((s.width(), s.height()), (5, 3));
    }

    #[test]
    fn nearest_scale_replicates_pixels() {
        // 1x2 image doubled in both axes: each source pixel becomes a block.
        let a = AnchorImage::from_argb_pixels(1, 2, &[0xFFAA_0000, 0xFF00_BB00]);
        let s = a.scaled_to(2, 4);
        assert_eq!(s.argb(0, 0), 0xFFAA_0000);
        assert_eq!(s.argb(1, 0), 0xFFAA_0000);
        assert_eq!(s.argb(0, 3), 0xFF00_BB00);
        assert_eq!(s.argb(1, 3), 0xFF00_BB00);
    }

    #[test]
    fn open_missing_file_is_a_decode_error() {
        let err = AnchorImage::open("/nonexistent/anchor.png").unwrap_err();
        assert!(err.to_string().contains("Anchor image error"));
    }
}
