// Mask compositing: place the anchor image on a transparent canvas, then
// pour fill colors around and into its silhouette.
// Visual outcomes:
// - The outside color surrounds the anchor's outline.
// - The inside color shows through the anchor's transparent interior.
// - With both fills transparent you just see the anchor on a clear canvas.

use crate::anchor::AnchorImage;
use crate::types::{
    DEFAULT_ANCHOR_COLOR, DEFAULT_INSIDE_COLOR, DEFAULT_OUTSIDE_COLOR, Raster, Rect, TRANSPARENT,
};

/// Fill colors for one composite run. All packed 0xAARRGGBB; a color counts
/// as "transparent" only when it equals `TRANSPARENT` exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub outside_color: u32,
    pub inside_color: u32,
    /// Boundary-substitute color used as a scratch marker when the outside is
    /// transparent but the inside is not. Pixels equal to this value are
    /// rewritten to transparent at the end of that pass, so it should be a
    /// value that never occurs in the anchor art.
    pub anchor_color: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            outside_color: DEFAULT_OUTSIDE_COLOR,
            inside_color: DEFAULT_INSIDE_COLOR,
            anchor_color: DEFAULT_ANCHOR_COLOR,
        }
    }
}

/// Output of one composite run: the raster (same dimensions as requested)
/// plus the rectangle the anchor occupies in it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompositeResult {
    pub raster: Raster,
    pub rect: Rect,
}

/// Build the mask raster for a (width, height) canvas.
///
/// Returns `None` when no anchor is configured — nothing is allocated or
/// drawn in that case. Otherwise the anchor is centered if it fits, or scaled
/// non-uniformly to fill the whole canvas if it is too large in either
/// dimension, and the fill passes run according to which colors are opaque.
///
/// The recorded rect uses the anchor's original dimensions in the centered
/// branch and the post-scale (= canvas) dimensions in the scaled branch.
pub fn composite(
    width: usize,
    height: usize,
    anchor: Option<&AnchorImage>,
    style: Style,
) -> Option<CompositeResult> {
    let anchor = anchor?;
    let mut raster = Raster::transparent(width, height);

    // Centering offsets; either going negative means the anchor is too large.
    let left = (width as i32 - anchor.width() as i32) / 2;
    let top = (height as i32 - anchor.height() as i32) / 2;

    let rect = if left < 0 || top < 0 {
        log::trace!(
            "anchor {}x{} larger than canvas, scaling to {width}x{height}",
            anchor.width(),
            anchor.height()
        );
        let scaled = anchor.scaled_to(width as u32, height as u32);
        blit(&mut raster, &scaled, 0, 0);
        Rect::new(0, 0, scaled.width() as i32, scaled.height() as i32)
        // `scaled` is dropped here; only the canvas survives.
    } else {
        blit(&mut raster, anchor, left, top);
        Rect::new(left, top, anchor.width() as i32, anchor.height() as i32)
    };

    if style.inside_color != TRANSPARENT {
        if style.outside_color != TRANSPARENT {
            fill_outside(&mut raster, style.outside_color);
            fill_where_color_equals(&mut raster, style.inside_color, TRANSPARENT);
        } else {
            // Transparent outside, opaque inside: mark the outside with the
            // boundary-substitute color so the inside pass cannot leak past
            // the silhouette, then turn the marker back into transparent.
            // Any anchor pixel that happens to equal `anchor_color` is also
            // cleared by the last pass.
            fill_outside(&mut raster, style.anchor_color);
            fill_where_color_equals(&mut raster, style.inside_color, TRANSPARENT);
            fill_where_color_equals(&mut raster, TRANSPARENT, style.anchor_color);
        }
    } else if style.outside_color != TRANSPARENT {
        fill_outside(&mut raster, style.outside_color);
    }
    // Both transparent: the canvas keeps the bare anchor drawing.

    Some(CompositeResult { raster, rect })
}

/// Copy the anchor's pixels onto the canvas at (left, top).
/// The canvas underneath is transparent, so a straight copy is src-over.
fn blit(raster: &mut Raster, img: &AnchorImage, left: i32, top: i32) {
    for y in 0..img.height() {
        let dy = top + y as i32;
        if dy < 0 || dy as usize >= raster.height {
            continue;
        }
        for x in 0..img.width() {
            let dx = left + x as i32;
            if dx < 0 || dx as usize >= raster.width {
                continue;
            }
            raster.set(dx as usize, dy as usize, img.argb(x, y));
        }
    }
}

/// Fill the region outside the anchor silhouette.
///
/// Per column: overwrite transparent pixels from the top edge down until the
/// first non-transparent pixel, then again from the bottom edge up. This is
/// an edge-bounded column scan, not a connected-component flood fill:
/// transparent holes fully enclosed by opaque pixels are left untouched, and
/// transparent pockets only reachable sideways are missed too. A deliberate
/// approximation for roughly convex, centered anchor shapes.
pub fn fill_outside(raster: &mut Raster, fill: u32) {
    for x in 0..raster.width {
        for y in 0..raster.height {
            if raster.get(x, y) != TRANSPARENT {
                break;
            }
            raster.set(x, y, fill);
        }
        for y in (0..raster.height).rev() {
            if raster.get(x, y) != TRANSPARENT {
                break;
            }
            raster.set(x, y, fill);
        }
    }
}

/// Overwrite every pixel equal to `compare` with `fill`. Whole-raster scan,
/// not bounded by edges — this is what reaches the enclosed holes.
pub fn fill_where_color_equals(raster: &mut Raster, fill: u32, compare: u32) {
    for p in &mut raster.pixels {
        if *p == compare {
            *p = fill;
        }
    }
}
