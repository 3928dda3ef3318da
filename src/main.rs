// Demo host for the hole-mask view.
// What you SEE:
// • The composited mask over a checkerboard, so transparent regions show
//   through as checker squares.
// • Resize the window: the mask is recomposited and the anchor rectangle is
//   logged, like a layout pass in a real UI host.
// • O cycles the outside color (gray / blue / transparent). I toggles the
//   inside fill. ESC quits.
//
// Pass a PNG path as the first argument to use your own anchor image; without
// one, a built-in ring anchor is used so the hole effect is visible at once.

use std::env;

use holemask::anchor::AnchorImage;
use holemask::error::Error;
use holemask::types::{Raster, TRANSPARENT};
use holemask::view::HoleView;
use holemask::window::MaskWindow;

use image::{Rgba, RgbaImage};

const WINDOW_W: usize = 640;
const WINDOW_H: usize = 480;

const OUTSIDE_CYCLE: [u32; 3] = [0xFFCC_CCCC, 0xFF33_66CC, TRANSPARENT];
const INSIDE_TOGGLE: [u32; 2] = [TRANSPARENT, 0xCC22_2222];

fn main() -> Result<(), Error> {
    init_logging();

    /* --- Anchor image: PNG path from argv, or the built-in ring --- */
    let anchor = match env::args().nth(1) {
        Some(path) => {
            log::info!("loading anchor image from {path}");
            AnchorImage::open(&path)?
        }
        None => ring_anchor(240, 100, 60),
    };

    /* --- View + window setup ---
       Visual: window opens blank; the first layout pass below fills it. */
    let mut view = HoleView::new();
    view.set_anchor(Some(anchor));
    let mut window = MaskWindow::new("Hole Mask — O: outside  I: inside  ESC: quit", WINDOW_W, WINDOW_H)?;

    let mut screen = Raster::transparent(WINDOW_W, WINDOW_H);
    let (mut last_w, mut last_h) = (0usize, 0usize);
    let mut outside_ix = 0;
    let mut inside_ix = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while window.is_open() && !window.esc_pressed() {
        /* 1) Treat the window size as the layout input. */
        let (w, h) = window.size();
        if (w, h) != (last_w, last_h) && w > 0 && h > 0 {
            view.on_size_changed(w, h);
            // The MainActivity-equivalent: report the anchor bounds post-layout.
            log::info!("layout {w}x{h}: anchor rect {}", view.placement_rect());
            screen = Raster::transparent(w, h);
            (last_w, last_h) = (w, h);
        }

        /* 2) Style toggles. Each setter recomposites the cached mask. */
        if window.o_pressed_once() {
            outside_ix = (outside_ix + 1) % OUTSIDE_CYCLE.len();
            view.set_outside_color(OUTSIDE_CYCLE[outside_ix]);
            log::info!("outside color -> {:#010X}", view.outside_color());
        }
        if window.i_pressed_once() {
            inside_ix = (inside_ix + 1) % INSIDE_TOGGLE.len();
            view.set_inside_color(INSIDE_TOGGLE[inside_ix]);
            log::info!("inside color -> {:#010X}", view.inside_color());
        }

        /* 3) Compose the mask over a checkerboard and present. */
        draw_checkerboard(&mut screen);
        if let Some(mask) = view.raster() {
            blend_over(&mut screen, mask);
        }
        window.present(&screen)?;
    }

    Ok(())
}

/// Logger setup: honor RUST_LOG, default to info so the layout lines show.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Built-in anchor: an opaque ring with a transparent center, so the mask has
/// a genuine enclosed hole to pour the inside color into.
fn ring_anchor(size: u32, outer: i32, inner: i32) -> AnchorImage {
    let c = size as i32 / 2;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as i32 - c;
        let dy = y as i32 - c;
        let d2 = dx * dx + dy * dy;
        if d2 <= outer * outer && d2 >= inner * inner {
            Rgba([40, 60, 200, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    AnchorImage::from_rgba(img)
}

/// Fill the screen with a light/dark checker pattern (16 px squares).
/// Visual: wherever the mask is transparent, this pattern shows through.
fn draw_checkerboard(screen: &mut Raster) {
    for y in 0..screen.height {
        for x in 0..screen.width {
            let light = ((x / 16) + (y / 16)) % 2 == 0;
            let color = if light { 0x00A0_A0A0 } else { 0x0060_6060 };
            screen.set(x, y, color);
        }
    }
}

/// Straight src-over of the ARGB mask onto the 0x00RRGGBB screen buffer.
/// The mask is mostly fully opaque or fully transparent, so integer math is
/// plenty here.
fn blend_over(screen: &mut Raster, mask: &Raster) {
    for (d, &s) in screen.pixels.iter_mut().zip(&mask.pixels) {
        let a = (s >> 24) & 0xFF;
        if a == 0 {
            continue;
        }
        if a == 255 {
            *d = s & 0x00FF_FFFF;
            continue;
        }
        let inv = 255 - a;
        let r = (((s >> 16) & 0xFF) * a + ((*d >> 16) & 0xFF) * inv) / 255;
        let g = (((s >> 8) & 0xFF) * a + ((*d >> 8) & 0xFF) * inv) / 255;
        let b = ((s & 0xFF) * a + (*d & 0xFF) * inv) / 255;
        *d = (r << 16) | (g << 8) | b;
    }
}
