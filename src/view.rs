// HoleView: widget-style state wrapped around the compositor. Owns the fill
// style, the optional anchor image, and a single cached composite result that
// is rebuilt whenever the size or the style changes. The previous result is
// dropped when the new one replaces it, so at most one raster is live per
// view.

use crate::anchor::AnchorImage;
use crate::compositor::{CompositeResult, Style, composite};
use crate::types::{Raster, Rect};

pub struct HoleView {
    style: Style,
    anchor: Option<AnchorImage>,
    size: Option<(usize, usize)>,
    cached: Option<CompositeResult>,
    rect: Rect, // last successful placement; sticks around even if the anchor goes away
}

impl HoleView {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            anchor: None,
            size: None,
            cached: None,
            rect: Rect::ZERO,
        }
    }

    // ── style accessors ───────────────────────────────────────────────────
    // Setters recomposite immediately once a size is known.

    pub fn outside_color(&self) -> u32 {
        self.style.outside_color
    }

    pub fn set_outside_color(&mut self, color: u32) {
        self.style.outside_color = color;
        self.recomposite();
    }

    pub fn inside_color(&self) -> u32 {
        self.style.inside_color
    }

    pub fn set_inside_color(&mut self, color: u32) {
        self.style.inside_color = color;
        self.recomposite();
    }

    pub fn anchor_color(&self) -> u32 {
        self.style.anchor_color
    }

    pub fn set_anchor_color(&mut self, color: u32) {
        self.style.anchor_color = color;
        self.recomposite();
    }

    pub fn anchor(&self) -> Option<&AnchorImage> {
        self.anchor.as_ref()
    }

    pub fn set_anchor(&mut self, anchor: Option<AnchorImage>) {
        self.anchor = anchor;
        self.recomposite();
    }

    // ── host callbacks / queries ──────────────────────────────────────────

    /// Size-change callback from the host. Recomposites only when there is no
    /// cached raster for exactly these dimensions.
    pub fn on_size_changed(&mut self, width: usize, height: usize) {
        self.size = Some((width, height));
        let up_to_date = self
            .cached
            .as_ref()
            .is_some_and(|c| c.raster.width == width && c.raster.height == height);
        if !up_to_date {
            self.recomposite();
        }
    }

    /// Last computed placement rectangle; the zero rect until a composite
    /// has run.
    pub fn placement_rect(&self) -> Rect {
        self.rect
    }

    /// The cached composited raster, if an anchor is configured and a size
    /// is known.
    pub fn raster(&self) -> Option<&Raster> {
        self.cached.as_ref().map(|c| &c.raster)
    }

    fn recomposite(&mut self) {
        let Some((w, h)) = self.size else {
            // No layout yet; the first on_size_changed will build the raster.
            return;
        };
        // Assigning over `cached` drops the superseded result.
        self.cached = composite(w, h, self.anchor.as_ref(), self.style);
        if let Some(res) = &self.cached {
            self.rect = res.rect;
            log::debug!("composited {w}x{h} mask, anchor at {}", res.rect);
        }
    }
}

impl Default for HoleView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TRANSPARENT;

    const OPAQUE_RED: u32 = 0xFFCC_2222;
    const OPAQUE_BLUE: u32 = 0xFF22_22CC;

    fn square_anchor() -> AnchorImage {
        AnchorImage::from_argb_pixels(4, 4, &[OPAQUE_RED; 16])
    }

    #[test]
    fn placement_rect_is_zero_before_any_composite() {
        let view = HoleView::new();
        assert_eq!(view.placement_rect(), Rect::ZERO);
        assert!(view.raster().is_none());
    }

    #[test]
    fn size_change_composites_and_records_rect() {
        let mut view = HoleView::new();
        view.set_anchor(Some(square_anchor()));
        view.on_size_changed(10, 10);
        assert_eq!(view.placement_rect(), Rect::new(3, 3, 4, 4));
        let raster = view.raster().unwrap();
        assert_eq!((raster.width, raster.height), (10, 10));
    }

    #[test]
    fn size_change_replaces_the_cached_raster() {
        let mut view = HoleView::new();
        view.set_anchor(Some(square_anchor()));
        view.on_size_changed(10, 10);
        view.on_size_changed(20, 16);
        let raster = view.raster().unwrap();
        assert_eq!((raster.width, raster.height), (20, 16));
        assert_eq!(view.placement_rect(), Rect::new(8, 6, 4, 4));
    }

    #[test]
    fn color_setter_triggers_a_recomposite() {
        let mut view = HoleView::new();
        view.set_anchor(Some(square_anchor()));
        view.on_size_changed(10, 10);
        view.set_outside_color(OPAQUE_BLUE);
        assert_eq!(view.raster().unwrap().get(0, 0), OPAQUE_BLUE);
        view.set_outside_color(TRANSPARENT);
        assert_eq!(view.raster().unwrap().get(0, 0), TRANSPARENT);
    }

    #[test]
    fn setter_before_first_layout_is_deferred() {
        let mut view = HoleView::new();
        view.set_anchor(Some(square_anchor()));
        view.set_outside_color(OPAQUE_BLUE);
        assert!(view.raster().is_none());
        view.on_size_changed(8, 8);
        assert_eq!(view.raster().unwrap().get(0, 0), OPAQUE_BLUE);
    }

    #[test]
    fn removing_the_anchor_clears_the_raster_but_keeps_the_rect() {
        let mut view = HoleView::new();
        view.set_anchor(Some(square_anchor()));
        view.on_size_changed(10, 10);
        let rect = view.placement_rect();
        view.set_anchor(None);
        assert!(view.raster().is_none());
        assert_eq!(view.placement_rect(), rect);
    }

    #[test]
    fn no_anchor_means_no_raster_at_any_size() {
        let mut view = HoleView::new();
        view.on_size_changed(10, 10);
        view.on_size_changed(64, 64);
        assert!(view.raster().is_none());
        assert_eq!(view.placement_rect(), Rect::ZERO);
    }
}
