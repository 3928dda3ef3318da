// Software "hole mask" compositing: an anchor image placed on a canvas, with
// a flood-filled outside color around its silhouette and an inside color
// poured into its transparent interior — a spotlight/cutout visual.
//
// The pipeline is entirely CPU-side and synchronous: `compositor::composite`
// builds one raster per call, and `view::HoleView` caches a single result and
// rebuilds it on size or style changes.

pub mod anchor;
pub mod compositor;
pub mod error;
pub mod types;
pub mod view;
pub mod window;

pub use anchor::AnchorImage;
pub use compositor::{CompositeResult, Style, composite};
pub use error::Error;
pub use types::{Raster, Rect};
pub use view::HoleView;
