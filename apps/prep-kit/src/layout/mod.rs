// Text layout: WinAnsi encoding and glyph metrics, then wrapping and pagination into a page model.
// Pure computation; the PDF writer in `render` consumes the resulting DocumentLayout.

pub mod encoding;
pub mod font_metrics;
pub mod geometry;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by other modules (render, pipeline).
pub use font_metrics::FontFace;
pub use geometry::{letter_geometry, PageGeometry};
pub use paginate::{paginate, DocumentLayout, PageLayout};
