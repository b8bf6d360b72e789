//! Rendering module.
//!
//! Holds the sprite canvas with its clipping draw primitives, and the
//! PNG writer that upscales canvases for export.

mod canvas;
mod png;

pub use canvas::{Canvas, Paint, TILE_SIZE};
pub use png::{scale_canvas, write_png};
