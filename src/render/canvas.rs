//! Sprite canvas and drawing primitives.
//!
//! A canvas is a fixed 16x16 grid of RGBA pixels. Drawing never fails:
//! coordinates outside the grid are clipped, so sprite drawers can use
//! literal offsets that spill past the edges.

use std::collections::BTreeSet;

use crate::types::{Colour, Palette};

/// Width and height of every sprite, in pixels.
pub const TILE_SIZE: usize = 16;

/// A colour to draw with: a palette name or a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Name looked up in the builtin palette.
    Named(&'static str),

    /// Literal colour (alpha is ignored when drawn).
    Rgb(Colour),
}

impl From<&'static str> for Paint {
    fn from(name: &'static str) -> Self {
        Paint::Named(name)
    }
}

impl From<Colour> for Paint {
    fn from(colour: Colour) -> Self {
        Paint::Rgb(colour)
    }
}

/// A 16x16 sprite canvas (row-major: pixels[y][x]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: [[Colour; TILE_SIZE]; TILE_SIZE],

    /// Palette names that failed to resolve while drawing.
    unresolved: BTreeSet<&'static str>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new() -> Self {
        Self {
            pixels: [[Colour::TRANSPARENT; TILE_SIZE]; TILE_SIZE],
            unresolved: BTreeSet::new(),
        }
    }

    /// Set a single pixel at full opacity.
    ///
    /// Out-of-range coordinates are a silent no-op. An unknown palette
    /// name leaves the pixel untouched and is recorded in `unresolved()`.
    pub fn set_pixel(&mut self, x: i32, y: i32, paint: impl Into<Paint>) {
        let Some(colour) = self.resolve(paint.into()) else {
            return;
        };
        self.put(x, y, colour);
    }

    /// Fill the rectangle `[x, x + w) x [y, y + h)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, paint: impl Into<Paint>) {
        let Some(colour) = self.resolve(paint.into()) else {
            return;
        };

        let size = TILE_SIZE as i32;
        let (x0, x1) = (x.clamp(0, size), x.saturating_add(w).clamp(0, size));
        let (y0, y1) = (y.clamp(0, size), y.saturating_add(h).clamp(0, size));

        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, colour);
            }
        }
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        TILE_SIZE
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        TILE_SIZE
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[[Colour; TILE_SIZE]; TILE_SIZE] {
        &self.pixels
    }

    /// Palette names referenced while drawing that the palette lacks.
    pub fn unresolved(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.unresolved.iter().copied()
    }

    /// Count pixels that are not fully transparent.
    pub fn opaque_count(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|c| !c.is_transparent())
            .count()
    }

    fn resolve(&mut self, paint: Paint) -> Option<Colour> {
        match paint {
            Paint::Rgb(colour) => Some(colour.opaque()),
            Paint::Named(name) => {
                let colour = Palette::builtin().get(name);
                if colour.is_none() {
                    self.unresolved.insert(name);
                }
                colour
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, colour: Colour) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x < TILE_SIZE && y < TILE_SIZE {
            self.pixels[y][x] = colour;
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
