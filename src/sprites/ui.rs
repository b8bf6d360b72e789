//! UI overlays.

use crate::render::Canvas;

use super::{Category, SpriteDef};

pub const SPRITES: &[SpriteDef] = &[SpriteDef::new("ui_selection", Category::Ui, selection)];

/// Length of each corner bracket arm, in pixels.
const BRACKET: i32 = 4;

/// Selection cursor: four corner brackets over a transparent tile.
pub fn selection() -> Canvas {
    let mut c = Canvas::new();
    for i in 0..BRACKET {
        // Top-left
        c.set_pixel(i, 0, "select_yellow");
        c.set_pixel(0, i, "select_yellow");
        // Top-right
        c.set_pixel(15 - i, 0, "select_yellow");
        c.set_pixel(15, i, "select_yellow");
        // Bottom-left
        c.set_pixel(i, 15, "select_yellow");
        c.set_pixel(0, 15 - i, "select_yellow");
        // Bottom-right
        c.set_pixel(15 - i, 15, "select_yellow");
        c.set_pixel(15, 15 - i, "select_yellow");
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Palette};

    #[test]
    fn test_selection_brackets() {
        let c = selection();
        let yellow = Palette::builtin().get("select_yellow");

        for (x, y) in [(0, 0), (3, 0), (0, 3), (15, 0), (12, 15), (15, 12), (15, 15)] {
            assert_eq!(c.get(x, y), yellow, "expected bracket at ({x}, {y})");
        }
        assert_eq!(c.get(4, 0), Some(Colour::TRANSPARENT));
        assert_eq!(c.get(8, 8), Some(Colour::TRANSPARENT));
        // 4 corners x 7 distinct pixels
        assert_eq!(c.opaque_count(), 28);
    }
}
