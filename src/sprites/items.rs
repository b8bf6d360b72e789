//! Item sprites: food, furniture, tools and raw materials.

use crate::render::Canvas;
use crate::types::Colour;

use super::{Category, SpriteDef};

pub const SPRITES: &[SpriteDef] = &[
    SpriteDef::new("item_food", Category::Items, food),
    SpriteDef::new("item_drink", Category::Items, drink),
    SpriteDef::new("item_raw_meat", Category::Items, raw_meat),
    SpriteDef::new("item_plant", Category::Items, plant),
    SpriteDef::new("item_bed", Category::Items, bed),
    SpriteDef::new("item_table", Category::Items, table),
    SpriteDef::new("item_chair", Category::Items, chair),
    SpriteDef::new("item_door", Category::Items, door),
    SpriteDef::new("item_barrel", Category::Items, barrel),
    SpriteDef::new("item_bin", Category::Items, bin),
    SpriteDef::new("item_pickaxe", Category::Items, pickaxe),
    SpriteDef::new("item_axe", Category::Items, axe),
    SpriteDef::new("item_log", Category::Items, log),
    SpriteDef::new("item_stone", Category::Items, stone),
    SpriteDef::new("item_ore", Category::Items, ore),
];

pub fn food() -> Canvas {
    let mut c = Canvas::new();
    // Bread loaf
    c.fill_rect(3, 6, 10, 6, "bread");
    c.fill_rect(4, 5, 8, 2, "bread");
    c.fill_rect(5, 6, 6, 2, Colour::rgb(238, 198, 118));
    // Scoring
    c.set_pixel(6, 7, "wood_med");
    c.set_pixel(9, 7, "wood_med");
    c
}

pub fn drink() -> Canvas {
    let mut c = Canvas::new();
    // Mug
    c.fill_rect(4, 4, 8, 10, "wood_med");
    c.fill_rect(5, 5, 6, 8, "ale");
    c.fill_rect(12, 6, 2, 6, "wood_dark");
    c.fill_rect(13, 7, 1, 4, "wood_dark");
    // Foam
    c.fill_rect(5, 4, 6, 2, "white");
    c
}

pub fn raw_meat() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 5, 10, 8, "meat_red");
    c.fill_rect(4, 4, 8, 2, "meat_red");
    // Marbling
    c.fill_rect(5, 7, 3, 2, "white");
    c.fill_rect(9, 9, 2, 2, "white");
    c.fill_rect(3, 11, 10, 2, "meat_dark");
    c
}

pub fn plant() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(7, 6, 2, 10, "shrub");
    // Leaves
    c.fill_rect(4, 4, 3, 4, "plant_green");
    c.fill_rect(9, 3, 4, 3, "plant_green");
    c.fill_rect(5, 8, 3, 3, "plant_green");
    c.fill_rect(10, 7, 3, 3, "plant_green");
    c
}

pub fn bed() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(1, 10, 14, 4, "wood_dark");
    c.fill_rect(2, 6, 12, 5, "fabric_red");
    // Pillow
    c.fill_rect(2, 4, 4, 3, "white");
    // Blanket fold
    c.fill_rect(2, 8, 12, 1, Colour::rgb(148, 48, 48));
    c
}

pub fn table() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(1, 5, 14, 3, "wood_med");
    c.fill_rect(0, 5, 16, 1, "wood_light");
    c.fill_rect(2, 8, 2, 8, "wood_dark");
    c.fill_rect(12, 8, 2, 8, "wood_dark");
    c
}

pub fn chair() -> Canvas {
    let mut c = Canvas::new();
    // Back
    c.fill_rect(5, 2, 6, 7, "wood_med");
    c.fill_rect(6, 3, 4, 5, "wood_light");
    // Seat
    c.fill_rect(4, 9, 8, 2, "wood_med");
    // Legs
    c.fill_rect(4, 11, 2, 5, "wood_dark");
    c.fill_rect(10, 11, 2, 5, "wood_dark");
    c
}

pub fn door() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(2, 0, 12, 16, "wood_dark");
    // Panels
    c.fill_rect(3, 1, 10, 6, "wood_med");
    c.fill_rect(3, 9, 10, 6, "wood_med");
    c.fill_rect(10, 8, 2, 2, "metal_light");
    // Hinges
    c.fill_rect(3, 3, 1, 2, "metal_dark");
    c.fill_rect(3, 11, 1, 2, "metal_dark");
    c
}

pub fn barrel() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 2, 10, 12, "wood_med");
    c.fill_rect(4, 1, 8, 2, "wood_med");
    c.fill_rect(4, 13, 8, 2, "wood_med");
    // Hoops
    c.fill_rect(3, 4, 10, 1, "metal_dark");
    c.fill_rect(3, 11, 10, 1, "metal_dark");
    // Staves
    for x in [5, 8, 11] {
        c.fill_rect(x, 2, 1, 12, "wood_dark");
    }
    c
}

pub fn bin() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(2, 5, 12, 9, "wood_med");
    c.fill_rect(3, 6, 10, 7, "wood_dark");
    // Rim
    c.fill_rect(1, 4, 14, 2, "wood_light");
    c
}

pub fn pickaxe() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(2, 3, 2, 12, "wood_dark");
    // Head
    c.fill_rect(4, 2, 10, 3, "metal_light");
    c.fill_rect(12, 1, 3, 2, "metal_light");
    c.fill_rect(12, 4, 3, 2, "metal_light");
    c.set_pixel(14, 1, "white");
    c.set_pixel(14, 5, "white");
    c
}

pub fn axe() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 3, 2, 12, "wood_dark");
    // Head
    c.fill_rect(5, 2, 6, 6, "metal_light");
    c.fill_rect(9, 3, 4, 4, "metal_light");
    // Edge
    c.fill_rect(11, 3, 2, 4, "metal_dark");
    c.set_pixel(12, 4, "white");
    c.set_pixel(12, 5, "white");
    c
}

pub fn log() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(1, 5, 14, 7, "wood_med");
    // Bark
    c.fill_rect(1, 5, 14, 2, "bark");
    c.fill_rect(1, 10, 14, 2, "bark");
    // End grain
    c.fill_rect(13, 6, 2, 5, "wood_light");
    c.set_pixel(14, 8, "wood_dark");
    c
}

pub fn stone() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 5, 10, 8, "stone_med");
    c.fill_rect(4, 4, 8, 2, "stone_med");
    c.fill_rect(5, 12, 6, 2, "stone_med");
    c.fill_rect(5, 6, 4, 3, "stone_light");
    c.fill_rect(9, 9, 3, 3, "stone_dark");
    c
}

pub fn ore() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 5, 10, 8, "stone_dark");
    c.fill_rect(4, 4, 8, 2, "stone_dark");
    // Gold
    c.fill_rect(5, 6, 3, 3, "gold");
    c.fill_rect(9, 8, 3, 3, "gold");
    c.set_pixel(6, 7, "white");
    c.set_pixel(10, 9, "white");
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Palette;

    #[test]
    fn test_item_count() {
        assert_eq!(SPRITES.len(), 15);
        assert_eq!(SPRITES[0].name, "item_food");
        assert_eq!(SPRITES[14].name, "item_ore");
    }

    #[test]
    fn test_table_top_spans_full_width() {
        let c = table();
        let wood_light = Palette::builtin().get("wood_light");
        for x in 0..16 {
            assert_eq!(c.get(x, 5), wood_light);
        }
        assert_eq!(c.get(0, 6), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_door_stays_inside_frame() {
        let c = door();
        assert_eq!(c.get(1, 8), Some(Colour::TRANSPARENT));
        assert_eq!(c.get(14, 8), Some(Colour::TRANSPARENT));
        assert_eq!(c.get(10, 8), Palette::builtin().get("metal_light"));
    }
}
