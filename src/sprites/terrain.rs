//! Terrain tiles.

use crate::render::Canvas;
use crate::types::Colour;

use super::{Category, SpriteDef};

pub const SPRITES: &[SpriteDef] = &[
    SpriteDef::new("terrain_empty_air", Category::Terrain, empty_air),
    SpriteDef::new("terrain_grass", Category::Terrain, grass),
    SpriteDef::new("terrain_dirt", Category::Terrain, dirt),
    SpriteDef::new("terrain_stone", Category::Terrain, stone),
    SpriteDef::new("terrain_water", Category::Terrain, water),
    SpriteDef::new("terrain_tree", Category::Terrain, tree),
    SpriteDef::new("terrain_shrub", Category::Terrain, shrub),
    SpriteDef::new("terrain_wall", Category::Terrain, wall),
    SpriteDef::new("terrain_ore", Category::Terrain, ore),
    SpriteDef::new("terrain_wooden_floor", Category::Terrain, wooden_floor),
    SpriteDef::new("terrain_stone_floor", Category::Terrain, stone_floor),
    SpriteDef::new("terrain_constructed_wall", Category::Terrain, constructed_wall),
    SpriteDef::new("terrain_stairs_up", Category::Terrain, stairs_up),
    SpriteDef::new("terrain_stairs_down", Category::Terrain, stairs_down),
    SpriteDef::new("terrain_stairs_updown", Category::Terrain, stairs_updown),
    SpriteDef::new("terrain_ramp_up", Category::Terrain, ramp_up),
    SpriteDef::new("terrain_ramp_down", Category::Terrain, ramp_down),
];

pub fn empty_air() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "empty");
    // Faint stars
    for (x, y) in [(3, 4), (8, 2), (12, 7), (5, 12), (14, 11)] {
        c.set_pixel(x, y, Colour::rgb(48, 48, 58));
    }
    c
}

pub fn grass() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "grass_dark");
    for y in 0..16 {
        for x in 0..16 {
            if (x + y) % 3 == 0 {
                c.set_pixel(x, y, "grass_light");
            }
        }
    }
    // Blades along the top edge
    for x in [1, 4, 7, 10, 13] {
        c.set_pixel(x, 0, "grass_light");
        c.set_pixel(x + 1, 1, "grass_light");
    }
    c
}

pub fn dirt() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "dirt_dark");
    for y in 0..16 {
        for x in 0..16 {
            if (x * 3 + y * 7) % 5 == 0 {
                c.set_pixel(x, y, "dirt_light");
            }
        }
    }
    for (x, y) in [(3, 5), (10, 8), (6, 12)] {
        c.set_pixel(x, y, "stone_med");
    }
    c
}

pub fn stone() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_med");
    for y in 0..16 {
        for x in 0..16 {
            if (x * 5 + y * 3) % 7 == 0 {
                c.set_pixel(x, y, "stone_dark");
            } else if (x * 2 + y * 5) % 9 == 0 {
                c.set_pixel(x, y, "stone_light");
            }
        }
    }
    c
}

pub fn water() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "water_dark");
    // Two-row waves every four rows, shifted one column per band
    for y in (0..16).step_by(4) {
        for x in 0..16 {
            if (x + y / 4) % 4 < 2 {
                c.set_pixel(x, y, "water_light");
                c.set_pixel(x, y + 1, "water_light");
            }
        }
    }
    for (x, y) in [(2, 3), (8, 7), (13, 11)] {
        c.set_pixel(x, y, Colour::rgb(128, 188, 238));
    }
    c
}

pub fn tree() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "grass_dark");
    // Trunk
    c.fill_rect(6, 10, 4, 6, "bark");
    c.fill_rect(7, 11, 2, 4, "wood_dark");
    // Canopy
    c.fill_rect(3, 2, 10, 9, "tree_dark");
    c.fill_rect(2, 4, 12, 5, "tree_dark");
    c.fill_rect(4, 3, 4, 4, "tree_light");
    c.set_pixel(5, 4, "shrub");
    c
}

pub fn shrub() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "grass_dark");
    c.fill_rect(3, 6, 10, 8, "shrub");
    c.fill_rect(5, 4, 6, 4, "shrub");
    for (x, y) in [(5, 7), (8, 5), (10, 8)] {
        c.set_pixel(x, y, "grass_light");
    }
    // Berries
    for (x, y) in [(6, 9), (9, 7), (11, 10)] {
        c.set_pixel(x, y, Colour::rgb(198, 58, 58));
    }
    c
}

pub fn wall() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "wall_dark");
    // Rock face
    c.fill_rect(0, 0, 8, 6, "stone_dark");
    c.fill_rect(8, 0, 8, 8, "stone_med");
    c.fill_rect(0, 6, 10, 6, "stone_med");
    c.fill_rect(10, 8, 6, 8, "stone_dark");
    // Mortar seams so adjacent wall tiles read as separate blocks
    c.fill_rect(0, 0, 16, 1, "wall_dark");
    c.fill_rect(0, 0, 1, 16, "wall_dark");
    // Cracks
    for (x, y) in [(4, 3), (12, 5), (6, 10), (3, 13)] {
        c.set_pixel(x, y, "black");
    }
    c
}

pub fn ore() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_dark");
    // Veins
    c.fill_rect(2, 3, 4, 3, "gold");
    c.fill_rect(9, 7, 5, 4, "gold");
    c.fill_rect(4, 11, 3, 3, "gold");
    for (x, y) in [(3, 4), (11, 8), (5, 12)] {
        c.set_pixel(x, y, "gold_dark");
    }
    for (x, y) in [(4, 3), (10, 9), (6, 11)] {
        c.set_pixel(x, y, "white");
    }
    c
}

pub fn wooden_floor() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "wood_med");
    // Plank seams
    for y in [0, 4, 8, 12] {
        c.fill_rect(0, y, 16, 1, "wood_dark");
    }
    // Grain
    for y in 0..16 {
        for x in 0..16 {
            if (x + y * 3) % 8 == 0 {
                c.set_pixel(x, y, "wood_light");
            }
        }
    }
    c
}

pub fn stone_floor() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_light");
    for y in [0, 8] {
        c.fill_rect(0, y, 16, 1, "stone_dark");
    }
    for x in [0, 8] {
        c.fill_rect(x, 0, 1, 16, "stone_dark");
    }
    c.fill_rect(1, 1, 6, 6, "stone_med");
    c.fill_rect(9, 9, 6, 6, "stone_med");
    c
}

pub fn constructed_wall() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_med");
    // Running bond: vertical joints alternate between columns 4 and 0
    for y in (0..16).step_by(4) {
        c.fill_rect(0, y, 16, 1, "stone_dark");
        let offset = if (y / 4) % 2 == 0 { 4 } else { 0 };
        for x in (offset..16).step_by(8) {
            c.fill_rect(x, y, 1, 4, "stone_dark");
        }
    }
    c
}

pub fn stairs_up() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_dark");
    for (i, y) in [12, 8, 4, 0].into_iter().enumerate() {
        let step = if i % 2 == 0 { "stone_med" } else { "stone_light" };
        c.fill_rect(0, y, 16, 4, step);
        c.fill_rect(0, y, 16, 1, "stone_dark");
    }
    // Up arrow
    c.fill_rect(7, 5, 2, 6, "white");
    for i in 0..3 {
        c.set_pixel(7 - i, 5 + i, "white");
        c.set_pixel(8 + i, 5 + i, "white");
    }
    c
}

pub fn stairs_down() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_dark");
    for (i, y) in [0, 4, 8, 12].into_iter().enumerate() {
        let step = if i % 2 == 0 { "stone_med" } else { "stone_light" };
        c.fill_rect(0, y, 16, 4, step);
        c.fill_rect(0, y + 3, 16, 1, "stone_dark");
    }
    // Down arrow
    c.fill_rect(7, 5, 2, 6, "white");
    for i in 0..3 {
        c.set_pixel(7 - i, 11 - i, "white");
        c.set_pixel(8 + i, 11 - i, "white");
    }
    c
}

pub fn stairs_updown() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_med");
    for y in [0, 4, 8, 12] {
        c.fill_rect(0, y, 16, 1, "stone_dark");
    }
    // Up arrow on the left
    c.fill_rect(3, 4, 2, 8, "white");
    c.set_pixel(2, 5, "white");
    c.set_pixel(5, 5, "white");
    // Down arrow on the right
    c.fill_rect(11, 4, 2, 8, "white");
    c.set_pixel(10, 11, "white");
    c.set_pixel(13, 11, "white");
    c
}

pub fn ramp_up() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_dark");
    for i in 0..16 {
        c.fill_rect(0, 15 - i, i + 1, 1, "stone_med");
    }
    for i in 0..14 {
        c.set_pixel(i, 14 - i, "stone_light");
    }
    c
}

pub fn ramp_down() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(0, 0, 16, 16, "stone_dark");
    for i in 0..16 {
        c.fill_rect(15 - i, 15 - i, i + 1, 1, "stone_med");
    }
    for i in 0..14 {
        c.set_pixel(15 - i, 14 - i, "stone_light");
    }
    c
}
