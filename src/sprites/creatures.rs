//! Creature sprites. Drawn on a transparent background.

use crate::render::Canvas;
use crate::types::Colour;

use super::{Category, SpriteDef};

pub const SPRITES: &[SpriteDef] = &[
    SpriteDef::new("creature_dwarf", Category::Creatures, dwarf),
    SpriteDef::new("creature_goblin", Category::Creatures, goblin),
    SpriteDef::new("creature_wolf", Category::Creatures, wolf),
    SpriteDef::new("creature_bear", Category::Creatures, bear),
    SpriteDef::new("creature_giant", Category::Creatures, giant),
    SpriteDef::new("creature_undead", Category::Creatures, undead),
];

pub fn dwarf() -> Canvas {
    let mut c = Canvas::new();
    // Tunic
    c.fill_rect(4, 7, 8, 6, "fabric_blue");
    // Head and beard
    c.fill_rect(5, 2, 6, 5, "skin");
    c.fill_rect(5, 5, 6, 4, "beard_brown");
    c.fill_rect(6, 8, 4, 2, "beard_brown");
    c.set_pixel(6, 3, "black");
    c.set_pixel(9, 3, "black");
    // Helmet
    c.fill_rect(5, 1, 6, 2, "metal_dark");
    c.set_pixel(7, 0, "metal_light");
    c.set_pixel(8, 0, "metal_light");
    // Legs
    c.fill_rect(5, 13, 2, 3, "skin_dark");
    c.fill_rect(9, 13, 2, 3, "skin_dark");
    // Arms
    c.fill_rect(2, 8, 2, 4, "skin");
    c.fill_rect(12, 8, 2, 4, "skin");
    c
}

pub fn goblin() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(5, 6, 6, 7, "goblin_dark");
    c.fill_rect(4, 1, 8, 6, "goblin_green");
    // Ears
    c.set_pixel(3, 2, "goblin_green");
    c.set_pixel(12, 2, "goblin_green");
    // Red eyes
    c.set_pixel(5, 3, Colour::rgb(255, 68, 68));
    c.set_pixel(10, 3, Colour::rgb(255, 68, 68));
    c.fill_rect(6, 5, 4, 1, "black");
    // Legs
    c.fill_rect(5, 13, 2, 3, "goblin_dark");
    c.fill_rect(9, 13, 2, 3, "goblin_dark");
    // Arms
    c.fill_rect(3, 7, 2, 4, "goblin_green");
    c.fill_rect(11, 7, 2, 4, "goblin_green");
    c
}

pub fn wolf() -> Canvas {
    let mut c = Canvas::new();
    // Side-on body facing right
    c.fill_rect(2, 7, 12, 5, "wolf_gray");
    c.fill_rect(11, 4, 5, 5, "wolf_gray");
    c.fill_rect(14, 6, 2, 2, "wolf_dark");
    c.set_pixel(12, 3, "wolf_dark");
    c.set_pixel(14, 3, "wolf_dark");
    c.set_pixel(13, 5, "black");
    // Legs
    c.fill_rect(3, 12, 2, 4, "wolf_dark");
    c.fill_rect(7, 12, 2, 4, "wolf_dark");
    c.fill_rect(11, 10, 2, 4, "wolf_dark");
    // Tail
    c.fill_rect(0, 6, 3, 2, "wolf_gray");
    c
}

pub fn bear() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(2, 5, 12, 8, "bear_brown");
    c.fill_rect(10, 2, 6, 6, "bear_brown");
    // Snout and nose
    c.fill_rect(13, 4, 3, 3, "bear_dark");
    c.set_pixel(15, 5, "black");
    // Ears
    c.fill_rect(10, 1, 2, 2, "bear_dark");
    c.fill_rect(14, 1, 2, 2, "bear_dark");
    c.set_pixel(11, 3, "black");
    // Legs
    c.fill_rect(3, 13, 3, 3, "bear_dark");
    c.fill_rect(8, 13, 3, 3, "bear_dark");
    c
}

pub fn giant() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(3, 4, 10, 10, "giant_purple");
    c.fill_rect(5, 0, 6, 5, "giant_purple");
    c.set_pixel(6, 2, Colour::rgb(255, 255, 128));
    c.set_pixel(9, 2, Colour::rgb(255, 255, 128));
    c.fill_rect(7, 3, 2, 1, "black");
    // Legs
    c.fill_rect(4, 14, 3, 2, Colour::rgb(108, 78, 118));
    c.fill_rect(9, 14, 3, 2, Colour::rgb(108, 78, 118));
    // Arms
    c.fill_rect(1, 5, 2, 6, "giant_purple");
    c.fill_rect(13, 5, 2, 6, "giant_purple");
    c
}

pub fn undead() -> Canvas {
    let mut c = Canvas::new();
    c.fill_rect(5, 6, 6, 8, "undead_dark");
    // Skull
    c.fill_rect(5, 1, 6, 6, "undead_pale");
    c.fill_rect(6, 2, 2, 2, "black");
    c.fill_rect(9, 2, 2, 2, "black");
    // Glowing pupils
    c.set_pixel(6, 2, Colour::rgb(158, 255, 158));
    c.set_pixel(9, 2, Colour::rgb(158, 255, 158));
    c.fill_rect(7, 5, 2, 1, "black");
    // Arms
    c.fill_rect(3, 7, 2, 5, "undead_pale");
    c.fill_rect(11, 7, 2, 5, "undead_pale");
    // Legs
    c.fill_rect(5, 14, 2, 2, "undead_dark");
    c.fill_rect(9, 14, 2, 2, "undead_dark");
    c
}
