//! Sprite registry.
//!
//! Every sprite is a named, zero-argument drawer grouped into a category.
//! Each category module exports an ordered `SPRITES` table; the order of the
//! tables here is the order sprites are generated in.

pub mod creatures;
pub mod items;
pub mod terrain;
pub mod ui;

use std::fmt;

use clap::ValueEnum;

use crate::error::{AssetError, Result};
use crate::render::Canvas;

/// Asset catalog group a sprite is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Category {
    Terrain,
    Creatures,
    Items,
    Ui,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 4] = [
        Category::Terrain,
        Category::Creatures,
        Category::Items,
        Category::Ui,
    ];

    /// Directory name inside the asset catalog.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Terrain => "Terrain",
            Category::Creatures => "Creatures",
            Category::Items => "Items",
            Category::Ui => "UI",
        }
    }

    /// Sprites declared in this category, in generation order.
    pub fn sprites(self) -> &'static [SpriteDef] {
        match self {
            Category::Terrain => terrain::SPRITES,
            Category::Creatures => creatures::SPRITES,
            Category::Items => items::SPRITES,
            Category::Ui => ui::SPRITES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A registered sprite: name, category and drawer.
#[derive(Debug, Clone, Copy)]
pub struct SpriteDef {
    pub name: &'static str,
    pub category: Category,
    pub draw: fn() -> Canvas,
}

impl SpriteDef {
    pub const fn new(name: &'static str, category: Category, draw: fn() -> Canvas) -> Self {
        Self {
            name,
            category,
            draw,
        }
    }

    /// Draw the sprite, failing if it referenced a colour the palette lacks.
    pub fn render(&self) -> Result<Canvas> {
        let canvas = (self.draw)();
        if let Some(name) = canvas.unresolved().next() {
            return Err(AssetError::UnknownColour {
                sprite: self.name.to_string(),
                name: name.to_string(),
            });
        }
        Ok(canvas)
    }
}

/// Every sprite in generation order.
pub fn all() -> impl Iterator<Item = &'static SpriteDef> {
    Category::ALL.into_iter().flat_map(|c| c.sprites().iter())
}

/// Sprites in one category, in generation order.
pub fn in_category(category: Category) -> &'static [SpriteDef] {
    category.sprites()
}

/// Look up a sprite by name.
pub fn find(name: &str) -> Option<&'static SpriteDef> {
    all().find(|s| s.name == name)
}

/// Total number of registered sprites.
pub fn count() -> usize {
    Category::ALL.iter().map(|c| c.sprites().len()).sum()
}
