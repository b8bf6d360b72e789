//! outpost-assets - Sprite asset catalog generator
//!
//! Draws the game's fixed set of 16x16 pixel-art sprites from code and
//! writes them into an Xcode asset catalog at 1x, 2x and 3x.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;
pub mod validation;

pub use catalog::{scaffold_category, write_imageset, FolderContents, ImagesetContents, SCALES};
pub use cli::build::generate;
pub use error::{AssetError, Result};
pub use manifest::Manifest;
pub use render::{scale_canvas, write_png, Canvas, Paint, TILE_SIZE};
pub use sprites::{Category, SpriteDef};
pub use types::{Colour, Palette};
pub use validation::{validate_catalog, validate_sprites, Diagnostic, Severity, ValidationResult};
