//! Core colour types.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - the fixed table of named sprite colours

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::Palette;
