//! Build command implementation.
//!
//! Draws every registered sprite and writes the asset catalog.

use std::path::Path;

use clap::Args;

use crate::catalog::{scaffold_category, write_imageset};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::sprites::{self, Category};

use super::CatalogArgs;

/// Draw every sprite and write the asset catalog
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let root = args.catalog.resolve(Path::new("."))?;
    generate(&root, printer)?;
    Ok(())
}

/// Generate the whole catalog under `root`, returning the sprite count.
///
/// Categories are scaffolded first, then sprites are drawn and written one
/// at a time in registry order. The first error aborts the run; sprites
/// already written stay on disk.
pub fn generate(root: &Path, printer: &Printer) -> Result<usize> {
    for category in Category::ALL {
        scaffold_category(root, category)?;
    }

    let mut total = 0;
    for sprite in sprites::all() {
        printer.status("Generating", sprite.name);
        let canvas = sprite.render()?;
        write_imageset(root, sprite.category, sprite.name, &canvas)?;
        total += 1;
    }

    printer.success(
        "Finished",
        &format!("{} in {}", plural(total, "sprite", "sprites"), display_path(root)),
    );

    Ok(total)
}
