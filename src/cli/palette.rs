//! Palette command implementation.
//!
//! Without a file, prints the builtin palette. With a PNG, samples its
//! colours by frequency and names the ones the palette knows.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Colour, Palette};

/// Print the builtin palette, or the colours used in a PNG
#[derive(Args, Debug, Default)]
pub struct PaletteArgs {
    /// PNG file to extract colours from
    pub file: Option<PathBuf>,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::builtin();

    let Some(path) = &args.file else {
        for (name, colour) in palette.iter().take(args.max.unwrap_or(usize::MAX)) {
            println!("${}: {}", name, colour);
        }
        return Ok(());
    };

    let mut colours = sample(path)?;
    if let Some(max) = args.max {
        colours.truncate(max);
    }

    printer.status(
        "Sampled",
        &format!("{} from {}", plural(colours.len(), "colour", "colours"), display_path(path)),
    );

    for line in annotate(&colours, palette) {
        println!("{}", line);
    }

    Ok(())
}

/// Count visible colours in a PNG, most common first.
fn sample(path: &Path) -> Result<Vec<(Colour, usize)>> {
    let img = image::open(path)
        .map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
    for pixel in img.pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    let mut colours: Vec<(Colour, usize)> = counts
        .into_iter()
        .map(|(rgba, n)| (Colour::from_rgba(rgba), n))
        .collect();
    // Ties broken by colour so output is stable
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_rgba().cmp(&b.0.to_rgba())));

    Ok(colours)
}

fn annotate(colours: &[(Colour, usize)], palette: &Palette) -> Vec<String> {
    colours
        .iter()
        .enumerate()
        .map(|(i, (colour, count))| match palette.name_of(*colour) {
            Some(name) => format!("${}: {} ({})", name, colour, count),
            None => format!("$colour-{}: {} ({})", i + 1, colour, count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::write_png;
    use crate::sprites;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_sample_selection_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui_selection.png");
        let canvas = sprites::find("ui_selection").unwrap().render().unwrap();
        write_png(&canvas, &path, 1).unwrap();

        let colours = sample(&path).unwrap();
        assert_eq!(colours.len(), 1);
        assert_eq!(colours[0].1, 28);

        let lines = annotate(&colours, Palette::builtin());
        assert_eq!(lines, vec!["$select_yellow: #FFEE44 (28)".to_string()]);
    }

    #[test]
    fn test_annotate_unknown_colour() {
        let colours = vec![(Colour::rgb(1, 2, 3), 4)];
        let lines = annotate(&colours, Palette::builtin());
        assert_eq!(lines, vec!["$colour-1: #010203 (4)".to_string()]);
    }

    #[test]
    fn test_sample_missing_file() {
        let dir = tempdir().unwrap();
        let err = sample(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
