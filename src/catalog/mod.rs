//! Asset catalog output.
//!
//! Layout under the catalog root:
//!
//! ```text
//! <root>/<Category>/Contents.json
//! <root>/<Category>/<name>.imageset/{<name>.png, <name>@2x.png, <name>@3x.png, Contents.json}
//! ```
//!
//! Writes always overwrite, so re-running against an existing catalog is safe.

mod contents;

pub use contents::{
    scale_label, to_json, write_json, FolderContents, FolderProperties, ImageEntry,
    ImagesetContents, Info, AUTHOR, IDIOM, VERSION,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};
use crate::render::{write_png, Canvas};
use crate::sprites::Category;

/// Scale factors every sprite is exported at.
pub const SCALES: [u32; 3] = [1, 2, 3];

/// Descriptor filename in every catalog directory.
pub const CONTENTS_FILENAME: &str = "Contents.json";

/// Directory suffix for a single sprite.
pub const IMAGESET_EXT: &str = "imageset";

/// Image filename for a sprite at a scale: `name.png`, `name@2x.png`, ...
pub fn image_filename(name: &str, scale: u32) -> String {
    if scale == 1 {
        format!("{}.png", name)
    } else {
        format!("{}@{}x.png", name, scale)
    }
}

/// Path of a category directory.
pub fn category_dir(root: &Path, category: Category) -> PathBuf {
    root.join(category.dir_name())
}

/// Path of a sprite's imageset directory.
pub fn imageset_dir(root: &Path, category: Category, name: &str) -> PathBuf {
    category_dir(root, category).join(format!("{}.{}", name, IMAGESET_EXT))
}

/// The descriptor an imageset for `name` must carry.
pub fn imageset_contents(name: &str) -> ImagesetContents {
    ImagesetContents::new(
        SCALES
            .iter()
            .map(|&scale| ImageEntry::new(image_filename(name, scale), scale))
            .collect(),
    )
}

/// Create a category directory and its namespace descriptor.
///
/// Idempotent; must run before any sprite in the category is written.
pub fn scaffold_category(root: &Path, category: Category) -> Result<PathBuf> {
    let dir = category_dir(root, category);
    create_dir(&dir)?;
    write_json(&FolderContents::namespace(), &dir.join(CONTENTS_FILENAME))?;
    Ok(dir)
}

/// Write a sprite's scaled PNGs and descriptor into its imageset directory.
///
/// The category directory must already exist. Returns the imageset path.
pub fn write_imageset(
    root: &Path,
    category: Category,
    name: &str,
    canvas: &Canvas,
) -> Result<PathBuf> {
    let parent = category_dir(root, category);
    if !parent.is_dir() {
        return Err(AssetError::Build {
            message: format!("Category directory {} does not exist", parent.display()),
            help: Some(format!("Scaffold the {} category first", category)),
        });
    }

    let dir = imageset_dir(root, category, name);
    create_dir(&dir)?;

    for scale in SCALES {
        write_png(canvas, &dir.join(image_filename(name, scale)), scale)?;
    }

    write_json(&imageset_contents(name), &dir.join(CONTENTS_FILENAME))?;

    Ok(dir)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| AssetError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}
