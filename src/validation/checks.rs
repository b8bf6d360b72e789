//! Checks over the sprite registry and a generated catalog.
//!
//! Each check returns a `ValidationResult`.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::catalog::{
    category_dir, image_filename, imageset_contents, imageset_dir, FolderContents,
    ImagesetContents, CONTENTS_FILENAME, IMAGESET_EXT, SCALES,
};
use crate::render::TILE_SIZE;
use crate::sprites::{self, Category};

use super::warning::{Diagnostic, ValidationResult};

const REBUILD_HELP: &str = "Run `outpost-assets build` to regenerate the catalog";

/// Every drawer must only reference colours the palette defines.
pub fn check_palette_refs() -> ValidationResult {
    let mut result = ValidationResult::new();

    for sprite in sprites::all() {
        let canvas = (sprite.draw)();
        for name in canvas.unresolved() {
            result.push(
                Diagnostic::error(
                    "outpost::validate::unknown-colour",
                    format!("Sprite '{}' uses unknown colour '{}'", sprite.name, name),
                )
                .with_help("Add the colour to the builtin palette"),
            );
        }
    }

    result
}

/// Warn about drawers that leave the whole tile transparent.
pub fn check_blank_sprites() -> ValidationResult {
    let mut result = ValidationResult::new();

    for sprite in sprites::all() {
        if (sprite.draw)().opaque_count() == 0 {
            result.push(Diagnostic::warning(
                "outpost::validate::blank-sprite",
                format!("Sprite '{}' draws no pixels", sprite.name),
            ));
        }
    }

    result
}

/// Check the on-disk catalog under `root` against the registry.
pub fn check_catalog(root: &Path) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !root.is_dir() {
        result.push(
            Diagnostic::error("outpost::validate::missing-catalog", "Catalog root does not exist")
                .at(root)
                .with_help(REBUILD_HELP),
        );
        return result;
    }

    for category in Category::ALL {
        result.merge(check_category(root, category));
    }

    result
}

/// Check one category directory: its namespace descriptor and imagesets.
pub fn check_category(root: &Path, category: Category) -> ValidationResult {
    let mut result = ValidationResult::new();
    let dir = category_dir(root, category);

    if !dir.is_dir() {
        result.push(
            Diagnostic::error(
                "outpost::validate::missing-category",
                format!("Category '{}' has not been generated", category),
            )
            .at(&dir)
            .with_help(REBUILD_HELP),
        );
        return result;
    }

    let descriptor = dir.join(CONTENTS_FILENAME);
    match FolderContents::load(&descriptor) {
        Ok(contents) if contents == FolderContents::namespace() => {}
        Ok(_) => result.push(
            Diagnostic::error(
                "outpost::validate::descriptor-mismatch",
                format!("Category '{}' is not marked as a namespace", category),
            )
            .at(&descriptor),
        ),
        Err(e) => result.push(
            Diagnostic::error("outpost::validate::invalid-descriptor", e.to_string())
                .at(&descriptor)
                .with_help(REBUILD_HELP),
        ),
    }

    let declared: BTreeSet<String> = category
        .sprites()
        .iter()
        .map(|s| format!("{}.{}", s.name, IMAGESET_EXT))
        .collect();

    for entry in dir_entries(&dir, &mut result) {
        let name = entry.file_name().to_string_lossy();

        if name == CONTENTS_FILENAME || declared.contains(&*name) {
            continue;
        }

        if entry.file_type().is_dir() && name.ends_with(IMAGESET_EXT) {
            result.push(Diagnostic::warning(
                "outpost::validate::undeclared-imageset",
                format!("'{}' does not match any sprite in {}", name, category),
            )
            .at(entry.path()));
        } else {
            result.push(Diagnostic::warning(
                "outpost::validate::stray-file",
                format!("Unexpected entry '{}' in {}", name, category),
            )
            .at(entry.path()));
        }
    }

    for sprite in category.sprites() {
        result.merge(check_imageset(root, category, sprite.name));
    }

    result
}

/// Check a single imageset: files present, descriptor matching, sizes right.
pub fn check_imageset(root: &Path, category: Category, name: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let dir = imageset_dir(root, category, name);

    if !dir.is_dir() {
        result.push(
            Diagnostic::error(
                "outpost::validate::missing-imageset",
                format!("Sprite '{}' has no imageset", name),
            )
            .at(&dir)
            .with_help(REBUILD_HELP),
        );
        return result;
    }

    let descriptor = dir.join(CONTENTS_FILENAME);
    let expected = imageset_contents(name);
    match ImagesetContents::load(&descriptor) {
        Ok(contents) if contents == expected => {}
        Ok(contents) => {
            let listed: Vec<&str> = contents.images.iter().map(|i| i.filename.as_str()).collect();
            result.push(
                Diagnostic::error(
                    "outpost::validate::descriptor-mismatch",
                    format!("Descriptor for '{}' lists [{}]", name, listed.join(", ")),
                )
                .at(&descriptor)
                .with_help(REBUILD_HELP),
            );
        }
        Err(e) => result.push(
            Diagnostic::error("outpost::validate::invalid-descriptor", e.to_string())
                .at(&descriptor)
                .with_help(REBUILD_HELP),
        ),
    }

    let mut wanted: BTreeSet<String> = SCALES.iter().map(|&s| image_filename(name, s)).collect();
    wanted.insert(CONTENTS_FILENAME.to_string());

    for entry in dir_entries(&dir, &mut result) {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !wanted.remove(&file_name) {
            result.push(Diagnostic::warning(
                "outpost::validate::stray-file",
                format!("Unexpected file '{}' in imageset '{}'", file_name, name),
            )
            .at(entry.path()));
        }
    }

    for missing in &wanted {
        if missing == CONTENTS_FILENAME {
            // Already reported by the descriptor load above
            continue;
        }
        result.push(
            Diagnostic::error(
                "outpost::validate::missing-image",
                format!("Imageset '{}' is missing {}", name, missing),
            )
            .at(&dir.join(missing))
            .with_help(REBUILD_HELP),
        );
    }

    for scale in SCALES {
        let path = dir.join(image_filename(name, scale));
        if !path.is_file() {
            continue;
        }
        let want = TILE_SIZE as u32 * scale;
        match image::image_dimensions(&path) {
            Ok((w, h)) if w == want && h == want => {}
            Ok((w, h)) => result.push(
                Diagnostic::error(
                    "outpost::validate::wrong-size",
                    format!("{}x{} image, expected {}x{}", w, h, want, want),
                )
                .at(&path),
            ),
            Err(e) => result.push(
                Diagnostic::error("outpost::validate::unreadable-image", e.to_string()).at(&path),
            ),
        }
    }

    result
}

/// Immediate children of `dir` by name, reporting unreadable entries.
fn dir_entries(dir: &Path, result: &mut ValidationResult) -> Vec<DirEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                result.push(Diagnostic::error("outpost::validate::io", e.to_string()).at(&path));
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_dir_entries_sorted() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), "").unwrap();
        std::fs::write(dir.path().join("a.png"), "").unwrap();

        let mut result = ValidationResult::new();
        let names: Vec<String> = dir_entries(dir.path(), &mut result)
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.png", "b.png"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_dir_entries_reports_walk_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.imageset");

        let mut result = ValidationResult::new();
        let entries = dir_entries(&missing, &mut result);

        assert!(entries.is_empty());
        let errors: Vec<_> = result.with_code("outpost::validate::io").collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_error());
        assert_eq!(errors[0].path.as_deref(), Some(missing.as_path()));
    }
}
