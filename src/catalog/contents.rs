//! `Contents.json` descriptors for the asset catalog.
//!
//! Field names and layout match what the consuming app's asset loader
//! expects, so these types serialise with explicit renames.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Authoring tool marker written into every descriptor.
pub const AUTHOR: &str = "xcode";

/// Descriptor format version.
pub const VERSION: u32 = 1;

/// Device idiom for every image entry.
pub const IDIOM: &str = "universal";

/// The `info` block shared by all descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: AUTHOR.to_string(),
            version: VERSION,
        }
    }
}

/// Descriptor for a category folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderContents {
    pub info: Info,
    pub properties: FolderProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderProperties {
    #[serde(rename = "provides-namespace")]
    pub provides_namespace: bool,
}

impl FolderContents {
    /// A folder that namespaces the assets inside it.
    pub fn namespace() -> Self {
        Self {
            info: Info::default(),
            properties: FolderProperties {
                provides_namespace: true,
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

/// Descriptor for one `.imageset` directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesetContents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

/// One scaled image file inside an imageset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

impl ImageEntry {
    pub fn new(filename: impl Into<String>, scale: u32) -> Self {
        Self {
            filename: filename.into(),
            idiom: IDIOM.to_string(),
            scale: scale_label(scale),
        }
    }
}

impl ImagesetContents {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            info: Info::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

/// Scale label used in descriptors, e.g. `2x`.
pub fn scale_label(scale: u32) -> String {
    format!("{}x", scale)
}

/// Serialise a descriptor as pretty JSON (two-space indent).
pub fn to_json<T: Serialize>(contents: &T) -> Result<String> {
    serde_json::to_string_pretty(contents).map_err(|e| AssetError::Build {
        message: format!("Failed to serialize Contents.json: {}", e),
        help: None,
    })
}

/// Write a descriptor to `path`, replacing any existing file.
pub fn write_json<T: Serialize>(contents: &T, path: &Path) -> Result<()> {
    let json = to_json(contents)?;
    fs::write(path, json).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write Contents.json: {}", e),
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read Contents.json: {}", e),
    })?;

    serde_json::from_str(&content).map_err(|e| AssetError::Parse {
        message: format!("Invalid {}: {}", path.display(), e),
        help: Some("Regenerate the catalog with `outpost-assets build`".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_folder_contents_json() {
        let json = to_json(&FolderContents::namespace()).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "info": {
            "author": "xcode",
            "version": 1
          },
          "properties": {
            "provides-namespace": true
          }
        }
        "###);
    }

    #[test]
    fn test_imageset_contents_json() {
        let contents = ImagesetContents::new(vec![
            ImageEntry::new("terrain_grass.png", 1),
            ImageEntry::new("terrain_grass@2x.png", 2),
            ImageEntry::new("terrain_grass@3x.png", 3),
        ]);
        let json = to_json(&contents).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "images": [
            {
              "filename": "terrain_grass.png",
              "idiom": "universal",
              "scale": "1x"
            },
            {
              "filename": "terrain_grass@2x.png",
              "idiom": "universal",
              "scale": "2x"
            },
            {
              "filename": "terrain_grass@3x.png",
              "idiom": "universal",
              "scale": "3x"
            }
          ],
          "info": {
            "author": "xcode",
            "version": 1
          }
        }
        "###);
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Contents.json");

        let contents = ImagesetContents::new(vec![ImageEntry::new("a.png", 1)]);
        write_json(&contents, &path).unwrap();

        assert_eq!(ImagesetContents::load(&path).unwrap(), contents);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Contents.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FolderContents::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = FolderContents::load(&dir.path().join("Contents.json")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
