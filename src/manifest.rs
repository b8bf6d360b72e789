//! Project manifest (outpost.yaml) parsing.
//!
//! The manifest is optional. Without one the catalog is written to the
//! app's asset catalog path relative to the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Default manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "outpost.yaml";

/// Project manifest loaded from outpost.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Asset catalog root the categories are written under.
    pub output: PathBuf,
}

/// Catalog root used when neither the manifest nor the CLI names one.
pub fn default_output() -> PathBuf {
    PathBuf::from("Outpost/Assets.xcassets")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Load manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file has no mapping to apply defaults to
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AssetError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Resolve the manifest to use.
    ///
    /// An explicit path must exist. Otherwise `outpost.yaml` in `dir` is
    /// used when present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialise as YAML for `init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AssetError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}
