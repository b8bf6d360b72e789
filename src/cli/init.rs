//! Init command implementation.
//!
//! Writes an `outpost.yaml` manifest with the default catalog location.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{AssetError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Write a default outpost.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Catalog root to record instead of the default
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite existing outpost.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(AssetError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut manifest = Manifest::default();
    if let Some(output) = args.output {
        manifest.output = output;
    }

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| AssetError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success(
        "Created",
        &format!("{} (output: {})", display_path(&manifest_path), manifest.output.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            output: None,
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        run(args(dir.path().to_path_buf(), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("outpost.yaml")).unwrap();
        assert_eq!(content, "output: Outpost/Assets.xcassets\n");
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("outpost.yaml"), "output: build").unwrap();

        let result = run(args(dir.path().to_path_buf(), false), &Printer::new());
        assert!(matches!(result, Err(AssetError::Build { .. })));

        let content = fs::read_to_string(dir.path().join("outpost.yaml")).unwrap();
        assert_eq!(content, "output: build");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("outpost.yaml"), "output: build").unwrap();

        run(args(dir.path().to_path_buf(), true), &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join("outpost.yaml")).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_custom_output() {
        let dir = tempdir().unwrap();
        let mut init = args(dir.path().to_path_buf(), false);
        init.output = Some(PathBuf::from("App/Art.xcassets"));

        run(init, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join("outpost.yaml")).unwrap();
        assert_eq!(manifest.output, PathBuf::from("App/Art.xcassets"));
    }
}
