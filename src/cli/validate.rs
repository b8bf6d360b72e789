//! Validate command implementation.
//!
//! Checks the sprite registry and a generated catalog without rewriting it.

use std::path::Path;

use clap::Args;

use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_catalog};

use super::CatalogArgs;

/// Check a generated asset catalog against the sprite registry
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let root = args.catalog.resolve(Path::new("."))?;
    printer.status("Checking", &display_path(&root));

    let result = validate_catalog(&root);
    print_diagnostics(&result, printer);

    let failures = if args.strict {
        result.error_count() + result.warning_count()
    } else {
        result.error_count()
    };

    if failures > 0 {
        return Err(AssetError::Validation {
            message: format!(
                "{} in {}",
                plural(failures, "problem", "problems"),
                display_path(&root)
            ),
            help: Some("Run `outpost-assets build` to regenerate the catalog".to_string()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build::generate;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(root: PathBuf, strict: bool) -> ValidateArgs {
        ValidateArgs {
            catalog: CatalogArgs {
                output: Some(root),
                config: None,
            },
            strict,
        }
    }

    #[test]
    fn test_fresh_catalog_validates() {
        let dir = tempdir().unwrap();
        let printer = Printer::new().quiet(true);
        generate(dir.path(), &printer).unwrap();

        run(args(dir.path().to_path_buf(), true), &printer).unwrap();
    }

    #[test]
    fn test_missing_catalog_fails() {
        let dir = tempdir().unwrap();
        let result = run(args(dir.path().join("missing"), false), &Printer::new().quiet(true));
        assert!(matches!(result, Err(AssetError::Validation { .. })));
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let dir = tempdir().unwrap();
        let printer = Printer::new().quiet(true);
        generate(dir.path(), &printer).unwrap();
        fs::write(dir.path().join("Items/readme.txt"), "notes").unwrap();

        run(args(dir.path().to_path_buf(), false), &printer).unwrap();
        assert!(run(args(dir.path().to_path_buf(), true), &printer).is_err());
    }
}
