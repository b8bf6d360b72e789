pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod palette;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Printer;

/// outpost-assets - Sprite asset catalog generator for Outpost
#[derive(Parser, Debug)]
#[command(name = "outpost-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings, errors and the final summary
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Defaults to `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw every sprite and write the asset catalog
    Build(build::BuildArgs),

    /// Check a generated asset catalog against the sprite registry
    Validate(validate::ValidateArgs),

    /// List registered sprites
    List(list::ListArgs),

    /// Print the builtin palette, or the colours used in a PNG
    Palette(palette::PaletteArgs),

    /// Write a default outpost.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where the asset catalog lives.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Asset catalog root (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read instead of ./outpost.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CatalogArgs {
    /// Resolve the catalog root: `--output`, then the manifest, then the default.
    pub fn resolve(&self, dir: &Path) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        Ok(Manifest::discover(self.config.as_deref(), dir)?.output)
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        None => build::run(build::BuildArgs::default(), &printer),
        Some(Commands::Build(args)) => build::run(args, &printer),
        Some(Commands::Validate(args)) => validate::run(args, &printer),
        Some(Commands::List(args)) => list::run(args),
        Some(Commands::Palette(args)) => palette::run(args, &printer),
        Some(Commands::Init(args)) => init::run(args, &printer),
        Some(Commands::Completions(args)) => completions::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_build() {
        let cli = Cli::try_parse_from(["outpost-assets"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_build_output() {
        let cli = Cli::try_parse_from(["outpost-assets", "build", "-o", "dist", "-q"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Build(args)) => {
                assert_eq!(args.catalog.output, Some(PathBuf::from("dist")));
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_output_precedence() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("outpost.yaml"), "output: from-manifest").unwrap();

        let args = CatalogArgs::default();
        assert_eq!(args.resolve(dir.path()).unwrap(), PathBuf::from("from-manifest"));

        let args = CatalogArgs {
            output: Some(PathBuf::from("from-cli")),
            config: None,
        };
        assert_eq!(args.resolve(dir.path()).unwrap(), PathBuf::from("from-cli"));
    }

    #[test]
    fn test_resolve_default_output() {
        let dir = tempdir().unwrap();
        let args = CatalogArgs::default();
        assert_eq!(
            args.resolve(dir.path()).unwrap(),
            PathBuf::from("Outpost/Assets.xcassets")
        );
    }
}
