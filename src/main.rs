use clap::Parser;
use miette::Result;
use outpost_assets::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)?;
    Ok(())
}
