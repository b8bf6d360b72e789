use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(outpost::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown colour '{name}' referenced by sprite '{sprite}'")]
    #[diagnostic(
        code(outpost::colour),
        help("Add the colour to the builtin palette or use a literal Colour::rgb value")
    )]
    UnknownColour { sprite: String, name: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(outpost::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(outpost::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(outpost::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
