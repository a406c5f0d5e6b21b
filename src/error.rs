use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rast operations
#[derive(Error, Diagnostic, Debug)]
pub enum RastError {
    #[error("IO error: {0}")]
    #[diagnostic(code(rast::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rast::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(rast::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(rast::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A shape's defining point lies outside the surface.
    #[error("geometry out of bounds")]
    #[diagnostic(code(rast::bounds))]
    OutOfBounds,

    /// A fill colour is not one of the recognized palette entries.
    #[error("colour unknown")]
    #[diagnostic(
        code(rast::colour),
        help("run `rast palette` to list the recognized colours")
    )]
    ColourUnknown,
}

pub type Result<T> = std::result::Result<T, RastError>;
