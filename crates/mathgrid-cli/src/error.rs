use std::io;

use mathgrid_generator::GenerateError;

/// Errors that end a command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
    /// No puzzle could be generated.
    #[display("{_0}")]
    Generate(GenerateError),
    /// A saved session file is malformed.
    #[display("invalid session file: {_0}")]
    Session(serde_json::Error),
}
