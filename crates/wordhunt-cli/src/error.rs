use std::io;

use wordhunt_core::BoardError;
use wordhunt_generator::GeneratorError;
use wordhunt_solver::DictionaryError;

/// Errors reported by the `wordhunt` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The word list could not be loaded.
    #[display("{_0}")]
    Dictionary(DictionaryError),
    /// The board arguments were malformed.
    #[display("invalid board: {_0}")]
    Board(BoardError),
    /// No board reached the requested score.
    #[display("{_0}")]
    Generator(GeneratorError),
    /// Output could not be written.
    #[display("failed to write output: {_0}")]
    Io(io::Error),
}
