use std::io;

/// Errors that can occur while loading a [`Dictionary`](crate::Dictionary).
///
/// Malformed tokens in the word list are not errors; they are skipped during
/// loading. Only failing to read the source is reported.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DictionaryError {
    /// The word list could not be opened or read.
    #[display("failed to read word list: {_0}")]
    Io(io::Error),
}
