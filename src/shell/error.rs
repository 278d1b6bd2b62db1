use std::num::ParseIntError;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{source}")]
    InvalidText {
        #[source]
        source: FromUtf8Error,
    },

    #[error("database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while a prompt was waiting.
    #[error("end of input")]
    EndOfInput,
}
