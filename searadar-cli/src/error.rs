use std::io;
use std::path::PathBuf;

use searadar_core::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O operation failed")]
    Io(#[from] io::Error),
    #[error("Cannot open '{path}'")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed sentence on line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
    #[error("Line {line} is not valid UTF-8")]
    Encoding {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("Cannot serialize message")]
    Json(#[from] serde_json::Error),
}
