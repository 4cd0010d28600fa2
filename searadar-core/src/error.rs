//! Error types for sentence parsing

use thiserror::Error;

/// Errors that make a single sentence line unusable.
///
/// A `FormatError` aborts conversion of that line only. Lines that parse
/// but carry data-invalid values are not errors; they become an
/// [`InvalidMessage`](crate::message::InvalidMessage) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Line has no `*` checksum delimiter
    #[error("Missing checksum delimiter '*' in sentence")]
    MissingChecksumDelimiter,

    /// Frame is too short to contain the talker prefix before the `*`
    #[error("Frame too short: expected at least {expected} characters before '*', got {actual}")]
    FrameTooShort { expected: usize, actual: usize },

    /// Body has no sentence type tag
    #[error("Missing sentence type")]
    MissingSentenceType,

    /// Field list doesn't match the fixed grammar of its sentence type
    #[error("Invalid {sentence} format: {fields:?}")]
    GrammarMismatch {
        sentence: String,
        fields: Vec<String>,
    },

    /// A grammar-checked field failed numeric conversion
    #[error("Invalid number in {sentence} field {index}: {value:?}")]
    InvalidNumber {
        sentence: String,
        index: usize,
        value: String,
    },
}
