//! MR-231-3 sentence framing
//!
//! Splits a raw line into its sentence type tag and positional data fields.
//! No grammar checks happen here; see [`super::grammar`].

use std::str::FromStr;

use crate::error::FormatError;

/// Characters skipped before the sentence type: `$` plus the 2-char talker id
pub const TALKER_PREFIX_LEN: usize = 3;

/// Checksum delimiter; everything after it is ignored
pub const CHECKSUM_DELIMITER: char = '*';

/// Sentence types known to the MR-231-3 dialect
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Tracked target message
    Ttm,
    /// Radar system data
    Rsd,
    /// Anything else; carried so callers can log it
    Other(String),
}

impl SentenceType {
    pub fn as_str(&self) -> &str {
        match self {
            SentenceType::Ttm => "TTM",
            SentenceType::Rsd => "RSD",
            SentenceType::Other(tag) => tag,
        }
    }
}

impl From<&str> for SentenceType {
    fn from(tag: &str) -> Self {
        match tag {
            "TTM" => SentenceType::Ttm,
            "RSD" => SentenceType::Rsd,
            other => SentenceType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line split into fields.
///
/// Index 0 holds the sentence type tag, data fields start at index 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence {
    fields: Vec<String>,
}

impl RawSentence {
    /// Sentence type tag as received (e.g. `"TTM"`)
    pub fn tag(&self) -> &str {
        &self.fields[0]
    }

    pub fn sentence_type(&self) -> SentenceType {
        SentenceType::from(self.tag())
    }

    /// All fields including the tag
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of data fields (tag excluded)
    pub fn data_len(&self) -> usize {
        self.fields.len() - 1
    }

    /// Field at `index`, where 1 is the first data field
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Parse the field at `index` as a number.
    ///
    /// Only called on grammar-checked fields, so a failure means the grammar
    /// and the translator disagree.
    pub fn number<T: FromStr>(&self, index: usize) -> Result<T, FormatError> {
        let value = self.field(index).unwrap_or_default();
        value.parse::<T>().map_err(|_| FormatError::InvalidNumber {
            sentence: self.tag().to_string(),
            index,
            value: value.to_string(),
        })
    }

    /// Field at `index` as an owned string, empty if absent
    pub fn text(&self, index: usize) -> String {
        self.field(index).unwrap_or_default().to_string()
    }

    pub(crate) fn mismatch(&self) -> FormatError {
        FormatError::GrammarMismatch {
            sentence: self.tag().to_string(),
            fields: self.fields.clone(),
        }
    }
}

/// Split a raw line into a [`RawSentence`].
///
/// Takes the text between the talker prefix and the `*` checksum delimiter,
/// trims it and splits on `,`. Empty fields are kept.
///
/// # Example
/// ```
/// use searadar_core::protocol::mr231_3::sentence::{split_sentence, SentenceType};
///
/// let raw = split_sentence("$RARSD,1.0,,2.0*1F\r\n").unwrap();
/// assert_eq!(raw.sentence_type(), SentenceType::Rsd);
/// assert_eq!(raw.field(1), Some("1.0"));
/// assert_eq!(raw.field(2), Some(""));
/// assert_eq!(raw.data_len(), 3);
/// ```
pub fn split_sentence(line: &str) -> Result<RawSentence, FormatError> {
    let end = line
        .find(CHECKSUM_DELIMITER)
        .ok_or(FormatError::MissingChecksumDelimiter)?;

    // Byte offset of the first character after the prefix
    let start = line
        .char_indices()
        .nth(TALKER_PREFIX_LEN)
        .map(|(pos, _)| pos)
        .unwrap_or(line.len());

    if start > end {
        return Err(FormatError::FrameTooShort {
            expected: TALKER_PREFIX_LEN,
            actual: line[..end].chars().count(),
        });
    }

    let body = line[start..end].trim();
    let fields: Vec<String> = body.split(',').map(str::to_string).collect();

    if fields[0].is_empty() {
        return Err(FormatError::MissingSentenceType);
    }

    Ok(RawSentence { fields })
}
