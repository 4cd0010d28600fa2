//! MR-231-3 sentence dispatch
//!
//! Single entry point routing a line to the translator for its sentence
//! type.

use chrono::{DateTime, Utc};

use super::sentence::{split_sentence, RawSentence, SentenceType};
use super::{rsd, ttm};
use crate::error::FormatError;
use crate::message::SearadarStationMessage;

/// Convert one line, stamping records with `received_at`.
///
/// Returns zero or one message:
/// - `TTM` → a tracked target message
/// - `RSD` → radar system data, or an invalid message when the distance
///   scale is not permitted
/// - any other type → nothing
///
/// # Example
/// ```
/// use searadar_core::protocol::mr231_3::convert_at;
/// use searadar_core::SearadarStationMessage;
///
/// let now = chrono::Utc::now();
/// let msgs = convert_at(
///     "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,2.0,N,N,S,,1A2B*7F",
///     now,
/// )
/// .unwrap();
/// match &msgs[..] {
///     [SearadarStationMessage::Invalid(m)] => assert!(m.info_msg.contains("2.0")),
///     _ => panic!("Expected an invalid message"),
/// }
///
/// assert!(convert_at("$GPGGA,1,2,3*00", now).unwrap().is_empty());
/// ```
pub fn convert_at(
    line: &str,
    received_at: DateTime<Utc>,
) -> Result<Vec<SearadarStationMessage>, FormatError> {
    let raw = split_sentence(line)?;
    let mut messages: Vec<SearadarStationMessage> = Vec::with_capacity(1);

    match raw.sentence_type() {
        SentenceType::Ttm => {
            messages.push(ttm::parse(&raw, received_at)?.into());
        }
        SentenceType::Rsd => {
            messages.push(convert_rsd(&raw, received_at)?);
        }
        SentenceType::Other(tag) => {
            log::trace!("Skipping unsupported sentence type {}", tag);
        }
    }

    Ok(messages)
}

fn convert_rsd(
    raw: &RawSentence,
    received_at: DateTime<Utc>,
) -> Result<SearadarStationMessage, FormatError> {
    let rsd = rsd::parse(raw, received_at)?;
    match rsd::check_distance_scale(&rsd) {
        Some(invalid) => {
            log::debug!("{}", invalid.info_msg);
            Ok(invalid.into())
        }
        None => Ok(rsd.into()),
    }
}
