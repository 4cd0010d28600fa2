//! TTM (tracked target message) translation

use chrono::{DateTime, Utc};

use super::grammar::TTM_GRAMMAR;
use super::lookup_code;
use super::sentence::RawSentence;
use crate::error::FormatError;
use crate::message::{Iff, TargetStatus, TargetType, TrackedTargetMessage};

/// Data field positions
pub mod field {
    pub const TARGET_NUMBER: usize = 1;
    pub const DISTANCE: usize = 2;
    pub const BEARING: usize = 3;
    /// First rate field
    pub const SPEED: usize = 5;
    /// Second bearing-like field
    pub const COURSE: usize = 6;
    pub const IFF: usize = 12;
    pub const STATUS: usize = 13;
}

/// Status letter → status. Anything else is [`TargetStatus::UnreliableData`].
pub const STATUS_CODES: &[(char, TargetStatus)] = &[
    ('L', TargetStatus::Lost),
    ('Q', TargetStatus::UnreliableData),
    ('T', TargetStatus::Tracked),
];

/// IFF letter → IFF. Anything else is [`Iff::Unknown`].
pub const IFF_CODES: &[(char, Iff)] = &[
    ('b', Iff::Friend),
    ('p', Iff::Foe),
    ('d', Iff::Unknown),
];

pub fn status_from_code(code: &str) -> TargetStatus {
    lookup_code(STATUS_CODES, code).unwrap_or(TargetStatus::UnreliableData)
}

pub fn iff_from_code(code: &str) -> Iff {
    lookup_code(IFF_CODES, code).unwrap_or(Iff::Unknown)
}

/// Translate a TTM sentence.
///
/// The whole field list must match [`TTM_GRAMMAR`] first. Target type is
/// always [`TargetType::Unknown`]: the dialect has no field for it.
pub fn parse(
    raw: &RawSentence,
    received_at: DateTime<Utc>,
) -> Result<TrackedTargetMessage, FormatError> {
    TTM_GRAMMAR.check(raw)?;

    Ok(TrackedTargetMessage {
        msg_rec_time: received_at,
        target_number: raw.number(field::TARGET_NUMBER)?,
        distance: raw.number(field::DISTANCE)?,
        bearing: raw.number(field::BEARING)?,
        course: raw.number(field::COURSE)?,
        speed: raw.number(field::SPEED)?,
        status: status_from_code(raw.field(field::STATUS).unwrap_or_default()),
        iff: iff_from_code(raw.field(field::IFF).unwrap_or_default()),
        target_type: TargetType::Unknown,
    })
}
