//! MR-231-3 radar protocol
//!
//! MR-231-3 radars emit NMEA-style text sentences on their serial or network
//! output. Two sentence types are converted:
//!
//! - **TTM**: tracked target (number, distance, bearing, speed, course,
//!   status and IFF)
//! - **RSD**: radar system data (cursor and range ring settings, distance
//!   scale, units, display orientation, working mode)
//!
//! Sentence layout: `$RA<TYPE>,<f1>,...,<fN>*<checksum>`. The checksum
//! after `*` is neither parsed nor verified.
//!
//! # Pipeline
//!
//! ```text
//! line ─► sentence::split_sentence ─► dispatch on type ─┬─► ttm::parse
//!                                                       └─► rsd::parse ─► rsd::check_distance_scale
//! ```
//!
//! Every step is pure. Receipt time is passed in by the caller
//! ([`convert_at`]) or read once per line from the converter's [`Clock`].

pub mod dispatch;
pub mod grammar;
pub mod rsd;
pub mod sentence;
pub mod ttm;

pub use dispatch::convert_at;
pub use grammar::{FieldClass, Grammar, Violation, RSD_GRAMMAR, TTM_GRAMMAR};
pub use sentence::{split_sentence, RawSentence, SentenceType};

use crate::converter::{Clock, SearadarConverter, SystemClock};
use crate::error::FormatError;
use crate::message::SearadarStationMessage;

/// Permitted RSD distance scale values
pub const DISTANCE_SCALE: [f64; 10] = [0.125, 0.25, 0.5, 1.5, 3.0, 6.0, 12.0, 24.0, 48.0, 96.0];

/// Look up a single-letter code in a code table
pub(crate) fn lookup_code<T: Copy>(table: &[(char, T)], code: &str) -> Option<T> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => table.iter().find(|(k, _)| *k == c).map(|(_, v)| *v),
        _ => None,
    }
}

/// Converter for the MR-231-3 dialect
///
/// # Example
/// ```
/// use searadar_core::converter::{FixedClock, SearadarConverter};
/// use searadar_core::protocol::mr231_3::Mr231_3Converter;
/// use searadar_core::SearadarStationMessage;
///
/// let now = chrono::Utc::now();
/// let converter = Mr231_3Converter::with_clock(FixedClock(now));
/// let msgs = converter
///     .convert("$RATTM,12,01.50,045.0,T,10.0,090.0,T,05.0,005.0,01.0,01.0,b,T,,A,1F3A*5C")
///     .unwrap();
/// match &msgs[..] {
///     [SearadarStationMessage::TrackedTarget(t)] => {
///         assert_eq!(t.target_number, 12);
///         assert_eq!(t.msg_rec_time, now);
///     }
///     _ => panic!("Expected one TTM"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mr231_3Converter<C: Clock = SystemClock> {
    clock: C,
}

impl Mr231_3Converter<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Mr231_3Converter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> SearadarConverter for Mr231_3Converter<C> {
    fn convert(&self, line: &str) -> Result<Vec<SearadarStationMessage>, FormatError> {
        convert_at(line, self.clock.now())
    }
}
