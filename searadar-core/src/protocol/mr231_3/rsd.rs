//! RSD (radar system data) translation and validation

use chrono::{DateTime, Utc};

use super::grammar::RSD_GRAMMAR;
use super::sentence::RawSentence;
use super::DISTANCE_SCALE;
use crate::error::FormatError;
use crate::message::{InvalidMessage, RadarSystemDataMessage};

/// Data field positions
pub mod field {
    pub const INITIAL_DISTANCE: usize = 1;
    pub const INITIAL_BEARING: usize = 2;
    pub const MOVING_CIRCLE_OF_DISTANCE: usize = 3;
    pub const BEARING: usize = 4;
    pub const DISTANCE_FROM_SHIP: usize = 9;
    pub const BEARING2: usize = 10;
    pub const DISTANCE_SCALE: usize = 11;
    pub const DISTANCE_UNIT: usize = 12;
    pub const DISPLAY_ORIENTATION: usize = 13;
    pub const WORKING_MODE: usize = 14;
}

/// Translate an RSD sentence.
///
/// The distance scale is not validated here, see [`check_distance_scale`].
pub fn parse(
    raw: &RawSentence,
    received_at: DateTime<Utc>,
) -> Result<RadarSystemDataMessage, FormatError> {
    RSD_GRAMMAR.check(raw)?;

    Ok(RadarSystemDataMessage {
        msg_rec_time: received_at,
        initial_distance: raw.number(field::INITIAL_DISTANCE)?,
        initial_bearing: raw.number(field::INITIAL_BEARING)?,
        moving_circle_of_distance: raw.number(field::MOVING_CIRCLE_OF_DISTANCE)?,
        bearing: raw.number(field::BEARING)?,
        distance_from_ship: raw.number(field::DISTANCE_FROM_SHIP)?,
        bearing2: raw.number(field::BEARING2)?,
        distance_scale: raw.number(field::DISTANCE_SCALE)?,
        distance_unit: raw.text(field::DISTANCE_UNIT),
        display_orientation: raw.text(field::DISPLAY_ORIENTATION),
        working_mode: raw.text(field::WORKING_MODE),
    })
}

/// True if `scale` is exactly one of [`DISTANCE_SCALE`]
pub fn is_permitted_scale(scale: f64) -> bool {
    DISTANCE_SCALE.iter().any(|&s| s == scale)
}

/// Check the distance scale of a parsed RSD.
///
/// Returns the [`InvalidMessage`] that replaces the record when the scale is
/// not permitted, `None` when the record is valid.
///
/// # Example
/// ```
/// use searadar_core::protocol::mr231_3::rsd::check_distance_scale;
/// use searadar_core::message::RadarSystemDataMessage;
///
/// let rsd = RadarSystemDataMessage {
///     msg_rec_time: chrono::Utc::now(),
///     initial_distance: 0.0,
///     initial_bearing: 0.0,
///     moving_circle_of_distance: 0.0,
///     bearing: 0.0,
///     distance_from_ship: 0.0,
///     bearing2: 0.0,
///     distance_scale: 2.0,
///     distance_unit: "N".to_string(),
///     display_orientation: "N".to_string(),
///     working_mode: "S".to_string(),
/// };
/// let invalid = check_distance_scale(&rsd).unwrap();
/// assert_eq!(invalid.info_msg, "RSD message. Wrong distance scale value: 2.0");
/// ```
pub fn check_distance_scale(rsd: &RadarSystemDataMessage) -> Option<InvalidMessage> {
    if is_permitted_scale(rsd.distance_scale) {
        return None;
    }
    Some(InvalidMessage {
        msg_rec_time: rsd.msg_rec_time,
        // Debug formatting keeps a fractional part ("2.0") and stays positional
        // ("100000000.0") until 1e16 or below 1e-4
        info_msg: format!(
            "RSD message. Wrong distance scale value: {:?}",
            rsd.distance_scale
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::mr231_3::sentence::split_sentence;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
    }

    fn rsd_line(scale: &str) -> String {
        format!(
            "$RARSD,36.5,331.4,8.4,320.6,1.0,2.0,3.0,4.0,11.6,185.3,{},N,H,P,17,1A2B*7F",
            scale
        )
    }

    #[test]
    fn test_parse_rsd() {
        let raw = split_sentence(&rsd_line("96.0")).unwrap();
        let rsd = parse(&raw, at()).unwrap();
        assert_eq!(
            rsd,
            RadarSystemDataMessage {
                msg_rec_time: at(),
                initial_distance: 36.5,
                initial_bearing: 331.4,
                moving_circle_of_distance: 8.4,
                bearing: 320.6,
                distance_from_ship: 11.6,
                bearing2: 185.3,
                distance_scale: 96.0,
                distance_unit: "N".to_string(),
                display_orientation: "H".to_string(),
                working_mode: "P".to_string(),
            }
        );
    }

    #[test]
    fn test_ignored_fields_are_free_form() {
        let line = "$RARSD,0.0,0.0,0.0,0.0,x,,y z,,0.0,0.0,0.5,K,C,S,,ffff*00";
        let raw = split_sentence(line).unwrap();
        let rsd = parse(&raw, at()).unwrap();
        assert_eq!(rsd.distance_scale, 0.5);
        assert_eq!(rsd.distance_unit, "K");
        assert_eq!(rsd.display_orientation, "C");
        assert_eq!(rsd.working_mode, "S");
    }

    #[test]
    fn test_permitted_scales() {
        for scale in ["0.125", "0.25", "0.5", "1.5", "3.0", "6.0", "12.0", "24.0", "48.0", "96.0"] {
            let raw = split_sentence(&rsd_line(scale)).unwrap();
            let rsd = parse(&raw, at()).unwrap();
            assert_eq!(check_distance_scale(&rsd), None, "scale {}", scale);
        }
    }

    #[test]
    fn test_rejected_scales() {
        for scale in ["2.0", "1.0", "0.1250001", "192.0", "0.0"] {
            let raw = split_sentence(&rsd_line(scale)).unwrap();
            let rsd = parse(&raw, at()).unwrap();
            let invalid = check_distance_scale(&rsd).expect(scale);
            assert_eq!(invalid.msg_rec_time, at());
            assert!(invalid.info_msg.starts_with("RSD message. Wrong distance scale value: "));
        }
    }

    #[test]
    fn test_scale_formatting() {
        let raw = split_sentence(&rsd_line("2.0")).unwrap();
        let rsd = parse(&raw, at()).unwrap();
        assert_eq!(
            check_distance_scale(&rsd).unwrap().info_msg,
            "RSD message. Wrong distance scale value: 2.0"
        );
    }

    #[test]
    fn test_large_scale_formatting() {
        let raw = split_sentence(&rsd_line("100000000.0")).unwrap();
        let rsd = parse(&raw, at()).unwrap();
        assert_eq!(
            check_distance_scale(&rsd).unwrap().info_msg,
            "RSD message. Wrong distance scale value: 100000000.0"
        );
    }

    #[test]
    fn test_equivalent_spelling_is_permitted() {
        // "3.00" parses to exactly 3.0
        let raw = split_sentence(&rsd_line("3.00")).unwrap();
        let rsd = parse(&raw, at()).unwrap();
        assert!(check_distance_scale(&rsd).is_none());
    }

    #[test]
    fn test_grammar_failures() {
        for line in [
            rsd_line("96"),
            rsd_line("96.0").replace(",N,H,P,", ",M,H,P,"),
            rsd_line("96.0").replace("1A2B", "1A2"),
            rsd_line("96.0").replace("36.5", "36.50"),
            rsd_line("96.0").replace(",17,", ",1x,"),
        ] {
            let raw = split_sentence(&line).unwrap();
            assert!(
                matches!(parse(&raw, at()), Err(FormatError::GrammarMismatch { .. })),
                "{}",
                line
            );
        }
    }
}
