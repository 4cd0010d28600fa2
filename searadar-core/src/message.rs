//! Station message types
//!
//! Typed records produced by sentence conversion. Every converter emits
//! [`SearadarStationMessage`] values regardless of the radar dialect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Target tracking status reported by the radar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStatus {
    /// Target has been lost
    Lost,
    /// Target is being acquired or its data is not reliable yet
    UnreliableData,
    /// Target is being actively tracked
    Tracked,
}

impl Default for TargetStatus {
    fn default() -> Self {
        TargetStatus::UnreliableData
    }
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Lost => "LOST",
            TargetStatus::UnreliableData => "UNRELIABLE_DATA",
            TargetStatus::Tracked => "TRACKED",
        }
    }
}

/// Identification friend-or-foe classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Iff {
    Friend,
    Foe,
    Unknown,
}

impl Default for Iff {
    fn default() -> Self {
        Iff::Unknown
    }
}

impl Iff {
    pub fn as_str(&self) -> &'static str {
        match self {
            Iff::Friend => "FRIEND",
            Iff::Foe => "FOE",
            Iff::Unknown => "UNKNOWN",
        }
    }
}

/// Target classification.
///
/// MR-231-3 has no field carrying the target type, so converted targets
/// are always [`TargetType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    #[default]
    Unknown,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Unknown => "UNKNOWN",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(
            impl std::fmt::Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

display_as_str!(TargetStatus, Iff, TargetType);

/// Tracked target report (TTM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedTargetMessage {
    /// Time the sentence was received
    pub msg_rec_time: DateTime<Utc>,
    /// Radar-assigned target number
    pub target_number: u32,
    /// Distance from own ship
    pub distance: f64,
    /// Bearing from own ship in degrees
    pub bearing: f64,
    /// Target course in degrees
    pub course: f64,
    /// Target speed
    pub speed: f64,
    pub status: TargetStatus,
    pub iff: Iff,
    #[serde(rename = "type")]
    pub target_type: TargetType,
}

/// Radar system data report (RSD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSystemDataMessage {
    /// Time the sentence was received
    pub msg_rec_time: DateTime<Utc>,
    pub initial_distance: f64,
    pub initial_bearing: f64,
    pub moving_circle_of_distance: f64,
    pub bearing: f64,
    pub distance_from_ship: f64,
    pub bearing2: f64,
    /// Selected range ring spacing; valid values are listed in
    /// [`DISTANCE_SCALE`](crate::protocol::mr231_3::DISTANCE_SCALE)
    pub distance_scale: f64,
    /// `K` (kilometres) or `N` (nautical miles)
    pub distance_unit: String,
    /// `C` (course up), `H` (head up) or `N` (north up)
    pub display_orientation: String,
    /// `S` or `P`
    pub working_mode: String,
}

/// A sentence that parsed but failed semantic validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidMessage {
    pub msg_rec_time: DateTime<Utc>,
    pub info_msg: String,
}

/// Any record a converter can produce for one input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearadarStationMessage {
    TrackedTarget(TrackedTargetMessage),
    RadarSystemData(RadarSystemDataMessage),
    Invalid(InvalidMessage),
}

impl SearadarStationMessage {
    pub fn msg_rec_time(&self) -> DateTime<Utc> {
        match self {
            SearadarStationMessage::TrackedTarget(m) => m.msg_rec_time,
            SearadarStationMessage::RadarSystemData(m) => m.msg_rec_time,
            SearadarStationMessage::Invalid(m) => m.msg_rec_time,
        }
    }

    /// Short name of the record kind, used for logging and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            SearadarStationMessage::TrackedTarget(_) => "TTM",
            SearadarStationMessage::RadarSystemData(_) => "RSD",
            SearadarStationMessage::Invalid(_) => "INVALID",
        }
    }

    /// Copy of this message with the receipt time replaced.
    ///
    /// Two conversions of the same line differ only in receipt time, so
    /// normalising it makes them comparable.
    pub fn with_msg_rec_time(&self, time: DateTime<Utc>) -> Self {
        let mut m = self.clone();
        match &mut m {
            SearadarStationMessage::TrackedTarget(t) => t.msg_rec_time = time,
            SearadarStationMessage::RadarSystemData(r) => r.msg_rec_time = time,
            SearadarStationMessage::Invalid(i) => i.msg_rec_time = time,
        }
        m
    }
}

impl From<TrackedTargetMessage> for SearadarStationMessage {
    fn from(m: TrackedTargetMessage) -> Self {
        SearadarStationMessage::TrackedTarget(m)
    }
}

impl From<RadarSystemDataMessage> for SearadarStationMessage {
    fn from(m: RadarSystemDataMessage) -> Self {
        SearadarStationMessage::RadarSystemData(m)
    }
}

impl From<InvalidMessage> for SearadarStationMessage {
    fn from(m: InvalidMessage) -> Self {
        SearadarStationMessage::Invalid(m)
    }
}

impl std::fmt::Display for TrackedTargetMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TTM #{:02} dist={:.2} brg={:.1} crs={:.1} spd={:.1} status={} iff={} type={} at {}",
            self.target_number,
            self.distance,
            self.bearing,
            self.course,
            self.speed,
            self.status,
            self.iff,
            self.target_type,
            self.msg_rec_time.to_rfc3339()
        )
    }
}

impl std::fmt::Display for RadarSystemDataMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RSD dist={:.1} brg={:.1} vrm={:.1} ebl={:.1} cursor={:.1}/{:.1} scale={:?}{} orient={} mode={} at {}",
            self.initial_distance,
            self.initial_bearing,
            self.moving_circle_of_distance,
            self.bearing,
            self.distance_from_ship,
            self.bearing2,
            self.distance_scale,
            self.distance_unit,
            self.display_orientation,
            self.working_mode,
            self.msg_rec_time.to_rfc3339()
        )
    }
}

impl std::fmt::Display for InvalidMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "INVALID {} at {}", self.info_msg, self.msg_rec_time.to_rfc3339())
    }
}

impl std::fmt::Display for SearadarStationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearadarStationMessage::TrackedTarget(m) => m.fmt(f),
            SearadarStationMessage::RadarSystemData(m) => m.fmt(f),
            SearadarStationMessage::Invalid(m) => m.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_ttm() -> TrackedTargetMessage {
        TrackedTargetMessage {
            msg_rec_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            target_number: 7,
            distance: 1.5,
            bearing: 45.0,
            course: 90.0,
            speed: 10.0,
            status: TargetStatus::Tracked,
            iff: Iff::Friend,
            target_type: TargetType::Unknown,
        }
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(TargetStatus::default(), TargetStatus::UnreliableData);
        assert_eq!(Iff::default(), Iff::Unknown);
        assert_eq!(TargetType::default(), TargetType::Unknown);
    }

    #[test]
    fn test_ttm_json_field_names() {
        let msg: SearadarStationMessage = sample_ttm().into();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "trackedTarget");
        assert_eq!(json["targetNumber"], 7);
        assert_eq!(json["status"], "TRACKED");
        assert_eq!(json["iff"], "FRIEND");
        assert_eq!(json["type"], "UNKNOWN");
        assert_eq!(json["msgRecTime"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_json_deserialize_back() {
        let msg: SearadarStationMessage = sample_ttm().into();
        let text = serde_json::to_string(&msg).unwrap();
        let back: SearadarStationMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_with_msg_rec_time() {
        let msg: SearadarStationMessage = sample_ttm().into();
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let moved = msg.with_msg_rec_time(later);
        assert_eq!(moved.msg_rec_time(), later);
        assert_ne!(moved, msg);
        assert_eq!(moved.with_msg_rec_time(msg.msg_rec_time()), msg);
    }

    #[test]
    fn test_display() {
        let text = sample_ttm().to_string();
        assert!(text.starts_with("TTM #07 dist=1.50 brg=45.0"));
        assert!(text.contains("status=TRACKED iff=FRIEND type=UNKNOWN"));
    }

    #[test]
    fn test_kind() {
        let invalid = InvalidMessage {
            msg_rec_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            info_msg: "bad".to_string(),
        };
        assert_eq!(SearadarStationMessage::from(invalid).kind(), "INVALID");
        assert_eq!(SearadarStationMessage::from(sample_ttm()).kind(), "TTM");
    }
}
