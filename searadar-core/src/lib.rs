//! # Searadar Core
//!
//! Platform-independent sentence conversion for marine radars.
//!
//! This crate contains pure parsing and validation logic with **zero I/O dependencies**.
//! Hosts deliver one captured text line at a time (from serial, socket or
//! file) and receive typed station messages back.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  searadar-core (no I/O, no async)                            │
//! │  ├── protocol/   (dialect framing, grammars, translators)    │
//! │  ├── message     (TTM / RSD / invalid station messages)      │
//! │  ├── converter   (SearadarConverter trait, Clock)            │
//! │  └── error       (FormatError)                               │
//! └──────────────────────────────────────────────────────────────┘
//!                 ▲
//!    ┌────────────┴────────────┐
//!    │  searadar-cli           │
//!    │  (file/stdin → JSON)    │
//!    └─────────────────────────┘
//! ```
//!
//! ## Supported Dialects
//!
//! | Dialect   | Sentences |
//! |-----------|-----------|
//! | MR-231-3  | TTM, RSD  |
//!
//! ## Feature Flags
//!
//! - `mr231_3` - MR-231-3 support (default)
//!
//! ## Example
//!
//! ```rust
//! use searadar_core::{Mr231_3Converter, SearadarConverter, SearadarStationMessage};
//!
//! let converter = Mr231_3Converter::new();
//! let line = "$RATTM,12,01.50,045.0,T,10.0,090.0,T,05.0,005.0,01.0,01.0,p,T,,A,1F3A*5C";
//! for msg in converter.convert(line).unwrap() {
//!     if let SearadarStationMessage::TrackedTarget(t) = msg {
//!         println!("Target {} at {} / {}", t.target_number, t.distance, t.bearing);
//!     }
//! }
//!
//! // Malformed lines are errors, unsupported sentence types are skipped
//! assert!(converter.convert("$RATTM,12").is_err());
//! assert!(converter.convert("$GPGLL,1,2*00").unwrap().is_empty());
//! ```

pub mod converter;
pub mod error;
pub mod message;
pub mod protocol;

// Re-export commonly used types
pub use converter::{Clock, FixedClock, SearadarConverter, SystemClock};
pub use error::FormatError;
pub use message::{
    InvalidMessage, Iff, RadarSystemDataMessage, SearadarStationMessage, TargetStatus,
    TargetType, TrackedTargetMessage,
};
#[cfg(feature = "mr231_3")]
pub use protocol::mr231_3::Mr231_3Converter;
