//! Radar protocol implementations.
//!
//! This module contains sentence parsing for each supported radar dialect.
//! All functions are pure (no I/O) and suitable for WASM compilation.
//!
//! # Structure
//!
//! Each dialect module provides:
//! - **Sentence framing** - Splitting a line into typed fields
//! - **Grammars** - Fixed positional schemas per sentence type
//! - **Translators** - Field list → station message
//! - **Dispatch** - Sentence type → translator routing
//!
//! # Example
//!
//! ```rust
//! use searadar_core::protocol::mr231_3;
//!
//! let line = "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S,,1A2B*7F";
//! let msgs = mr231_3::convert_at(line, chrono::Utc::now()).unwrap();
//! assert_eq!(msgs.len(), 1);
//! ```

#[cfg(feature = "mr231_3")]
pub mod mr231_3;
