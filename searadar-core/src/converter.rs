//! Converter abstraction
//!
//! A converter turns one captured text line into zero or more station
//! messages. Hosts (serial readers, socket listeners, replay tools) only see
//! this trait, so they can be wired to any dialect.
//!
//! Time is an input: each converter reads its [`Clock`] exactly once per
//! line to stamp the messages it produces.

use chrono::{DateTime, Utc};

use crate::error::FormatError;
use crate::message::SearadarStationMessage;

/// Source of receipt timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Converts raw sentence lines into station messages
pub trait SearadarConverter {
    /// Convert a single line.
    ///
    /// Returns an empty vector for sentence types the converter does not
    /// handle, and `Err` when the line is malformed.
    fn convert(&self, line: &str) -> Result<Vec<SearadarStationMessage>, FormatError>;

    /// Convert a sequence of lines, one result per input line.
    fn convert_all<'a, I>(&self, lines: I) -> Vec<Result<Vec<SearadarStationMessage>, FormatError>>
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        lines.into_iter().map(|line| self.convert(line)).collect()
    }
}
