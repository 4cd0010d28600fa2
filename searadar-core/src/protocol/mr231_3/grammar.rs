//! Fixed sentence grammars
//!
//! Each sentence type has a positional schema: one [`FieldClass`] per data
//! field. A sentence matches only if it has exactly that many fields and
//! every field is accepted by its class. Nothing is extracted on a partial
//! match.

use super::sentence::RawSentence;
use crate::error::FormatError;

/// Syntactic class of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Exactly `n` digits
    Digits(usize),
    /// Zero or more digits
    OptionalDigits,
    /// Exactly `int` digits, `.`, exactly `frac` digits
    Fixed { int: usize, frac: usize },
    /// At least one digit, `.`, exactly `frac` digits
    Decimal { frac: usize },
    /// At least one digit, `.`, at least one digit
    Float,
    /// One character out of the set
    Code(&'static [char]),
    /// Exactly `n` hex digits, either case
    Hex(usize),
    /// Matched but never looked at
    Any,
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl FieldClass {
    pub fn accepts(&self, field: &str) -> bool {
        match *self {
            FieldClass::Digits(n) => field.len() == n && is_digits(field),
            FieldClass::OptionalDigits => is_digits(field),
            FieldClass::Fixed { int, frac } => match field.split_once('.') {
                Some((i, f)) => i.len() == int && f.len() == frac && is_digits(i) && is_digits(f),
                None => false,
            },
            FieldClass::Decimal { frac } => match field.split_once('.') {
                Some((i, f)) => !i.is_empty() && f.len() == frac && is_digits(i) && is_digits(f),
                None => false,
            },
            FieldClass::Float => match field.split_once('.') {
                Some((i, f)) => !i.is_empty() && !f.is_empty() && is_digits(i) && is_digits(f),
                None => false,
            },
            FieldClass::Code(set) => {
                let mut chars = field.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => set.contains(&c),
                    _ => false,
                }
            }
            FieldClass::Hex(n) => field.len() == n && field.bytes().all(|b| b.is_ascii_hexdigit()),
            FieldClass::Any => true,
        }
    }
}

/// Reason a sentence failed its grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Wrong number of data fields
    FieldCount { expected: usize, actual: usize },
    /// Sentence tag doesn't belong to this grammar
    SentenceType { expected: &'static str, actual: String },
    /// Data field at `index` (1-based) rejected by its class
    Field {
        index: usize,
        class: FieldClass,
        value: String,
    },
}

/// Positional schema for one sentence type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    pub sentence: &'static str,
    pub fields: &'static [FieldClass],
}

impl Grammar {
    /// Number of data fields the sentence must have
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// List every way `raw` deviates from this grammar.
    ///
    /// Field classes are only checked when the field count is right.
    pub fn violations(&self, raw: &RawSentence) -> Vec<Violation> {
        let mut violations = Vec::new();

        if raw.tag() != self.sentence {
            violations.push(Violation::SentenceType {
                expected: self.sentence,
                actual: raw.tag().to_string(),
            });
        }

        if raw.data_len() != self.arity() {
            violations.push(Violation::FieldCount {
                expected: self.arity(),
                actual: raw.data_len(),
            });
            return violations;
        }

        for (offset, class) in self.fields.iter().enumerate() {
            let index = offset + 1;
            let value = raw.field(index).unwrap_or_default();
            if !class.accepts(value) {
                violations.push(Violation::Field {
                    index,
                    class: *class,
                    value: value.to_string(),
                });
            }
        }

        violations
    }

    /// All-or-nothing match of the complete field list
    pub fn check(&self, raw: &RawSentence) -> Result<(), FormatError> {
        let violations = self.violations(raw);
        if violations.is_empty() {
            Ok(())
        } else {
            log::debug!("{} grammar violations: {:?}", self.sentence, violations);
            Err(raw.mismatch())
        }
    }
}

const REF_TRUE: FieldClass = FieldClass::Code(&['T']);
const MAGNITUDE: FieldClass = FieldClass::Fixed { int: 2, frac: 1 };
const ANGLE: FieldClass = FieldClass::Fixed { int: 3, frac: 1 };
const TENTHS: FieldClass = FieldClass::Decimal { frac: 1 };
const CHECKSUM: FieldClass = FieldClass::Hex(4);

/// Tracked target message
///
/// `TTM,nn,dd.dd,bbb.b,T,ss.s,ccc.c,T,xx.x,xxx.x,xx.x,xx.x,<iff>,<status>,n*,<A|P>,hhhh`
pub const TTM_GRAMMAR: Grammar = Grammar {
    sentence: "TTM",
    fields: &[
        FieldClass::Digits(2),                  // 1 target number
        FieldClass::Fixed { int: 2, frac: 2 },  // 2 distance
        ANGLE,                                  // 3 bearing
        REF_TRUE,                               // 4
        MAGNITUDE,                              // 5 speed
        ANGLE,                                  // 6 course
        REF_TRUE,                               // 7
        MAGNITUDE,                              // 8
        ANGLE,                                  // 9
        MAGNITUDE,                              // 10
        MAGNITUDE,                              // 11
        FieldClass::Code(&['b', 'p', 'd']),     // 12 IFF
        FieldClass::Code(&['L', 'Q', 'T']),     // 13 status
        FieldClass::OptionalDigits,             // 14
        FieldClass::Code(&['A', 'P']),          // 15 validity
        CHECKSUM,                               // 16
    ],
};

/// Radar system data
///
/// Fields 5-8 (second origin and its VRM/EBL) are not used and not checked.
pub const RSD_GRAMMAR: Grammar = Grammar {
    sentence: "RSD",
    fields: &[
        TENTHS,                                 // 1 initial distance
        TENTHS,                                 // 2 initial bearing
        TENTHS,                                 // 3 moving circle of distance
        TENTHS,                                 // 4 bearing
        FieldClass::Any,                        // 5
        FieldClass::Any,                        // 6
        FieldClass::Any,                        // 7
        FieldClass::Any,                        // 8
        TENTHS,                                 // 9 distance from ship
        TENTHS,                                 // 10 bearing 2
        FieldClass::Float,                      // 11 distance scale
        FieldClass::Code(&['K', 'N']),          // 12 distance unit
        FieldClass::Code(&['C', 'H', 'N']),     // 13 display orientation
        FieldClass::Code(&['S', 'P']),          // 14 working mode
        FieldClass::OptionalDigits,             // 15
        CHECKSUM,                               // 16
    ],
};
