//! Line source → converter → message sink

use log::{debug, trace, warn};
use searadar_core::{SearadarConverter, SearadarStationMessage};
use std::io::{BufRead, Write};

use crate::{Cli, CliError, OutputFormat};

/// How the pipeline treats its input and output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub format: OutputFormat,
    /// Abort on the first malformed sentence
    pub strict: bool,
}

impl From<&Cli> for Options {
    fn from(args: &Cli) -> Self {
        Options {
            format: args.format,
            strict: args.strict,
        }
    }
}

/// Counters collected during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-blank lines read
    pub lines: usize,
    pub tracked_targets: usize,
    pub radar_system_data: usize,
    /// RSD sentences rejected by validation
    pub invalid: usize,
    /// Lines of a sentence type the converter doesn't handle
    pub skipped: usize,
    pub format_errors: usize,
}

impl Summary {
    fn count(&mut self, msg: &SearadarStationMessage) {
        match msg {
            SearadarStationMessage::TrackedTarget(_) => self.tracked_targets += 1,
            SearadarStationMessage::RadarSystemData(_) => self.radar_system_data += 1,
            SearadarStationMessage::Invalid(_) => self.invalid += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines: {} TTM, {} RSD, {} invalid, {} skipped, {} malformed",
            self.lines,
            self.tracked_targets,
            self.radar_system_data,
            self.invalid,
            self.skipped,
            self.format_errors
        )
    }
}

fn write_message<W: Write>(
    writer: &mut W,
    msg: &SearadarStationMessage,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, msg)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => writeln!(writer, "{}", msg)?,
    }
    Ok(())
}

/// Convert every line from `reader`, writing the messages to `writer`.
///
/// Blank lines are ignored. Malformed lines, including lines that are not
/// valid UTF-8, are logged and counted, or end the run in strict mode.
pub fn run<C, R, W>(
    converter: &C,
    mut reader: R,
    writer: &mut W,
    options: Options,
) -> Result<Summary, CliError>
where
    C: SearadarConverter,
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();

    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // Captures may carry stray bytes; those lines are malformed, not fatal
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\r', '\n']),
            Err(e) if options.strict => {
                return Err(CliError::Encoding {
                    line: line_no,
                    source: e,
                });
            }
            Err(e) => {
                warn!("Line {}: {}", line_no, e);
                summary.lines += 1;
                summary.format_errors += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        summary.lines += 1;

        match converter.convert(line) {
            Ok(messages) if messages.is_empty() => {
                trace!("Line {}: no message", line_no);
                summary.skipped += 1;
            }
            Ok(messages) => {
                for msg in &messages {
                    debug!("Line {}: {}", line_no, msg.kind());
                    summary.count(msg);
                    write_message(writer, msg, options.format)?;
                }
            }
            Err(e) if options.strict => {
                return Err(CliError::Format {
                    line: line_no,
                    source: e,
                });
            }
            Err(e) => {
                warn!("Line {}: {}", line_no, e);
                summary.format_errors += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use searadar_core::{FixedClock, FormatError, Mr231_3Converter};
    use std::io::Cursor;

    const TTM: &str = "$RATTM,12,01.50,045.0,T,10.0,090.0,T,05.0,005.0,01.0,01.0,b,T,,A,1F3A*5C";
    const RSD: &str = "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S,,1A2B*7F";
    const RSD_BAD_SCALE: &str = "$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,2.0,N,N,S,,1A2B*7F";

    fn converter() -> Mr231_3Converter<FixedClock> {
        Mr231_3Converter::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
        ))
    }

    fn input(lines: &[&str]) -> Cursor<String> {
        Cursor::new(lines.join("\n"))
    }

    #[test]
    fn test_run_json() {
        let mut out = Vec::new();
        let summary = run(
            &converter(),
            input(&[TTM, "", RSD, RSD_BAD_SCALE, "$GPGGA,1*00", "garbage"]),
            &mut out,
            Options::default(),
        )
        .unwrap();

        assert_eq!(
            summary,
            Summary {
                lines: 5,
                tracked_targets: 1,
                radar_system_data: 1,
                invalid: 1,
                skipped: 1,
                format_errors: 1,
            }
        );

        let text = String::from_utf8(out).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["kind"], "trackedTarget");
        assert_eq!(values[0]["status"], "TRACKED");
        assert_eq!(values[0]["iff"], "FRIEND");
        assert_eq!(values[1]["kind"], "radarSystemData");
        assert_eq!(values[1]["distanceScale"], 96.0);
        assert_eq!(values[2]["kind"], "invalid");
        assert_eq!(
            values[2]["infoMsg"],
            "RSD message. Wrong distance scale value: 2.0"
        );
    }

    #[test]
    fn test_run_text() {
        let mut out = Vec::new();
        run(
            &converter(),
            input(&[TTM]),
            &mut out,
            Options {
                format: OutputFormat::Text,
                strict: false,
            },
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("TTM #12 "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_run_strict_stops() {
        let mut out = Vec::new();
        let result = run(
            &converter(),
            input(&[TTM, "$RATTM,12*00", RSD]),
            &mut out,
            Options {
                format: OutputFormat::Json,
                strict: true,
            },
        );
        match result {
            Err(CliError::Format { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, FormatError::GrammarMismatch { .. }));
            }
            r => panic!("Expected format error, got {:?}", r),
        }
        // The first line was already written
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_run_skips_undecodable_line() {
        let mut data = Vec::new();
        data.extend_from_slice(RSD.as_bytes());
        data.extend_from_slice(b"\n$RA\xff\xfeXX,1*00\r\n");
        data.extend_from_slice(RSD.as_bytes());
        data.extend_from_slice(b"\r\n");

        let mut out = Vec::new();
        let summary = run(&converter(), Cursor::new(data), &mut out, Options::default()).unwrap();

        assert_eq!(summary.lines, 3);
        assert_eq!(summary.radar_system_data, 2);
        assert_eq!(summary.format_errors, 1);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_run_strict_undecodable_line() {
        let data = b"$RA\xffTTM,1*00\n".to_vec();
        let mut out = Vec::new();
        let result = run(
            &converter(),
            Cursor::new(data),
            &mut out,
            Options {
                format: OutputFormat::Json,
                strict: true,
            },
        );
        assert!(matches!(result, Err(CliError::Encoding { line: 1, .. })));
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            lines: 3,
            tracked_targets: 1,
            radar_system_data: 1,
            invalid: 0,
            skipped: 1,
            format_errors: 0,
        };
        assert_eq!(
            summary.to_string(),
            "3 lines: 1 TTM, 1 RSD, 0 invalid, 1 skipped, 0 malformed"
        );
    }

    #[test]
    fn test_options_from_cli() {
        use clap::Parser;
        let args = Cli::parse_from(["searadar", "--strict", "-f", "text"]);
        assert_eq!(
            Options::from(&args),
            Options {
                format: OutputFormat::Text,
                strict: true
            }
        );
    }
}
