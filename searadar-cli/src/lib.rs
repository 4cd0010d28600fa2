//! # Searadar CLI
//!
//! Converts captured radar sentences into station messages.
//!
//! The tool plays both collaborator roles around [`searadar_core`]:
//! it supplies lines (from a capture file or stdin) and sinks the produced
//! messages (JSON lines or text on stdout). Logging goes to stderr.
//!
//! ```text
//! capture file / stdin ─► pipeline::run ─► SearadarConverter ─► stdout
//!                              │
//!                              └─► log (format errors, summary)
//! ```
//!
//! ## Command-Line Interface
//!
//! See [`Cli`] for all available options. Key options:
//!
//! - `-i, --input` - Capture file to read (default: stdin)
//! - `-f, --format` - `json` (default) or `text`
//! - `--strict` - Stop at the first malformed sentence
//! - `-v` - Increase verbosity (use multiple times)

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub mod error;
pub mod pipeline;

pub use error::CliError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human readable, one message per line
    Text,
}

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    #[value(name = "mr231-3")]
    Mr231_3,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mr231_3 => write!(f, "MR-231-3"),
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "searadar", version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Capture file with one sentence per line; stdin when absent
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value_t, value_enum)]
    pub format: OutputFormat,

    /// Sentence dialect spoken by the radar
    #[arg(short, long, default_value_t, value_enum)]
    pub dialect: Dialect,

    /// Stop at the first malformed sentence instead of skipping it
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Open the line source: the given file, or stdin
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| CliError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::debug!("Reading sentences from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            log::debug!("Reading sentences from stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}
