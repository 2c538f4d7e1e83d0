//! Command-line interface shared by the `kv2json` and `props2json` binaries
//!
//! Both binaries read standard input to the end and write one JSON document to
//! standard output. Every flag is optional; with none the defaults from
//! [`ConverterConfig`] apply.

use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::io::{Read, Write};
use std::process::ExitCode;

use crate::conversion::{
    run_converter, BlankLinePolicy, ConversionStats, ConverterConfig, KeyValueConverter,
    PropertyListConverter,
};
use crate::error::ConversionError;
use crate::formatter::OutputStyle;

pub mod logging;

/// Exit status for bad input data
pub const EXIT_DATA_ERROR: u8 = 1;
/// Exit status for stream failures (sysexits EX_IOERR)
pub const EXIT_IO_ERROR: u8 = 74;

/// Which converter a binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    KeyValue,
    PropertyList,
}

impl ConverterKind {
    pub fn bin_name(&self) -> &'static str {
        match self {
            ConverterKind::KeyValue => "kv2json",
            ConverterKind::PropertyList => "props2json",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            ConverterKind::KeyValue => {
                "Convert `key,value` lines on stdin to a JSON object on stdout"
            }
            ConverterKind::PropertyList => {
                "Convert `key,value,unit,annotation` lines on stdin to a JSON array on stdout"
            }
        }
    }
}

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Output layout
    #[arg(long, value_enum, default_value_t = Format::Spaced)]
    pub format: Format,

    /// How to treat empty lines
    #[arg(long, value_enum, default_value_t = BlankLines::Skip)]
    pub blank_lines: BlankLines,

    /// Trim whitespace around every field
    #[arg(long)]
    pub trim: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Spaced,
    Compact,
    Pretty,
}

impl From<Format> for OutputStyle {
    fn from(format: Format) -> Self {
        match format {
            Format::Spaced => OutputStyle::Spaced,
            Format::Compact => OutputStyle::Compact,
            Format::Pretty => OutputStyle::Pretty,
        }
    }
}

/// Blank line options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    #[default]
    Skip,
    Reject,
}

impl From<BlankLines> for BlankLinePolicy {
    fn from(blank_lines: BlankLines) -> Self {
        match blank_lines {
            BlankLines::Skip => BlankLinePolicy::Skip,
            BlankLines::Reject => BlankLinePolicy::Reject,
        }
    }
}

impl Args {
    /// Parse process arguments under the binary's own name and description
    pub fn parse_for(kind: ConverterKind) -> Self {
        let mut matches = Self::command()
            .name(kind.bin_name())
            .about(kind.about())
            .get_matches();
        match Self::from_arg_matches_mut(&mut matches) {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Build a converter configuration from the arguments
    pub fn to_config(&self) -> ConverterConfig {
        ConverterConfig::new()
            .with_output_style(self.format.into())
            .with_blank_lines(self.blank_lines.into())
            .with_trim_fields(self.trim)
    }
}

/// Run one converter over explicit streams
pub fn run<R: Read, W: Write>(
    kind: ConverterKind,
    config: ConverterConfig,
    reader: R,
    writer: W,
) -> anyhow::Result<ConversionStats> {
    let stats = match kind {
        ConverterKind::KeyValue => run_converter(&KeyValueConverter::new(config), reader, writer)?,
        ConverterKind::PropertyList => {
            run_converter(&PropertyListConverter::new(config), reader, writer)?
        }
    };
    Ok(stats)
}

/// Map a failed run to its process exit status
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<ConversionError>() {
        Some(err) if err.is_data_error() => EXIT_DATA_ERROR,
        Some(ConversionError::Input(_)) | Some(ConversionError::Output(_)) => EXIT_IO_ERROR,
        _ => EXIT_DATA_ERROR,
    }
}

/// Human-readable message for a failed run
pub fn error_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ConversionError>() {
        Some(err) => err.user_message(),
        None => format!("{:#}", error),
    }
}

/// Entry point for the binaries: stdin in, stdout out
pub fn main(kind: ConverterKind) -> ExitCode {
    let args = Args::parse_for(kind);
    logging::init(args.verbose);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    match run(kind, args.to_config(), stdin, stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            eprintln!("{}: {}", kind.bin_name(), error_message(&e));
            ExitCode::from(exit_code(&e))
        }
    }
}
