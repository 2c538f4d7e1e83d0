//! Line and field splitting for comma-delimited input
//!
//! Input is consumed as a single UTF-8 buffer and split into [`Record`]s that
//! borrow from it. No quoting or escaping is recognised: every comma is a
//! field separator.

pub mod record;

pub use record::Record;

use crate::conversion::config::{BlankLinePolicy, ConverterConfig};
use crate::error::{ConversionError, ConversionResult, ParseError, ParseResult};
use std::io::Read;

/// Field separator
pub const DELIMITER: char = ',';

/// Read the whole stream into a string.
///
/// Non-UTF-8 input surfaces as an `InvalidData` input error.
pub fn read_input<R: Read>(mut reader: R) -> ConversionResult<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(ConversionError::input)?;
    Ok(buffer)
}

/// Iterator over the records of an input buffer
pub struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    config: &'a ConverterConfig,
    blank_lines: usize,
}

impl<'a> Records<'a> {
    pub fn new(input: &'a str, config: &'a ConverterConfig) -> Self {
        Self {
            lines: input.split('\n').enumerate(),
            config,
            blank_lines: 0,
        }
    }

    /// Number of blank lines skipped so far
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = ParseResult<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let line = index + 1;

            // The piece after a final newline is not a line at all
            if raw.is_empty() && self.lines.clone().next().is_none() {
                return None;
            }

            let text = raw.strip_suffix('\r').unwrap_or(raw);
            if text.is_empty() {
                match self.config.blank_lines {
                    BlankLinePolicy::Skip => {
                        self.blank_lines += 1;
                        continue;
                    }
                    BlankLinePolicy::Reject => {
                        return Some(Err(ParseError::blank(line)))
                    }
                }
            }

            return Some(Ok(Record::split(line, text, self.config.trim_fields)));
        }
    }
}
