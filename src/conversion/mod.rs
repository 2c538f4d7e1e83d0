//! Line-to-JSON conversion module
//!
//! This module contains the two converters, their shared configuration and
//! the stream driver that ties reading, converting and writing together.

pub mod config;
pub mod key_value;
pub mod property_list;
pub mod stats;

pub use config::{BlankLinePolicy, ConverterConfig};
pub use key_value::{KeyValueConverter, KeyValueEntry, KeyValueMap};
pub use property_list::{PropertyListConverter, PropertyRecord};
pub use stats::ConversionStats;

use crate::error::{ConversionError, ConversionResult};
use crate::formatter::to_json_bytes;
use crate::parser::read_input;
use serde::Serialize;
use std::io::{Read, Write};

/// A converted document together with the counters from producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<T> {
    pub document: T,
    pub stats: ConversionStats,
}

impl<T> Converted<T> {
    pub fn new(document: T, stats: ConversionStats) -> Self {
        Self { document, stats }
    }
}

/// A single-pass text-to-document converter
pub trait Converter {
    /// The JSON document this converter produces
    type Document: Serialize;

    /// Short name used in log output
    const NAME: &'static str;

    fn config(&self) -> &ConverterConfig;

    /// Convert a complete input buffer. Any malformed record fails the whole
    /// conversion.
    fn convert(&self, input: &str) -> ConversionResult<Converted<Self::Document>>;

    /// Convert and serialize using the configured output style
    fn convert_to_string(&self, input: &str) -> ConversionResult<String> {
        let converted = self.convert(input)?;
        let bytes = to_json_bytes(&converted.document, self.config().output_style)?;
        // serde_json only emits UTF-8
        String::from_utf8(bytes).map_err(|e| {
            ConversionError::output(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

/// Read all of `reader`, convert it and write one JSON document to `writer`.
///
/// Nothing is written unless conversion and serialization both succeed.
pub fn run_converter<C, R, W>(converter: &C, reader: R, mut writer: W) -> ConversionResult<ConversionStats>
where
    C: Converter,
    R: Read,
    W: Write,
{
    let input = read_input(reader)?;
    tracing::debug!(
        converter = C::NAME,
        bytes = input.len(),
        "input read"
    );

    let converted = converter.convert(&input)?;
    let output = to_json_bytes(&converted.document, converter.config().output_style)?;

    writer.write_all(&output).map_err(ConversionError::output)?;
    writer.flush().map_err(ConversionError::output)?;

    let stats = converted.stats;
    tracing::debug!(
        converter = C::NAME,
        lines = stats.lines_read,
        records = stats.records,
        blank_lines = stats.blank_lines,
        duplicate_keys = stats.duplicate_keys,
        style = converter.config().output_style.as_str(),
        output_bytes = output.len(),
        "conversion complete"
    );
    Ok(stats)
}
