//! Line-oriented text to JSON filters
//!
//! Two converters read comma-delimited lines and emit a single JSON document:
//!
//! - [`KeyValueConverter`]: `key,value` lines to a JSON object (last duplicate
//!   key wins)
//! - [`PropertyListConverter`]: `key,value,unit,annotation` lines to a JSON
//!   array of property objects, leaving out empty units and annotations
//!
//! Any line with too few fields fails the whole conversion.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    run_converter, BlankLinePolicy, ConversionStats, Converted, Converter, ConverterConfig,
    KeyValueConverter, KeyValueMap, PropertyListConverter, PropertyRecord,
};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use formatter::OutputStyle;

/// Convert `key,value` lines to JSON text with default configuration
pub fn convert_key_values(input: &str) -> ConversionResult<String> {
    KeyValueConverter::default().convert_to_string(input)
}

/// Convert `key,value,unit,annotation` lines to JSON text with default configuration
pub fn convert_property_list(input: &str) -> ConversionResult<String> {
    PropertyListConverter::default().convert_to_string(input)
}
