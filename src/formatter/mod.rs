//! JSON output formatting
//!
//! Documents are serialized with serde_json. The default [`OutputStyle::Spaced`]
//! layout puts a single space after every `:` and `,` on one line, e.g.
//! `{"a": "1", "b": "2"}`, which is what downstream consumers already see.

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io;

/// Serialized JSON layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// One line, a space after `:` and `,`
    #[default]
    Spaced,
    /// One line, no insignificant whitespace
    Compact,
    /// Multi-line, two-space indent
    Pretty,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Spaced => "spaced",
            OutputStyle::Compact => "compact",
            OutputStyle::Pretty => "pretty",
        }
    }
}

/// Single-line formatter with a space after separators
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` into `writer` in the given style. No trailing newline.
pub fn write_json<W, T>(writer: W, value: &T, style: OutputStyle) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    match style {
        OutputStyle::Spaced => serialize_with(writer, value, SpacedFormatter),
        OutputStyle::Compact => serialize_with(writer, value, CompactFormatter),
        OutputStyle::Pretty => serialize_with(writer, value, PrettyFormatter::new()),
    }
}

/// Serialize `value` into a fresh buffer
pub fn to_json_bytes<T>(value: &T, style: OutputStyle) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    write_json(&mut buffer, value, style)?;
    Ok(buffer)
}

fn serialize_with<W, T, F>(writer: W, value: &T, formatter: F) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}
