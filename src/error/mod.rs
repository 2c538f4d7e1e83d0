//! Error types for line-to-JSON conversion

use std::io;

/// Record-level parse failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A record had fewer fields than the converter requires
    #[error("malformed record at line {line}: expected {expected} fields, got {found}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A blank line was found while blank lines are rejected
    #[error("malformed record at line {line}: blank line")]
    BlankLine { line: usize },
}

impl ParseError {
    pub fn malformed(line: usize, expected: usize, found: usize) -> Self {
        Self::MalformedRecord {
            line,
            expected,
            found,
        }
    }

    pub fn blank(line: usize) -> Self {
        Self::BlankLine { line }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("failed to serialize JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConversionError {
    pub fn input(error: io::Error) -> Self {
        Self::Input(error)
    }

    pub fn output(error: io::Error) -> Self {
        Self::Output(error)
    }

    /// Whether the failure came from the input data rather than the streams
    pub fn is_data_error(&self) -> bool {
        match self {
            Self::Parse(_) => true,
            Self::Input(err) => err.kind() == io::ErrorKind::InvalidData,
            _ => false,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => err.to_string(),
            Self::Input(err) if err.kind() == io::ErrorKind::InvalidData => {
                "input is not valid UTF-8 text".to_string()
            }
            Self::Input(err) => format!("could not read input: {}", err),
            Self::Output(err) => format!("could not write output: {}", err),
            Self::Serialization(err) => format!("could not encode JSON: {}", err),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for record parsing
pub type ParseResult<T> = Result<T, ParseError>;
