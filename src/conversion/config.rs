//! Configuration options for line-to-JSON conversion

use crate::formatter::OutputStyle;

/// What to do with lines that are empty once the terminator is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Skip the line
    #[default]
    Skip,
    /// Treat the line as a malformed record
    Reject,
}

impl BlankLinePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlankLinePolicy::Skip => "skip",
            BlankLinePolicy::Reject => "reject",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(BlankLinePolicy::Skip),
            "reject" | "error" => Ok(BlankLinePolicy::Reject),
            other => Err(format!(
                "Invalid blank line policy '{}'. Use 'skip' or 'reject'",
                other
            )),
        }
    }
}

/// Converter configuration options
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Blank line handling
    pub blank_lines: BlankLinePolicy,
    /// Trim leading/trailing whitespace from every field
    pub trim_fields: bool,
    /// Serialized JSON layout
    pub output_style: OutputStyle,
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    pub fn with_trim_fields(mut self, trim: bool) -> Self {
        self.trim_fields = trim;
        self
    }

    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }
}
