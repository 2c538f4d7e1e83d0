//! Per-run counters for a conversion pass

/// Counters gathered while converting one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Input lines examined, blank ones included
    pub lines_read: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
    /// Records turned into output entries
    pub records: usize,
    /// Key/value entries that replaced an earlier value for the same key
    pub duplicate_keys: usize,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the resulting document
    pub fn output_entries(&self) -> usize {
        self.records - self.duplicate_keys
    }
}
