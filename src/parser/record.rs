use crate::error::{ParseError, ParseResult};
use crate::parser::DELIMITER;

/// One input line split into comma-separated fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a line (terminator already removed) into fields
    pub fn split(line: usize, text: &'a str, trim: bool) -> Self {
        let fields = text
            .split(DELIMITER)
            .map(|field| if trim { field.trim() } else { field })
            .collect();
        Self { line, fields }
    }

    /// 1-based line number in the input
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Check the field count before anything is extracted.
    ///
    /// Returns exactly the first `N` fields; anything past them is ignored.
    pub fn require<const N: usize>(&self) -> ParseResult<[&'a str; N]> {
        if self.fields.len() < N {
            return Err(ParseError::malformed(self.line, N, self.fields.len()));
        }
        let mut out = [""; N];
        out.copy_from_slice(&self.fields[..N]);
        Ok(out)
    }
}
