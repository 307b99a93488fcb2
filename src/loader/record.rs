use serde::Serialize;

/// One parsed line of the node inventory.
///
/// Fields are addressed by 1-based position. Position 0 is reserved for
/// the match flag and never yields a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub source_line_number: usize,
    fields: Vec<String>,
    #[serde(skip)]
    matching: bool,
}

impl Record {
    pub fn new(source_line_number: usize, fields: Vec<String>) -> Self {
        Self {
            source_line_number,
            fields,
            matching: true,
        }
    }

    /// Builds a record from one line of text.
    pub fn from_line(source_line_number: usize, line: &str) -> Self {
        Self::new(source_line_number, tokens(line).map(str::to_string).collect())
    }

    pub fn field(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.fields.get(idx))
            .map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }

    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_matching(&self) -> bool {
        self.matching
    }

    /// Drops the record from the match set. There is no way back.
    pub(crate) fn reject(&mut self) {
        self.matching = false;
    }
}

/// Trimmed, whitespace-separated tokens of a line.
fn tokens(line: &str) -> std::str::SplitWhitespace<'_> {
    line.split_whitespace()
}
