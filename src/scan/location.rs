use std::fmt;

/// A source file and its content, kept around so diagnostics can excerpt
/// the line an error points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub filename: String,
    pub content: String,
}

impl Source {
    /// Returns the 1-based line `number`, without its line terminator.
    pub fn line(&self, number: usize) -> Option<&str> {
        self.content.lines().nth(number.checked_sub(1)?)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filename)
    }
}
