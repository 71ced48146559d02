use std::fmt;

/// Lexical class of a token.
///
/// The parser dispatches on this closed set; the exact spelling of a
/// keyword, operator or punctuation mark lives in the token's lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Reserved word: `int`, `float`, `double`, `char`, `if`, `else`,
    /// `while`, `for`, `main` or `return`.
    Keyword,
    Identifier,
    /// Digit run with at most one decimal point, e.g. `42` or `3.14`.
    Number,
    Operator,
    /// `(`, `)`, `{`, `}`, `;` or `,`.
    Punctuation,
    /// A character outside the language, passed through as a
    /// one-character token so the parser can report it in context.
    Unknown,
    /// Sentinel appended once after the last real token.
    Eof,
}

/// A token, the exact text it was scanned from, and the 1-based line of
/// its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn eof(line: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Number => write!(f, "number '{}'", self.lexeme),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
