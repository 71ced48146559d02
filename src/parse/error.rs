use std::fmt;

use thiserror::Error;

use crate::scan::token::{Token, TokenKind};

/// One alternative a grammar rule was prepared to accept.
///
/// Most expectations are a specific lexeme; identifiers and numbers are
/// matched as a class, and the top level expects the input to simply end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedToken {
    Exact(&'static str),
    AnyIdentifier,
    AnyNumber,
    EndOfInput,
}

impl ExpectedToken {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            ExpectedToken::Exact(lexeme) => token.lexeme == *lexeme,
            ExpectedToken::AnyIdentifier => token.kind == TokenKind::Identifier,
            ExpectedToken::AnyNumber => token.kind == TokenKind::Number,
            ExpectedToken::EndOfInput => token.kind == TokenKind::Eof,
        }
    }
}

impl fmt::Display for ExpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedToken::Exact(lexeme) => write!(f, "'{}'", lexeme),
            ExpectedToken::AnyIdentifier => write!(f, "<identifier>"),
            ExpectedToken::AnyNumber => write!(f, "<number>"),
            ExpectedToken::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A single recorded mismatch: the line it was detected on, everything the
/// interrupted rule would have accepted there, and the token actually seen.
#[derive(Debug, Clone, Error)]
pub struct SyntaxError {
    pub line: usize,
    pub expected: Vec<ExpectedToken>,
    pub found: Token,
}

impl SyntaxError {
    /// The expected alternatives joined the way reports print them,
    /// e.g. `'int', 'float', <identifier>`.
    pub fn expected_list(&self) -> String {
        self.expected
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expected.len() == 1 {
            write!(
                f,
                "line {}: expected {}, found {}",
                self.line, self.expected[0], self.found
            )
        } else {
            write!(
                f,
                "line {}: expected one of [{}], found {}",
                self.line,
                self.expected_list(),
                self.found
            )
        }
    }
}
