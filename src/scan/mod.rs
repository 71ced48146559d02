//! Lexical analysis: source text to token stream.

pub mod location;
pub mod scanner;
pub mod token;
