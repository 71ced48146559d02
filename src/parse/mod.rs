//! Grammar checking: recursive descent over the token stream, collecting
//! every mismatch instead of stopping at the first.

pub mod error;
pub mod parser;
