pub mod cli;
pub mod diagnostics;
