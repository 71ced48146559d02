//! Enjoy Rust-like diagnostics!

use std::collections::BTreeMap;
use std::io;

use colored::{Color, Colorize};

use crate::parse::error::SyntaxError;
use crate::scan::location::Source;

const DIAGNOSTIC_LINE_NUMBER_WIDTH: usize = 4;

/// A message attached to one source line.
#[derive(Debug, Clone)]
pub struct DiagnosticItem {
    pub line: usize,
    pub message: String,
    pub color: Option<Color>,
}

/// A renderable diagnostic: a headline, then for every referenced line an
/// excerpt of the source with the attached messages beneath it.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pre_text: String,
    items: BTreeMap<usize, Vec<DiagnosticItem>>,
}

impl Diagnostic {
    pub fn new() -> Self {
        Diagnostic {
            pre_text: String::new(),
            items: BTreeMap::new(),
        }
    }

    pub fn with_pre_text(mut self, pre_text: &str) -> Self {
        self.pre_text = pre_text.to_string();
        self
    }

    pub fn add_item(mut self, item: DiagnosticItem) -> Self {
        self.items.entry(item.line).or_default().push(item);
        self
    }

    pub fn write(&self, source: &Source, writer: &mut dyn io::Write) -> io::Result<()> {
        let spacing = " ".repeat(DIAGNOSTIC_LINE_NUMBER_WIDTH);
        let arrow = "-->".cyan().bold();
        let bar = "|".cyan().bold();
        writeln!(writer, "{}", self.pre_text)?;
        for (line, items) in &self.items {
            writeln!(writer, "{}{} {}:{}", spacing, arrow, source, line)?;
            writeln!(writer, "{} {}", spacing, bar)?;
            if let Some(text) = source.line(*line) {
                let number = format!("{:width$}", line, width = DIAGNOSTIC_LINE_NUMBER_WIDTH)
                    .cyan()
                    .bold();
                writeln!(writer, "{} {} {}", number, bar, text)?;
            }
            for item in items {
                let message = match item.color {
                    Some(color) => item.message.color(color).bold(),
                    None => item.message.normal(),
                };
                writeln!(writer, "{} {} {}", spacing, bar, message)?;
            }
            writeln!(writer, "{} {}", spacing, bar)?;
        }
        Ok(())
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(value: &SyntaxError) -> Self {
        let pre_text = format!(
            "{}: unexpected {}",
            "error(syntax)".red().bold(),
            value.found
        );
        let message = if value.expected.len() == 1 {
            format!("expected {}", value.expected[0])
        } else {
            format!("expected one of [{}]", value.expected_list())
        };
        Diagnostic::new()
            .with_pre_text(&pre_text)
            .add_item(DiagnosticItem {
                line: value.line,
                message,
                color: Some(Color::Red),
            })
    }
}
