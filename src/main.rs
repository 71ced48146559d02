use std::io::Write;
use std::path::{Path, PathBuf};

mod parse;
mod scan;
mod utils;

use parse::parser::Parser;
use scan::location::Source;
use scan::scanner::Scanner;
use scan::token::{Token, TokenKind};
use utils::cli::{self, Action};
use utils::diagnostics::Diagnostic;

fn get_writer(output: &Option<PathBuf>) -> Box<dyn Write> {
    match output {
        Some(path) => Box::new(std::fs::File::create(path).expect("error creating output file")),
        None => Box::new(std::io::stdout()),
    }
}

fn main() {
    let args = cli::parse();
    if args.debug {
        eprintln!(
            "Filename: {:?}\nDebug: {:?}\nTarget: {:?}\nOutput File: {:?}",
            args.input, args.debug, args.target, args.output
        );
    }
    match args.target {
        Action::Scan => main_scan(&args, get_writer(&args.output)),
        Action::Parse => main_parse(&args),
    }
}

fn main_scan(args: &cli::Args, mut writer: Box<dyn Write>) {
    let (_, tokens) = scan(&args.input);
    dump_tokens(&tokens, &mut writer).expect("error writing output");
}

fn dump_tokens(tokens: &[Token], writer: &mut dyn Write) -> std::io::Result<()> {
    for token in tokens {
        if token.kind == TokenKind::Eof {
            break;
        }
        let prefix = match token.kind {
            TokenKind::Identifier => "IDENTIFIER ",
            TokenKind::Number => "NUMBER ",
            TokenKind::Unknown => "UNKNOWN ",
            _ => "",
        };
        writeln!(writer, "{} {}{}", token.line, prefix, token.lexeme)?;
    }
    Ok(())
}

fn main_parse(args: &cli::Args) {
    let (source, tokens) = scan(&args.input);
    let parser = Parser::new(tokens);
    let (accepted, errors) = parser.parse_program();
    if !accepted {
        for error in &errors {
            let diagnostic = Diagnostic::from(error);
            diagnostic
                .write(&source, &mut std::io::stderr())
                .expect("error writing diagnostics");
        }
        std::process::exit(1);
    }
}

fn scan(path: impl AsRef<Path>) -> (Source, Vec<Token>) {
    let filename = path.as_ref().display().to_string();
    let content = std::fs::read_to_string(path).expect("error reading input file");
    let tokens = Scanner::new(&content).tokenize();
    (Source { filename, content }, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(source: &str) -> String {
        let tokens = Scanner::new(source).tokenize();
        let mut out = Vec::new();
        dump_tokens(&tokens, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dump_rows_carry_line_prefix_and_lexeme() {
        let rows = dump("int x = 4.2 ;\n@");
        assert_eq!(
            rows,
            "1 int\n1 IDENTIFIER x\n1 =\n1 NUMBER 4.2\n1 ;\n2 UNKNOWN @\n"
        );
    }

    #[test]
    fn dump_omits_the_end_of_input_sentinel() {
        assert_eq!(dump(""), "");
        assert_eq!(dump("x"), "1 IDENTIFIER x\n");
    }
}
