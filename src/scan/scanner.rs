use super::token::{Token, TokenKind};

/// Cursor over the raw characters of one source buffer.
///
/// Scanning is total: characters outside the language come out as
/// [`TokenKind::Unknown`] tokens and an unterminated block comment simply
/// runs to end of input, so the parser always receives a complete stream
/// to judge.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Consumes the scanner and produces the token sequence, terminated by
    /// exactly one end-of-input sentinel carrying the final line number.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let line = self.line;
            let first = match self.advance() {
                Some(c) => c,
                None => {
                    tokens.push(Token::eof(self.line));
                    break;
                }
            };
            let token = match first {
                c if c.is_alphabetic() => self.next_word(c, line),
                c if c.is_ascii_digit() => self.next_number(c, line),
                '(' | ')' | '{' | '}' | ';' | ',' => Token {
                    kind: TokenKind::Punctuation,
                    lexeme: first.to_string(),
                    line,
                },
                c => self.next_operator(c, line),
            };
            tokens.push(token);
        }
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_ahead(&self, by: usize) -> Option<char> {
        self.chars.get(self.pos + by).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => self.skip_line_comment(),
                Some('/') if self.peek_ahead(1) == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            // The newline stays put; the whitespace loop counts it.
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match self.peek() {
                // Unterminated comment scans as if closed here.
                None => break,
                Some('*') if self.peek_ahead(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Accumulates an identifier and reclassifies it when the whole word is
    /// a reserved one. `int2` stays an identifier; `int` never does.
    fn next_word(&mut self, first: char, line: usize) -> Token {
        let mut lexeme = String::from(first);
        loop {
            match self.peek() {
                Some(c) if c.is_alphanumeric() || c == '_' => {
                    lexeme.push(c);
                    self.advance();
                }
                _ => break,
            }
        }
        let kind = match lexeme.as_str() {
            "int" | "float" | "double" | "char" | "if" | "else" | "while" | "for" | "main"
            | "return" => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        };
        Token { kind, lexeme, line }
    }

    /// A digit run with at most one decimal point; a second point ends the
    /// literal right there.
    fn next_number(&mut self, first: char, line: usize) -> Token {
        let mut lexeme = String::from(first);
        let mut seen_point = false;
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    lexeme.push(c);
                    self.advance();
                }
                Some('.') if !seen_point => {
                    seen_point = true;
                    lexeme.push('.');
                    self.advance();
                }
                _ => break,
            }
        }
        Token {
            kind: TokenKind::Number,
            lexeme,
            line,
        }
    }

    /// Maximal munch over the operator tables: the two-character forms are
    /// tried before the one-character ones. Anything that matches neither
    /// table becomes an unknown token (`*` and a bare `!` land there).
    fn next_operator(&mut self, first: char, line: usize) -> Token {
        let (kind, second) = match (first, self.peek()) {
            ('<', Some('=')) => (TokenKind::Operator, Some('=')),
            ('>', Some('=')) => (TokenKind::Operator, Some('=')),
            ('=', Some('=')) => (TokenKind::Operator, Some('=')),
            ('!', Some('=')) => (TokenKind::Operator, Some('=')),
            ('&', Some('&')) => (TokenKind::Operator, Some('&')),
            ('&', Some('=')) => (TokenKind::Operator, Some('=')),
            ('|', Some('|')) => (TokenKind::Operator, Some('|')),
            ('|', Some('=')) => (TokenKind::Operator, Some('=')),
            ('+', Some('=')) => (TokenKind::Operator, Some('=')),
            ('-', Some('=')) => (TokenKind::Operator, Some('=')),
            ('/', Some('=')) => (TokenKind::Operator, Some('=')),
            ('%', Some('=')) => (TokenKind::Operator, Some('=')),
            ('<' | '>' | '=' | '+' | '-' | '/' | '%' | '|' | '&', _) => {
                (TokenKind::Operator, None)
            }
            _ => (TokenKind::Unknown, None),
        };
        let mut lexeme = String::from(first);
        if let Some(c) = second {
            self.advance();
            lexeme.push(c);
        }
        Token { kind, lexeme, line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn lex(source: &str) -> Vec<Token> {
        Scanner::new(source).tokenize()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn simple_tokens() {
        let tokens = lex("int main ( ) { return x ; }");
        assert_eq!(
            kinds(&tokens),
            vec![
                Keyword,
                Keyword,
                Punctuation,
                Punctuation,
                Punctuation,
                Keyword,
                Identifier,
                Punctuation,
                Punctuation,
                Eof
            ]
        );
        assert_eq!(tokens[0].lexeme, "int");
        assert_eq!(tokens[6].lexeme, "x");
    }

    #[test]
    fn keywords_are_matched_exactly() {
        let tokens = lex("int int2 main mainly");
        assert_eq!(
            kinds(&tokens),
            vec![Keyword, Identifier, Keyword, Identifier, Eof]
        );
        assert_eq!(tokens[1].lexeme, "int2");
    }

    #[test]
    fn two_char_operators_scan_as_one_token() {
        let source = "<= >= == != && || += -= /= %= |= &=";
        let tokens = lex(source);
        let expected: Vec<&str> = source.split_whitespace().collect();
        assert_eq!(tokens.len(), expected.len() + 1);
        for (tok, lexeme) in tokens.iter().zip(&expected) {
            assert_eq!(tok.kind, Operator);
            assert_eq!(tok.lexeme, *lexeme);
        }
    }

    #[test]
    fn less_equal_is_never_split() {
        let tokens = lex("a<=b");
        assert_eq!(kinds(&tokens), vec![Identifier, Operator, Identifier, Eof]);
        assert_eq!(tokens[1].lexeme, "<=");
    }

    #[test]
    fn one_char_operators() {
        let tokens = lex("< > = + - / % | &");
        assert_eq!(tokens.len(), 10);
        for tok in &tokens[..9] {
            assert_eq!(tok.kind, Operator);
            assert_eq!(tok.lexeme.len(), 1);
        }
    }

    #[test]
    fn line_numbers_count_comment_newlines() {
        let tokens = lex("int a\n/* two\nlines */ int b\n// tail\nint c");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn line_numbers_never_decrease() {
        let tokens = lex("int main ( ) {\n  int x = 5 ;\n  /* gap\n   */ x = y ;\n}");
        for pair in tokens.windows(2) {
            assert!(pair[0].line <= pair[1].line);
        }
    }

    #[test]
    fn number_literals_take_one_decimal_point() {
        let tokens = lex("42 3.14 1.2.3");
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[1].lexeme, "3.14");
        assert_eq!(tokens[2].lexeme, "1.2");
        assert_eq!(tokens[3].kind, Unknown);
        assert_eq!(tokens[3].lexeme, ".");
        assert_eq!(tokens[4].lexeme, "3");
        assert_eq!(tokens[4].kind, Number);
    }

    #[test]
    fn unknown_characters_become_tokens() {
        let tokens = lex("@ $ * !");
        assert_eq!(kinds(&tokens), vec![Unknown, Unknown, Unknown, Unknown, Eof]);
        assert_eq!(tokens[2].lexeme, "*");
        assert_eq!(tokens[3].lexeme, "!");
    }

    #[test]
    fn bang_equals_is_an_operator() {
        let tokens = lex("a != b");
        assert_eq!(kinds(&tokens), vec![Identifier, Operator, Identifier, Eof]);
        assert_eq!(tokens[1].lexeme, "!=");
    }

    #[test]
    fn unterminated_block_comment_scans_to_eof() {
        let tokens = lex("int a /* comment\nnever closed");
        assert_eq!(kinds(&tokens), vec![Keyword, Identifier, Eof]);
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn retokenizing_is_identical() {
        let source = "int main ( ) {\n  // decl\n  int x = 3.5 ;\n  x <= y ;\n}";
        assert_eq!(lex(source), lex(source));
    }

    #[test]
    fn empty_source_yields_eof_only() {
        let tokens = lex("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, Eof);
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn eof_carries_final_line() {
        let tokens = lex("a\nb");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].kind, Eof);
        assert_eq!(tokens[2].line, 2);
    }
}
