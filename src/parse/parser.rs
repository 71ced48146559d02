use crate::scan::token::{Token, TokenKind};

use super::error::ExpectedToken::{self, AnyIdentifier, AnyNumber, EndOfInput, Exact};
use super::error::SyntaxError;

/// Tokens that may open a statement inside a block.
const STMT_START: &[ExpectedToken] = &[
    Exact("int"),
    Exact("float"),
    Exact("double"),
    Exact("char"),
    AnyIdentifier,
    Exact("if"),
    Exact("while"),
    Exact("for"),
    Exact("return"),
];

/// [`STMT_START`] plus the brace that closes the enclosing block.
const STMT_FOLLOW: &[ExpectedToken] = &[
    Exact("int"),
    Exact("float"),
    Exact("double"),
    Exact("char"),
    AnyIdentifier,
    Exact("if"),
    Exact("while"),
    Exact("for"),
    Exact("return"),
    Exact("}"),
];

/// Tokens that may open the body of `if`, `else` or `while`.
const BODY_START: &[ExpectedToken] = &[
    Exact("{"),
    Exact("int"),
    Exact("float"),
    Exact("double"),
    Exact("char"),
    AnyIdentifier,
    Exact("if"),
    Exact("while"),
    Exact("for"),
    Exact("return"),
];

const DATATYPES: &[ExpectedToken] = &[
    Exact("int"),
    Exact("float"),
    Exact("double"),
    Exact("char"),
];

/// Right-hand side of a declaration: a name or a literal.
const VALUE_START: &[ExpectedToken] = &[AnyIdentifier, AnyNumber];

fn matches_any(set: &[ExpectedToken], token: &Token) -> bool {
    set.iter().any(|e| e.matches(token))
}

/// Recursive descent over a token stream, one function per grammar rule.
///
/// The parser never unwinds on a bad token: each mismatch is recorded and
/// the cursor resynchronized so the rest of the input still gets checked.
/// It builds no tree; the output of a parse is the ordered mismatch list,
/// and an empty list means the input is well formed.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// The current position in the token stream.
    pos: usize,
    /// Every mismatch recorded so far, in detection order.
    errors: Vec<SyntaxError>,
    /// Set from the first mismatch until a rule matches its next expected
    /// token again; while set, further mismatches resynchronize silently
    /// so one broken token does not flood the report.
    recovering: bool,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The scanner always terminates the stream; guarantee the sentinel
        // here as well so the cursor can be clamped instead of checked.
        match tokens.last() {
            Some(token) if token.kind == TokenKind::Eof => {}
            Some(token) => {
                let line = token.line;
                tokens.push(Token::eof(line));
            }
            None => tokens.push(Token::eof(1)),
        }
        Parser {
            tokens,
            pos: 0,
            errors: Vec::new(),
            recovering: false,
        }
    }

    /// Runs the one top-level parse this parser is good for.
    ///
    /// The program is accepted when no mismatch was recorded and every
    /// token was consumed; input past the function is reported once and
    /// drained.
    pub fn parse_program(mut self) -> (bool, Vec<SyntaxError>) {
        self.parse_func();
        if !self.is_at_end() {
            self.report(&[EndOfInput]);
            while !self.is_at_end() {
                self.advance();
            }
        }
        let accepted = self.errors.is_empty();
        (accepted, self.errors)
    }

    fn lookahead(&self, by: usize) -> &Token {
        &self.tokens[(self.pos + by).min(self.tokens.len() - 1)]
    }

    fn current(&self) -> &Token {
        self.lookahead(0)
    }

    /// Moves the cursor one token forward, clamped at the sentinel.
    fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.tokens.len() - 1);
    }

    fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn check(&self, expected: ExpectedToken) -> bool {
        expected.matches(self.current())
    }

    /// Consumes a token the current rule has verified. A successful match
    /// is what ends recovery mode.
    fn consume(&mut self) {
        self.advance();
        self.recovering = false;
    }

    /// Records a mismatch against the current token, unless the parser is
    /// already resynchronizing from an earlier one.
    fn report(&mut self, expected: &[ExpectedToken]) {
        if !self.recovering {
            let found = self.current().clone();
            self.errors.push(SyntaxError {
                line: found.line,
                expected: expected.to_vec(),
                found,
            });
        }
        self.recovering = true;
    }

    /// Skips ahead to a token the interrupted rule can use: one of
    /// `expected` or `sync`, a statement boundary, or end of input. A `;`
    /// that nothing expected is consumed with the broken statement; a `}`
    /// always stays for the enclosing block.
    fn resynchronize(&mut self, expected: &[ExpectedToken], sync: &[ExpectedToken]) {
        loop {
            let token = self.current();
            if token.kind == TokenKind::Eof
                || matches_any(expected, token)
                || matches_any(sync, token)
                || token.lexeme == "}"
            {
                return;
            }
            let at_boundary = token.lexeme == ";";
            self.advance();
            if at_boundary {
                return;
            }
        }
    }

    fn expect(&mut self, expected: ExpectedToken, sync: &[ExpectedToken]) {
        self.expect_one_of(&[expected], sync);
    }

    /// The consume protocol every rule is built from: take the token when
    /// it matches, otherwise record the mismatch and resynchronize, taking
    /// the expected token after all if the skip ran into it.
    fn expect_one_of(&mut self, expected: &[ExpectedToken], sync: &[ExpectedToken]) {
        if matches_any(expected, self.current()) {
            self.consume();
            return;
        }
        self.report(expected);
        self.resynchronize(expected, sync);
        if matches_any(expected, self.current()) {
            self.consume();
        }
    }

    /// `int main ( )` followed by a block. Also reachable as a statement,
    /// which is what lets a definition nest inside a block.
    fn parse_func(&mut self) {
        self.expect(
            Exact("int"),
            &[Exact("main"), Exact("("), Exact(")"), Exact("{")],
        );
        self.expect(Exact("main"), &[Exact("("), Exact(")"), Exact("{")]);
        self.expect(Exact("("), &[Exact(")"), Exact("{")]);
        self.expect(Exact(")"), &[Exact("{")]);
        self.parse_block();
    }

    /// `{` statement+ `}`. An empty pair of braces is reported, since the
    /// grammar wants at least one statement, but still closed.
    fn parse_block(&mut self) {
        self.expect(Exact("{"), STMT_FOLLOW);
        if self.check(Exact("}")) {
            self.report(STMT_START);
            self.consume();
            return;
        }
        loop {
            if self.check(Exact("}")) {
                self.consume();
                return;
            }
            if self.is_at_end() {
                self.report(&[Exact("}")]);
                return;
            }
            self.parse_statement();
        }
    }

    /// Statement dispatch over the current token.
    fn parse_statement(&mut self) {
        let kind = self.current().kind;
        let lexeme = self.current().lexeme.clone();
        match (kind, lexeme.as_str()) {
            // A leading `int` opens a declaration unless `main` follows:
            // the one place a second token of lookahead is needed.
            (TokenKind::Keyword, "int") if self.lookahead(1).lexeme == "main" => {
                self.parse_func()
            }
            (TokenKind::Keyword, "int" | "float" | "double" | "char") => self.parse_assign(),
            (TokenKind::Identifier, _) => self.parse_expression_statement(),
            (TokenKind::Keyword, "if") => self.parse_if(),
            (TokenKind::Keyword, "while") => self.parse_while(),
            (TokenKind::Keyword, "for") => self.parse_for(),
            (TokenKind::Keyword, "return") => self.parse_return(),
            _ => {
                self.report(STMT_START);
                self.resynchronize(STMT_START, &[Exact("}")]);
            }
        }
    }

    /// `datatype identifier = value ;`
    fn parse_assign(&mut self) {
        self.expect_one_of(
            DATATYPES,
            &[AnyIdentifier, Exact("="), AnyNumber, Exact(";")],
        );
        self.expect(AnyIdentifier, &[Exact("="), AnyNumber, Exact(";")]);
        self.expect(Exact("="), &[AnyIdentifier, AnyNumber, Exact(";")]);
        self.expect_one_of(VALUE_START, &[Exact(";")]);
        self.expect(Exact(";"), STMT_FOLLOW);
    }

    /// `identifier [op identifier] ;` in statement position.
    fn parse_expression_statement(&mut self) {
        self.parse_expression(&[Exact(";")]);
        self.expect(Exact(";"), STMT_FOLLOW);
    }

    /// An identifier, optionally followed by one operator and a second
    /// identifier. The operator leg matching nothing is fine, so a lone
    /// name never errors here.
    fn parse_expression(&mut self, follow: &[ExpectedToken]) {
        self.expect(AnyIdentifier, follow);
        if self.current().kind == TokenKind::Operator {
            self.consume();
            self.expect(AnyIdentifier, follow);
        }
    }

    /// `if ( condition )`, a block or single statement, and optionally
    /// `else` with a block or single statement.
    fn parse_if(&mut self) {
        self.consume(); // if
        self.expect(Exact("("), &[AnyIdentifier, Exact(")")]);
        self.parse_expression(&[Exact(")")]);
        self.expect(Exact(")"), BODY_START);
        self.parse_body();
        if self.check(Exact("else")) {
            self.consume();
            self.parse_body();
        }
    }

    /// A brace opens a block body; anything else is taken as a single
    /// statement.
    fn parse_body(&mut self) {
        if self.check(Exact("{")) {
            self.parse_block();
        } else {
            self.parse_statement();
        }
    }

    /// `while ( condition )`, then a block or single statement.
    fn parse_while(&mut self) {
        self.consume(); // while
        self.expect(Exact("("), &[AnyIdentifier, Exact(")")]);
        self.parse_expression(&[Exact(")")]);
        self.expect(Exact(")"), BODY_START);
        self.parse_body();
    }

    /// `for ( init condition ; update )` then a block. The init is a full
    /// declaration and brings its own terminating `;`.
    fn parse_for(&mut self) {
        self.consume(); // for
        self.expect(Exact("("), DATATYPES);
        self.parse_assign();
        self.parse_expression(&[Exact(";")]);
        self.expect(Exact(";"), &[AnyIdentifier, Exact(")")]);
        self.parse_expression(&[Exact(")")]);
        self.expect(Exact(")"), &[Exact("{")]);
        self.parse_block();
    }

    /// `return ;` or `return value ;`, with an optional `op value` tail
    /// mirroring the expression shape.
    fn parse_return(&mut self) {
        self.consume(); // return
        if self.check(Exact(";")) {
            self.consume();
            return;
        }
        self.expect_one_of(VALUE_START, &[Exact(";")]);
        if self.current().kind == TokenKind::Operator {
            self.consume();
            self.expect_one_of(VALUE_START, &[Exact(";")]);
        }
        self.expect(Exact(";"), STMT_FOLLOW);
    }
}
