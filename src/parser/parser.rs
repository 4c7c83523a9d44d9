//! Parser state and the top-level parse entry point.
//!
//! The `Parser` struct owns the token stream and a cursor into it. The
//! cursor only ever moves forward; the grammar needs no backtracking.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::expr::parse_expression;

/// The parsing state threaded through every grammar rule.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Checks the current token against a kind and value without
    /// consuming it. An empty value matches any token of the kind.
    pub fn check(&self, kind: TokenKind, value: &str) -> bool {
        self.current_token().matches(kind, value)
    }

    /// Requires the current token to match, consuming and returning it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error naming what was required.
    pub fn expect(&mut self, kind: TokenKind, value: &str) -> Result<Token, Error> {
        if self.check(kind, value) {
            Ok(self.advance().clone())
        } else {
            let token = self.current_token();
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: if value.is_empty() {
                        kind.to_string()
                    } else {
                        value.to_string()
                    },
                    found: token.value.clone(),
                },
                token.position.clone(),
            ))
        }
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true if there are more tokens and the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// Statements are parsed one at a time and must be joined by a
/// punctuation separator; the result is always wrapped in a `Program`
/// node, even for a single statement or empty input.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, ending with an EOF token
///
/// # Returns
///
/// The root `Program` node, or the first error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    let mut program = vec![];

    while parser.has_tokens() {
        program.push(parse_expression(&mut parser)?);

        // Check for end of line or multiple inline statements
        if parser.has_tokens() {
            parser.expect(TokenKind::Punctuation, "")?;
        }
    }

    Ok(Node::Program(program))
}
