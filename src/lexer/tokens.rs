use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    /// The reserved words of the language. Anything else that looks like a
    /// word is a variable.
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("si");
        set.insert("alors");
        set.insert("ou");
        set.insert("vrai");
        set.insert("faux");
        set.insert("fonction");
        set
    };
}

/// Coarse classification of a token. The parser matches on the kind plus
/// the token's text value; individual operators and punctuation marks do
/// not get their own kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Keyword,
    Punctuation,
    Operator,
    Variable,
    Number,
    String,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit. Immutable once produced; the parser never
/// mutates tokens, only consumes them.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Checks the token against an expected kind and value. An empty
    /// expected value matches any token of the kind, which is how the
    /// statement separator accepts any punctuation mark.
    pub fn matches(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && (value.is_empty() || self.value == value)
    }

    pub fn debug(&self) {
        match self.kind {
            TokenKind::Variable | TokenKind::Number | TokenKind::String => {
                println!("{} ({})", self.kind, self.value);
            }
            _ => println!("{} ()", self.kind),
        }
    }
}
