//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Expressions are parsed with a
//! precedence-climbing combinator; everything else is plain recursive
//! descent. It handles:
//!
//! - Program assembly (statements joined by punctuation separators)
//! - Expression parsing (binary ops, assignment, calls, literals)
//! - Keyword constructs (`si`/`alors`/`ou`, `fonction`, `vrai`/`faux`)
//! - Blocks and the generic delimited-list primitive
//!
//! The grammar is fail-fast: the first violated expectation aborts the
//! parse with a positioned error, and no partial tree is returned.

pub mod expr;
pub mod lookups;
pub mod parser;
