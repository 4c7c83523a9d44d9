//! AST node definitions.
//!
//! The parser produces a tree of `Node` values. Nodes are built bottom-up
//! during a single depth-first pass and are never edited afterwards; a node
//! only changes owner by being wrapped as a child of a new node (for
//! example a bare expression becoming the callee of a `Call`).

/// A single node of the syntax tree.
///
/// `Variable`, `Number` and `String` carry the raw token text unchanged;
/// interpreting a number's value is left to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered sequence of statements. Always the root of a parse, and also
    /// produced for blocks containing two or more statements.
    Program(Vec<Node>),
    /// `si` conditional. The else branch (`ou`) is optional.
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    /// `fonction` literal. Parameter names are not checked for uniqueness.
    Function {
        parameters: Vec<String>,
        body: Box<Node>,
    },
    /// Invocation of any expression.
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// `vrai` / `faux` literal. Also produced for an empty block.
    Boolean(bool),
    /// `=`, lowest precedence, right-associative.
    Assign { target: Box<Node>, value: Box<Node> },
    /// Arithmetic, logical or comparison operation.
    BinaryOp {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    Variable(String),
    Number(String),
    String(String),
}

impl Node {
    /// Shorthand for wrapping a node in a `Box`, which most parent
    /// variants require.
    pub fn boxed(self) -> Box<Node> {
        Box::new(self)
    }
}
