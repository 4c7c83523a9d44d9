//! The grammar rules: dispatcher, precedence climbing, call detection
//! and the delimited-list primitive they all share.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::PRECEDENCE_LOOKUP, parser::Parser};

/// Parses one full expression: dispatch an operand, climb any operators
/// around it, then check for an invocation of the result.
///
/// Call detection happens here as well as inside `dispatch`, so a chained
/// call like `f()()` resolves to two nested `Call` nodes. Each detector
/// only attaches a single argument list.
pub fn parse_expression(parser: &mut Parser) -> Result<Node, Error> {
    let expression = {
        let left = dispatch(parser)?;
        detect_calculation(parser, left, 0)?
    };

    detect_call(parser, expression)
}

/// Routes the token at the head of the stream to the matching rule.
///
/// This is the base case of the whole grammar: any token that cannot
/// start an expression ends up in the final arm and fails.
fn dispatch(parser: &mut Parser) -> Result<Node, Error> {
    let node = if parser.check(TokenKind::Punctuation, "(") {
        // Grouping, not a call
        parser.advance();
        let expression = parse_expression(parser)?;
        parser.expect(TokenKind::Punctuation, ")")?;

        expression
    } else if parser.check(TokenKind::Punctuation, "{") {
        parse_block(parser)?
    } else if parser.check(TokenKind::Keyword, "si") {
        parse_if(parser)?
    } else if parser.check(TokenKind::Keyword, "vrai") || parser.check(TokenKind::Keyword, "faux")
    {
        parse_boolean(parser)
    } else if parser.check(TokenKind::Keyword, "fonction") {
        parser.advance();
        parse_function(parser)?
    } else {
        let token = parser.advance().clone();
        match token.kind {
            TokenKind::Variable => Node::Variable(token.value),
            TokenKind::Number => Node::Number(token.value),
            TokenKind::String => Node::String(token.value),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.value },
                    token.position,
                ))
            }
        }
    };

    detect_call(parser, node)
}

/// Greedily consumes operators binding tighter than `previous_precedence`,
/// folding them into `BinaryOp`/`Assign` nodes around `left`.
fn detect_calculation(
    parser: &mut Parser,
    left: Node,
    previous_precedence: u8,
) -> Result<Node, Error> {
    let current = parser.current_token();
    if current.kind != TokenKind::Operator {
        return Ok(left);
    }

    let operator = current.value.clone();
    let Some(&precedence) = PRECEDENCE_LOOKUP.get(operator.as_str()) else {
        return Ok(left);
    };
    if precedence <= previous_precedence {
        return Ok(left);
    }

    parser.advance();

    let operand = dispatch(parser)?;
    // Climb the right side just below this operator's own precedence, so
    // operators of equal precedence chain into a right-nested tree
    let right = detect_calculation(parser, operand, precedence - 1)?;

    let combined = if operator == "=" {
        Node::Assign {
            target: left.boxed(),
            value: right.boxed(),
        }
    } else {
        Node::BinaryOp {
            operator,
            left: left.boxed(),
            right: right.boxed(),
        }
    };

    // Trailing lower-precedence operators keep extending the same expression
    detect_calculation(parser, combined, previous_precedence)
}

/// Wraps `expression` into a `Call` node when an argument list follows,
/// and passes it through unchanged otherwise.
fn detect_call(parser: &mut Parser, expression: Node) -> Result<Node, Error> {
    if parser.check(TokenKind::Punctuation, "(") {
        let arguments = parse_container(parser, "(", ")", ",", parse_expression)?;

        Ok(Node::Call {
            callee: expression.boxed(),
            arguments,
        })
    } else {
        Ok(expression)
    }
}

/// Parses a `si` conditional with an optional `ou` else branch.
fn parse_if(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Keyword, "si")?;

    let condition = parse_expression(parser)?;
    // `alors` is only required when the branch does not open with a brace
    if !parser.check(TokenKind::Punctuation, "{") {
        parser.expect(TokenKind::Keyword, "alors")?;
    }
    let then_branch = parse_expression(parser)?;

    let else_branch = if parser.check(TokenKind::Keyword, "ou") {
        parser.advance();
        Some(parse_expression(parser)?.boxed())
    } else {
        None
    };

    Ok(Node::If {
        condition: condition.boxed(),
        then_branch: then_branch.boxed(),
        else_branch,
    })
}

/// Parses a `vrai`/`faux` literal. The keyword itself was only peeked by
/// the dispatcher, so consume it here.
fn parse_boolean(parser: &mut Parser) -> Node {
    Node::Boolean(parser.advance().value == "vrai")
}

/// Parses a `fonction` literal: parameter list, then a body expression.
/// The `fonction` keyword has already been consumed by the dispatcher.
fn parse_function(parser: &mut Parser) -> Result<Node, Error> {
    let parameters = parse_container(parser, "(", ")", ",", parse_variable_name)?;
    let body = parse_expression(parser)?;

    Ok(Node::Function {
        parameters,
        body: body.boxed(),
    })
}

/// Parses one parameter name, which must be a plain variable token.
fn parse_variable_name(parser: &mut Parser) -> Result<String, Error> {
    let token = parser.advance().clone();
    if token.kind != TokenKind::Variable {
        return Err(Error::new(
            ErrorImpl::InvalidParameterName { token: token.value },
            token.position,
        ));
    }

    Ok(token.value)
}

/// Parses a `{ ... }` block. The element count decides the result shape:
/// an empty block is the literal `faux` and a singleton block is
/// transparent; only two or more statements produce a `Program` node.
fn parse_block(parser: &mut Parser) -> Result<Node, Error> {
    let mut body = parse_container(parser, "{", "}", "", parse_expression)?;

    match body.len() {
        0 => Ok(Node::Boolean(false)),
        1 => Ok(body.remove(0)),
        _ => Ok(Node::Program(body)),
    }
}

/// Parses a delimited list: parameter lists, argument lists and block
/// bodies all go through here, differing only in their bracket and
/// separator tokens and the element rule.
///
/// An empty separator matches any punctuation token, and a separator
/// directly followed by the closing token is tolerated rather than
/// requiring a further element.
fn parse_container<T>(
    parser: &mut Parser,
    begin: &str,
    end: &str,
    separator: &str,
    element: fn(&mut Parser) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut content = Vec::new();
    let mut first = true;

    parser.expect(TokenKind::Punctuation, begin)?;
    while parser.has_tokens() {
        if parser.check(TokenKind::Punctuation, end) {
            break;
        }

        // The first element has no separator in front of it
        if first {
            first = false;
        } else {
            parser.expect(TokenKind::Punctuation, separator)?;
        }

        if parser.check(TokenKind::Punctuation, end) {
            break;
        }
        content.push(element(parser)?);
    }
    parser.expect(TokenKind::Punctuation, end)?;

    Ok(content)
}
