//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lutin".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lutin".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "alors".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: ")".to_string(),
            found: "EOF".to_string(),
        },
        Position(0, Rc::new("test.lutin".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
}

#[test]
fn test_invalid_parameter_name_error() {
    let error = Error::new(
        ErrorImpl::InvalidParameterName {
            token: "3".to_string(),
        },
        Position(0, Rc::new("test.lutin".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidParameterName");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.lutin".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0, Rc::new("test.lutin".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
