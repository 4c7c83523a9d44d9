use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A positioned front-end failure. The first error aborts the whole
/// parse; nothing is ever recovered or retried.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidParameterName { .. } => "InvalidParameterName",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected the start of an expression",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, found `{}`",
                expected, found
            )),
            ErrorImpl::InvalidParameterName { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid parameter name, parameters must be plain variables",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("invalid parameter name: {token:?}")]
    InvalidParameterName { token: String },
}
