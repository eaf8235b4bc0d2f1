use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    /// Shorthand for the error raised by `or_throw`.
    pub fn fatal(message: impl Into<String>) -> Self {
        Error::new(ErrorImpl::Fatal {
            message: message.into(),
        })
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::Fatal { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Fatal { .. } => "Fatal",
            ErrorImpl::NoMatch => "NoMatch",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::UndefinedSymbol { .. } => "UndefinedSymbol",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Fatal { .. } => ErrorTip::None,
            ErrorImpl::NoMatch => ErrorTip::None,
            ErrorImpl::TrailingInput { remaining } => ErrorTip::Suggestion(format!(
                "Input left over after parsing: `{}`, is an operator missing from the table?",
                remaining
            )),
            ErrorImpl::UndefinedSymbol { symbol } => {
                ErrorTip::Suggestion(format!("Assign `{}` before using it", symbol))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only a bare symbol can appear on the left of an assignment",
            )),
            ErrorImpl::UnsupportedOperator { tag } => {
                ErrorTip::Suggestion(format!("Operator `{}` has no evaluation rule", tag))
            }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{message}")]
    Fatal { message: String },
    #[error("input did not match")]
    NoMatch,
    #[error("unconsumed input: {remaining:?}")]
    TrailingInput { remaining: String },
    #[error("symbol {symbol:?} is not defined")]
    UndefinedSymbol { symbol: String },
    #[error("left hand side of an assignment must be a symbol")]
    InvalidAssignmentTarget,
    #[error("operator {tag:?} cannot be evaluated")]
    UnsupportedOperator { tag: String },
}
