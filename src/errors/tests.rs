//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_fatal_error_creation() {
    let error = Error::fatal("expected a digit");

    assert_eq!(error.get_error_name(), "Fatal");
    assert!(error.is_fatal());
    assert_eq!(error.to_string(), "expected a digit");
}

#[test]
fn test_error_kind() {
    let error = Error::new(ErrorImpl::TrailingInput {
        remaining: "+".to_string(),
    });

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TrailingInput {
            remaining: "+".to_string()
        }
    );
    assert!(!error.is_fatal());
}

#[test]
fn test_no_match_error() {
    let error = Error::new(ErrorImpl::NoMatch);

    assert_eq!(error.get_error_name(), "NoMatch");
    assert_eq!(error.to_string(), "input did not match");
}

#[test]
fn test_undefined_symbol_error() {
    let error = Error::new(ErrorImpl::UndefinedSymbol {
        symbol: "x".to_string(),
    });

    assert_eq!(error.get_error_name(), "UndefinedSymbol");
    assert_eq!(error.to_string(), "symbol \"x\" is not defined");
}

#[test]
fn test_unsupported_operator_error() {
    let error = Error::new(ErrorImpl::UnsupportedOperator {
        tag: "PostIncr".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnsupportedOperator");
}

#[test]
fn test_error_tip_none() {
    let error = Error::fatal("boom");

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::InvalidAssignmentTarget);

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
