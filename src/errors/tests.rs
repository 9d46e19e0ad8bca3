//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and rendering.

use crate::ast::ast::{BinaryOp, Type, UnaryOp};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnknownConstant {
            name: "TEAL".to_string(),
        },
        Position(3, 14),
    );

    assert_eq!(error.get_position(), &Position(3, 14));
    assert_eq!(error.get_error_name(), "UnknownConstant");
}

#[test]
fn test_unsupported_binary_names_the_triple() {
    let error = Error::new(
        ErrorImpl::UnsupportedBinaryOperation {
            op: BinaryOp::Exp,
            left: Type::Pixel,
            right: Type::Int,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedBinaryOperation");
    assert_eq!(
        error.get_tip().to_string(),
        "No lowering for `**` with operands `PIXEL` and `INT`"
    );
    assert_eq!(
        error.to_string(),
        "unsupported binary operation: PIXEL ** INT (at 0:0)"
    );
}

#[test]
fn test_unsupported_unary_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedUnaryOperation {
            op: UnaryOp::Width,
            operand: Type::Pixel,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedUnaryOperation");
    assert_eq!(
        error.get_tip().to_string(),
        "No lowering for unary `width` on `PIXEL`"
    );
}

#[test]
fn test_unresolved_reference_error() {
    let error = Error::new(
        ErrorImpl::UnresolvedReference {
            name: "ghost".to_string(),
        },
        Position(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnresolvedReference");
    match error.get_internal_error() {
        ErrorImpl::UnresolvedReference { name } => assert_eq!(name, "ghost"),
        other => panic!("Expected unresolved reference, found {:?}", other),
    }
}

#[test]
fn test_selector_and_lvalue_errors() {
    let selector = Error::new(
        ErrorImpl::UnsupportedSelector {
            primary: Type::Int,
            detail: "channel red".to_string(),
        },
        Position::null(),
    );
    assert_eq!(selector.get_error_name(), "UnsupportedSelector");
    assert_eq!(
        selector.get_tip().to_string(),
        "Cannot select channel red from `INT`"
    );

    let lvalue = Error::new(
        ErrorImpl::UnsupportedLValue {
            name: "im".to_string(),
            detail: "a channel selector without coordinates".to_string(),
        },
        Position::null(),
    );
    assert_eq!(lvalue.get_error_name(), "UnsupportedLValue");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, Position::null());

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_invalid_identifier_error() {
    let error = Error::new(
        ErrorImpl::InvalidIdentifier {
            name: "3d".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidIdentifier");
    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}
