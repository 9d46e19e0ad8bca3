use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::ast::{BinaryOp, Type, UnaryOp},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at {position})")]
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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnsupportedBinaryOperation { .. } => "UnsupportedBinaryOperation",
            ErrorImpl::UnsupportedUnaryOperation { .. } => "UnsupportedUnaryOperation",
            ErrorImpl::UnsupportedSelector { .. } => "UnsupportedSelector",
            ErrorImpl::UnsupportedLValue { .. } => "UnsupportedLValue",
            ErrorImpl::UnresolvedReference { .. } => "UnresolvedReference",
            ErrorImpl::UnknownConstant { .. } => "UnknownConstant",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnsupportedBinaryOperation { op, left, right } => {
                ErrorTip::Suggestion(format!(
                    "No lowering for `{}` with operands `{}` and `{}`",
                    op, left, right
                ))
            }
            ErrorImpl::UnsupportedUnaryOperation { op, operand } => ErrorTip::Suggestion(
                format!("No lowering for unary `{}` on `{}`", op, operand),
            ),
            ErrorImpl::UnsupportedSelector { primary, detail } => {
                ErrorTip::Suggestion(format!("Cannot select {} from `{}`", detail, primary))
            }
            ErrorImpl::UnsupportedLValue { name, detail } => {
                ErrorTip::Suggestion(format!("Cannot assign to `{}` through {}", name, detail))
            }
            ErrorImpl::UnresolvedReference { name } => {
                ErrorTip::Suggestion(format!("Name `{}` has no enclosing declaration", name))
            }
            ErrorImpl::UnknownConstant { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a predefined constant", name))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
            ErrorImpl::InvalidIdentifier { name } => ErrorTip::Suggestion(format!(
                "`{}` is not usable as a host identifier",
                name
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unsupported binary operation: {left} {op} {right}")]
    UnsupportedBinaryOperation {
        op: BinaryOp,
        left: Type,
        right: Type,
    },
    #[error("unsupported unary operation: {op} {operand}")]
    UnsupportedUnaryOperation { op: UnaryOp, operand: Type },
    #[error("unsupported selector on {primary}: {detail}")]
    UnsupportedSelector { primary: Type, detail: String },
    #[error("unsupported assignment target {name:?}: {detail}")]
    UnsupportedLValue { name: String, detail: String },
    #[error("unresolved reference {name:?}")]
    UnresolvedReference { name: String },
    #[error("unknown constant {name:?}")]
    UnknownConstant { name: String },
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    #[error("invalid identifier {name:?}")]
    InvalidIdentifier { name: String },
}
