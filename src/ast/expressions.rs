use serde::{Deserialize, Serialize};

use crate::Span;

use super::ast::{BinaryOp, ChannelColor, Type, UnaryOp};

/// Expression
///
/// Closed sum over every expression kind. Nodes are immutable once built and
/// each carries the type assigned to it by the checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Ident(IdentExpr),
    NumLit(NumLitExpr),
    StringLit(StringLitExpr),
    BooleanLit(BooleanLitExpr),
    Const(ConstExpr),
    Conditional(ConditionalExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Postfix(PostfixExpr),
    ExpandedPixel(ExpandedPixelExpr),
}

impl Expr {
    /// Returns the checked type of the expression.
    pub fn get_type(&self) -> Type {
        match self {
            Expr::Ident(expr) => expr.type_,
            Expr::NumLit(_) => Type::Int,
            Expr::StringLit(_) => Type::String,
            Expr::BooleanLit(_) => Type::Boolean,
            Expr::Const(expr) => expr.type_,
            Expr::Conditional(expr) => expr.type_,
            Expr::Binary(expr) => expr.type_,
            Expr::Unary(expr) => expr.type_,
            Expr::Postfix(expr) => expr.type_,
            Expr::ExpandedPixel(_) => Type::Pixel,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Ident(expr) => &expr.span,
            Expr::NumLit(expr) => &expr.span,
            Expr::StringLit(expr) => &expr.span,
            Expr::BooleanLit(expr) => &expr.span,
            Expr::Const(expr) => &expr.span,
            Expr::Conditional(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Postfix(expr) => &expr.span,
            Expr::ExpandedPixel(expr) => &expr.span,
        }
    }

    /// Short node name used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "Ident",
            Expr::NumLit(_) => "NumLit",
            Expr::StringLit(_) => "StringLit",
            Expr::BooleanLit(_) => "BooleanLit",
            Expr::Const(_) => "Const",
            Expr::Conditional(_) => "Conditional",
            Expr::Binary(_) => "Binary",
            Expr::Unary(_) => "Unary",
            Expr::Postfix(_) => "Postfix",
            Expr::ExpandedPixel(_) => "ExpandedPixel",
        }
    }

    /// Returns the variable an image-valued expression names directly, if any.
    ///
    /// A bare identifier and a postfix access without selectors both name
    /// their variable; anything else is a temporary.
    pub fn named_variable(&self) -> Option<&IdentExpr> {
        match self {
            Expr::Ident(ident) => Some(ident),
            Expr::Postfix(postfix) if postfix.pixel.is_none() && postfix.channel.is_none() => {
                postfix.primary.named_variable()
            }
            _ => None,
        }
    }
}

// LITERALS

/// Numeric literal, kept as its source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumLitExpr {
    pub text: String,
    #[serde(default)]
    pub span: Span,
}

/// String literal, kept with its delimiting quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLitExpr {
    pub text: String,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLitExpr {
    pub value: bool,
    #[serde(default)]
    pub span: Span,
}

/// Named constant such as `Z` or `RED`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstExpr {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

// REFERENCES

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentExpr {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

// COMPOUND EXPRESSIONS

/// `? guard -> true_expr , false_expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub guard: Box<Expr>,
    pub true_expr: Box<Expr>,
    pub false_expr: Box<Expr>,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

/// Primary value with an optional pixel selector and/or channel selector,
/// e.g. `im[x, y]:red`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostfixExpr {
    pub primary: Box<Expr>,
    #[serde(default)]
    pub pixel: Option<PixelSelector>,
    #[serde(default)]
    pub channel: Option<ChannelSelector>,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

/// `[red, green, blue]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedPixelExpr {
    pub red: Box<Expr>,
    pub green: Box<Expr>,
    pub blue: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

// SELECTORS

/// Coordinate pair indexing one pixel of an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelSelector {
    pub x: Box<Expr>,
    pub y: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSelector {
    pub color: ChannelColor,
    #[serde(default)]
    pub span: Span,
}
