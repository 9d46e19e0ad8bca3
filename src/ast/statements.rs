use serde::{Deserialize, Serialize};

use crate::Span;

use super::{
    ast::Type,
    expressions::{ChannelSelector, Expr, PixelSelector},
};

/// Statement
///
/// Declarations are statements too: a block is one ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(AssignmentStmt),
    Write(WriteStmt),
    Do(DoStmt),
    If(IfStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub span: Span,
}

/// Image dimension attached to a declaration, `image[w, h] im`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: Expr,
    pub height: Expr,
    #[serde(default)]
    pub span: Span,
}

/// A declared name: parameters and local declarations share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub dimension: Option<Dimension>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name_def: NameDef,
    #[serde(default)]
    pub initializer: Option<Expr>,
    #[serde(default)]
    pub span: Span,
}

/// Assignment target. `type_` is the type after selectors are applied, so
/// `p:red` is an INT lvalue over a PIXEL variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LValue {
    pub name: String,
    #[serde(default)]
    pub pixel: Option<PixelSelector>,
    #[serde(default)]
    pub channel: Option<ChannelSelector>,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStmt {
    pub lvalue: LValue,
    pub expr: Expr,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteStmt {
    pub expr: Expr,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub expr: Expr,
    #[serde(default)]
    pub span: Span,
}

/// A (condition, body) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardedBlock {
    pub guard: Expr,
    pub block: BlockStmt,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub guarded_blocks: Vec<GuardedBlock>,
    #[serde(default)]
    pub span: Span,
}

/// Guarded repetition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoStmt {
    pub guarded_blocks: Vec<GuardedBlock>,
    #[serde(default)]
    pub span: Span,
}

/// Root of a compilation unit: a single function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub params: Vec<NameDef>,
    pub block: BlockStmt,
    #[serde(default)]
    pub span: Span,
}
