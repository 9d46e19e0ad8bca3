//! Utility macros for building typed trees.
//!
//! Front ends and tests assemble programs node by node; these macros keep
//! that readable:
//!
//! - `MK_IDENT!`, `MK_NUM!`, `MK_STRING!`, `MK_BOOL!`, `MK_CONST!` - leaves
//! - `MK_BINARY!`, `MK_UNARY!`, `MK_CONDITIONAL!`, `MK_POSTFIX!`,
//!   `MK_PIXEL!` - compound expressions
//! - `MK_PIXEL_SELECTOR!`, `MK_CHANNEL!` - selectors
//! - `MK_DECL!`, `MK_ASSIGN!`, `MK_WRITE!`, `MK_RETURN!`, `MK_BLOCK!`,
//!   `MK_BLOCK_STMT!`, `MK_GUARDED!`, `MK_PARAM!`, `MK_PROGRAM!` - statements
//!
//! Every node gets a null span.

/// Creates an identifier reference.
///
/// # Example
///
/// ```ignore
/// let a = MK_IDENT!("a", Type::Int);
/// ```
#[macro_export]
macro_rules! MK_IDENT {
    ($name:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Ident($crate::ast::expressions::IdentExpr {
            name: String::from($name),
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_NUM {
    ($text:expr) => {
        $crate::ast::expressions::Expr::NumLit($crate::ast::expressions::NumLitExpr {
            text: ($text).to_string(),
            span: $crate::Span::null(),
        })
    };
}

/// Creates a string literal; the quotes are added.
#[macro_export]
macro_rules! MK_STRING {
    ($text:expr) => {
        $crate::ast::expressions::Expr::StringLit($crate::ast::expressions::StringLitExpr {
            text: format!("\"{}\"", $text),
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_BOOL {
    ($value:expr) => {
        $crate::ast::expressions::Expr::BooleanLit($crate::ast::expressions::BooleanLitExpr {
            value: $value,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_CONST {
    ($name:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Const($crate::ast::expressions::ConstExpr {
            name: String::from($name),
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

/// Creates a binary expression.
///
/// # Arguments
///
/// * `$left` - Left operand
/// * `$op` - The BinaryOp
/// * `$right` - Right operand
/// * `$type_` - Checked result type
#[macro_export]
macro_rules! MK_BINARY {
    ($left:expr, $op:expr, $right:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Binary($crate::ast::expressions::BinaryExpr {
            left: Box::new($left),
            op: $op,
            right: Box::new($right),
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_UNARY {
    ($op:expr, $expr:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Unary($crate::ast::expressions::UnaryExpr {
            op: $op,
            expr: Box::new($expr),
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_CONDITIONAL {
    ($guard:expr, $true_expr:expr, $false_expr:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Conditional($crate::ast::expressions::ConditionalExpr {
            guard: Box::new($guard),
            true_expr: Box::new($true_expr),
            false_expr: Box::new($false_expr),
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_PIXEL_SELECTOR {
    ($x:expr, $y:expr) => {
        $crate::ast::expressions::PixelSelector {
            x: Box::new($x),
            y: Box::new($y),
            span: $crate::Span::null(),
        }
    };
}

#[macro_export]
macro_rules! MK_CHANNEL {
    ($color:expr) => {
        $crate::ast::expressions::ChannelSelector {
            color: $color,
            span: $crate::Span::null(),
        }
    };
}

/// Creates a postfix access; `$pixel` and `$channel` are options.
#[macro_export]
macro_rules! MK_POSTFIX {
    ($primary:expr, $pixel:expr, $channel:expr, $type_:expr) => {
        $crate::ast::expressions::Expr::Postfix($crate::ast::expressions::PostfixExpr {
            primary: Box::new($primary),
            pixel: $pixel,
            channel: $channel,
            type_: $type_,
            span: $crate::Span::null(),
        })
    };
}

/// Creates an expanded pixel `[r, g, b]`.
#[macro_export]
macro_rules! MK_PIXEL {
    ($red:expr, $green:expr, $blue:expr) => {
        $crate::ast::expressions::Expr::ExpandedPixel($crate::ast::expressions::ExpandedPixelExpr {
            red: Box::new($red),
            green: Box::new($green),
            blue: Box::new($blue),
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_PARAM {
    ($name:expr, $type_:expr) => {
        $crate::ast::statements::NameDef {
            name: String::from($name),
            type_: $type_,
            dimension: None,
            span: $crate::Span::null(),
        }
    };
}

/// Creates a declaration statement, with or without an initializer.
#[macro_export]
macro_rules! MK_DECL {
    ($name:expr, $type_:expr) => {
        $crate::ast::statements::Stmt::Declaration($crate::ast::statements::Declaration {
            name_def: $crate::MK_PARAM!($name, $type_),
            initializer: None,
            span: $crate::Span::null(),
        })
    };
    ($name:expr, $type_:expr, $init:expr) => {
        $crate::ast::statements::Stmt::Declaration($crate::ast::statements::Declaration {
            name_def: $crate::MK_PARAM!($name, $type_),
            initializer: Some($init),
            span: $crate::Span::null(),
        })
    };
}

/// Creates an assignment to a plain variable.
#[macro_export]
macro_rules! MK_ASSIGN {
    ($name:expr, $type_:expr, $expr:expr) => {
        $crate::ast::statements::Stmt::Assignment($crate::ast::statements::AssignmentStmt {
            lvalue: $crate::ast::statements::LValue {
                name: String::from($name),
                pixel: None,
                channel: None,
                type_: $type_,
                span: $crate::Span::null(),
            },
            expr: $expr,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_WRITE {
    ($expr:expr) => {
        $crate::ast::statements::Stmt::Write($crate::ast::statements::WriteStmt {
            expr: $expr,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_RETURN {
    ($expr:expr) => {
        $crate::ast::statements::Stmt::Return($crate::ast::statements::ReturnStmt {
            expr: $expr,
            span: $crate::Span::null(),
        })
    };
}

#[macro_export]
macro_rules! MK_BLOCK {
    ($($stmt:expr),* $(,)?) => {
        $crate::ast::statements::BlockStmt {
            body: vec![$($stmt),*],
            span: $crate::Span::null(),
        }
    };
}

/// Creates a nested block statement.
#[macro_export]
macro_rules! MK_BLOCK_STMT {
    ($($stmt:expr),* $(,)?) => {
        $crate::ast::statements::Stmt::Block($crate::MK_BLOCK!($($stmt),*))
    };
}

#[macro_export]
macro_rules! MK_GUARDED {
    ($guard:expr, $block:expr) => {
        $crate::ast::statements::GuardedBlock {
            guard: $guard,
            block: $block,
            span: $crate::Span::null(),
        }
    };
}

/// Creates a program root.
///
/// # Example
///
/// ```ignore
/// let program = MK_PROGRAM!("f", Type::Int, [MK_PARAM!("a", Type::Int)], MK_BLOCK!(
///     MK_RETURN!(MK_IDENT!("a", Type::Int))
/// ));
/// ```
#[macro_export]
macro_rules! MK_PROGRAM {
    ($name:expr, $type_:expr, [$($param:expr),* $(,)?], $block:expr) => {
        $crate::ast::statements::Program {
            name: String::from($name),
            type_: $type_,
            params: vec![$($param),*],
            block: $block,
            span: $crate::Span::null(),
        }
    };
}
