use log::trace;

use crate::{
    ast::{
        ast::{Type, UnaryOp},
        expressions::{ConstExpr, Expr, ExpandedPixelExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::Compiler,
    operators::gen_binary,
    runtime::{lookup_constant, RuntimeClass},
    selectors::gen_postfix,
};

/// Lowers an expression to host expression text.
pub fn gen_expression(compiler: &mut Compiler, expression: &Expr) -> Result<String, Error> {
    compiler.nested(expression.get_span(), |compiler| {
        trace!(
            "lowering {} expression ({})",
            expression.kind_name(),
            expression.get_type()
        );

        match expression {
            Expr::Ident(ident) => compiler.scopes.resolve_host_name(&ident.name, &ident.span),
            Expr::NumLit(literal) => Ok(literal.text.clone()),
            Expr::StringLit(literal) => Ok(literal.text.clone()),
            Expr::BooleanLit(literal) => Ok(literal.value.to_string()),
            Expr::Const(constant) => gen_constant(constant),
            Expr::Conditional(conditional) => {
                let guard = gen_expression(compiler, &conditional.guard)?;
                let true_expr = gen_expression(compiler, &conditional.true_expr)?;
                let false_expr = gen_expression(compiler, &conditional.false_expr)?;

                Ok(format!("({} ? {} : {})", guard, true_expr, false_expr))
            }
            Expr::Binary(binary) => gen_binary(compiler, binary),
            Expr::Unary(unary) => gen_unary(compiler, unary),
            Expr::Postfix(postfix) => gen_postfix(compiler, postfix),
            Expr::ExpandedPixel(pixel) => gen_expanded_pixel(compiler, pixel),
        }
    })
}

fn gen_constant(constant: &ConstExpr) -> Result<String, Error> {
    let value = lookup_constant(&constant.name).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownConstant {
                name: constant.name.clone(),
            },
            constant.span.start,
        )
    })?;

    // Negative literals are parenthesised so `x - RED` stays `x - (-65536)`.
    if value.value < 0 {
        Ok(format!("({})", value.value))
    } else {
        Ok(value.value.to_string())
    }
}

fn gen_unary(compiler: &mut Compiler, unary: &UnaryExpr) -> Result<String, Error> {
    let operand_type = unary.expr.get_type();

    let supported = match unary.op {
        UnaryOp::Width | UnaryOp::Height => operand_type == Type::Image,
        // On a packed pixel the sign would apply to the ARGB word, not its channels.
        UnaryOp::Plus | UnaryOp::Minus => operand_type == Type::Int,
        UnaryOp::Bang => operand_type == Type::Boolean,
    };

    if !supported {
        return Err(Error::new(
            ErrorImpl::UnsupportedUnaryOperation {
                op: unary.op,
                operand: operand_type,
            },
            unary.span.start,
        ));
    }

    let operand = gen_expression(compiler, &unary.expr)?;

    let code = match unary.op {
        UnaryOp::Width => format!("({}.getWidth())", operand),
        UnaryOp::Height => format!("({}.getHeight())", operand),
        // Wrapped: a nested minus must not print as `--`.
        UnaryOp::Minus => format!("(-{})", operand),
        UnaryOp::Plus => format!("(+{})", operand),
        UnaryOp::Bang => format!("(!{})", operand),
    };

    Ok(code)
}

fn gen_expanded_pixel(
    compiler: &mut Compiler,
    pixel: &ExpandedPixelExpr,
) -> Result<String, Error> {
    let red = gen_expression(compiler, &pixel.red)?;
    let green = gen_expression(compiler, &pixel.green)?;
    let blue = gen_expression(compiler, &pixel.blue)?;

    let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
    Ok(format!("{}.pack({}, {}, {})", pixel_ops, red, green, blue))
}
