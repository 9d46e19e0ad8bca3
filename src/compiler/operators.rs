//! Binary operator lowering.
//!
//! The strategy for a binary expression depends only on the operator and
//! the checked types of its operands. `select_lowering` is the whole
//! decision table, checked top to bottom; `gen_binary` emits the text.

use crate::{
    ast::{
        ast::{BinaryOp, Type},
        expressions::BinaryExpr,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{compiler::Compiler, expr::gen_expression, runtime::RuntimeClass};

/// How a binary expression is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lowering {
    /// Whole-image equality
    ImageImageEquals,
    /// Element-wise image operator, written into the left image when it is a variable
    ImageImageInPlace,
    /// Image times a scalar
    ImageScaleInPlace,
    /// Image with a scalar under `+ - / %`
    ImageScalarInPlace,
    /// Each channel divided by a scalar
    PixelDivide,
    /// Each channel multiplied by a scalar and saturated
    PixelScaleClamped,
    /// Each channel combined with a scalar under `+ - %` and saturated
    PixelScalarClamped,
    /// Image with a packed pixel, image argument first; a leading pixel only under `+ *`
    ImagePixel,
    PixelPixelEquals,
    PixelPixel,
    StringEquals,
    /// Integer exponentiation
    Power,
    /// Plain host infix operator
    Infix,
}

impl Lowering {
    /// Whether the lowering can write its result into the left operand.
    pub fn is_in_place(&self) -> bool {
        matches!(
            self,
            Lowering::ImageImageInPlace | Lowering::ImageScaleInPlace | Lowering::ImageScalarInPlace
        )
    }
}

/// Picks the lowering for `left op right`, or none when the triple has no
/// host rendering.
pub fn select_lowering(op: BinaryOp, left: Type, right: Type) -> Option<Lowering> {
    use BinaryOp::*;
    use Type::*;

    match (left, right) {
        (Image, Image) if op == Eq => Some(Lowering::ImageImageEquals),
        (Image, Image) if op.is_arithmetic() => Some(Lowering::ImageImageInPlace),
        (Image, Int) if op == Times => Some(Lowering::ImageScaleInPlace),
        (Image, Int) if matches!(op, Plus | Minus | Div | Mod) => {
            Some(Lowering::ImageScalarInPlace)
        }
        (Pixel, Int) if op == Div => Some(Lowering::PixelDivide),
        (Pixel, Int) if op == Times => Some(Lowering::PixelScaleClamped),
        (Pixel, Int) if matches!(op, Plus | Minus | Mod) => Some(Lowering::PixelScalarClamped),
        (Image, Pixel) if op.is_arithmetic() => Some(Lowering::ImagePixel),
        // The library call takes the image first, so only commutative operators may swap.
        (Pixel, Image) if matches!(op, Plus | Times) => Some(Lowering::ImagePixel),
        (Pixel, Pixel) if op == Eq => Some(Lowering::PixelPixelEquals),
        (Pixel, Pixel) if op.is_arithmetic() => Some(Lowering::PixelPixel),
        (String, String) if op == Eq => Some(Lowering::StringEquals),
        (Int, Int) if op == Exp => Some(Lowering::Power),
        _ if has_infix(op, left, right) => Some(Lowering::Infix),
        _ => None,
    }
}

/// Scalar combinations the host infix operators accept as-is.
fn has_infix(op: BinaryOp, left: Type, right: Type) -> bool {
    use BinaryOp::*;
    use Type::*;

    match op {
        Plus => matches!((left, right), (Int, Int) | (String, String)),
        Minus | Times | Div | Mod => left == Int && right == Int,
        And | Or => left == Boolean && right == Boolean,
        Eq => left == right && matches!(left, Int | Boolean),
        Exp => false,
        _ => op.is_comparison() && left == Int && right == Int,
    }
}

/// Library operator name for an arithmetic operator.
fn op_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Plus => "PLUS",
        BinaryOp::Minus => "MINUS",
        BinaryOp::Times => "TIMES",
        BinaryOp::Div => "DIV",
        _ => "MOD",
    }
}

/// Host identifier of the image variable an in-place lowering writes into,
/// if the left operand names one.
pub fn in_place_target(compiler: &Compiler, binary: &BinaryExpr) -> Result<Option<String>, Error> {
    let lowering = select_lowering(binary.op, binary.left.get_type(), binary.right.get_type());
    if !lowering.is_some_and(|lowering| lowering.is_in_place()) {
        return Ok(None);
    }

    match binary.left.named_variable() {
        Some(ident) => compiler
            .scopes
            .resolve_host_name(&ident.name, &ident.span)
            .map(Some),
        None => Ok(None),
    }
}

pub fn gen_binary(compiler: &mut Compiler, binary: &BinaryExpr) -> Result<String, Error> {
    let left_type = binary.left.get_type();
    let right_type = binary.right.get_type();

    let lowering = select_lowering(binary.op, left_type, right_type).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnsupportedBinaryOperation {
                op: binary.op,
                left: left_type,
                right: right_type,
            },
            binary.span.start,
        )
    })?;

    let left = gen_expression(compiler, &binary.left)?;
    let right = gen_expression(compiler, &binary.right)?;
    let target = in_place_target(compiler, binary)?;
    let op = op_name(binary.op);

    let code = match lowering {
        Lowering::ImageImageEquals => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            format!(
                "{0}.binaryImageImageBooleanOp({0}.BoolOP.EQUALS, {1}, {2})",
                image_ops, left, right
            )
        }
        Lowering::ImageImageInPlace => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            let call = format!(
                "{0}.binaryImageImageOp({0}.OP.{1}, {2}, {3})",
                image_ops, op, left, right
            );
            write_back(compiler, call, target)
        }
        Lowering::ImageScaleInPlace | Lowering::ImageScalarInPlace => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            let call = format!(
                "{0}.binaryImageScalarOp({0}.OP.{1}, {2}, {3})",
                image_ops, op, left, right
            );
            write_back(compiler, call, target)
        }
        Lowering::PixelDivide => per_channel(compiler, &left, |channel| {
            format!("{} / {}", channel, right)
        }),
        Lowering::PixelScaleClamped | Lowering::PixelScalarClamped => {
            let symbol = binary.op.symbol();
            per_channel(compiler, &left, |channel| {
                saturate(&format!("{} {} {}", channel, symbol, right))
            })
        }
        Lowering::ImagePixel => {
            let (image, pixel) = if left_type == Type::Image {
                (left, right)
            } else {
                (right, left)
            };
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            format!(
                "{0}.binaryImagePixelOp({0}.OP.{1}, {2}, {3})",
                image_ops, op, image, pixel
            )
        }
        Lowering::PixelPixelEquals => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            format!(
                "{0}.binaryPackedPixelBooleanOp({0}.BoolOP.EQUALS, {1}, {2})",
                image_ops, left, right
            )
        }
        Lowering::PixelPixel => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            format!(
                "{0}.binaryPackedPixelPixelOp({0}.OP.{1}, {2}, {3})",
                image_ops, op, left, right
            )
        }
        Lowering::StringEquals => format!("{}.equals({})", left, right),
        Lowering::Power => format!("((int) Math.pow({}, {}))", left, right),
        Lowering::Infix => format!("({} {} {})", left, binary.op.symbol(), right),
    };

    Ok(code)
}

/// Copies an in-place result back into its target image.
fn write_back(compiler: &mut Compiler, call: String, target: Option<String>) -> String {
    match target {
        Some(target) => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            format!("{}.copyInto({}, {})", image_ops, call, target)
        }
        None => call,
    }
}

/// Rebuilds a packed pixel from `f` applied to each of its channels.
fn per_channel(compiler: &mut Compiler, pixel: &str, f: impl Fn(String) -> String) -> String {
    let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
    let channels: Vec<String> = ["red", "green", "blue"]
        .iter()
        .map(|channel| f(format!("{}.{}({})", pixel_ops, channel, pixel)))
        .collect();

    format!("{}.pack({})", pixel_ops, channels.join(", "))
}

fn saturate(value: &str) -> String {
    format!("Math.max(0, Math.min(255, {}))", value)
}
