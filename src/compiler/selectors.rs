//! Pixel and channel selectors.
//!
//! Reads go through `gen_postfix`; writes through `gen_lvalue_assignment`.
//! Both dispatch on the primary's type and which selectors are present.

use crate::{
    ast::{
        ast::{ChannelColor, Type},
        expressions::{ChannelSelector, Expr, PixelSelector, PostfixExpr},
        statements::LValue,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{compiler::Compiler, expr::gen_expression, runtime::RuntimeClass};

/// `Red` for use in `extractRed` / `setRed`.
fn capitalized(color: ChannelColor) -> &'static str {
    match color {
        ChannelColor::Red => "Red",
        ChannelColor::Green => "Green",
        ChannelColor::Blue => "Blue",
    }
}

fn describe(pixel: Option<&PixelSelector>, channel: Option<&ChannelSelector>) -> String {
    match (pixel, channel) {
        (Some(_), Some(channel)) => format!("a pixel and channel {}", channel.color),
        (Some(_), None) => "a pixel".to_string(),
        (None, Some(channel)) => format!("channel {}", channel.color),
        (None, None) => "nothing".to_string(),
    }
}

fn gen_coordinates(
    compiler: &mut Compiler,
    selector: &PixelSelector,
) -> Result<(String, String), Error> {
    let x = gen_expression(compiler, &selector.x)?;
    let y = gen_expression(compiler, &selector.y)?;
    Ok((x, y))
}

pub fn gen_postfix(compiler: &mut Compiler, postfix: &PostfixExpr) -> Result<String, Error> {
    let primary_type = postfix.primary.get_type();

    match (primary_type, &postfix.pixel, &postfix.channel) {
        (_, None, None) => gen_expression(compiler, &postfix.primary),
        (Type::Pixel, None, Some(channel)) => {
            let pixel = gen_expression(compiler, &postfix.primary)?;
            let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
            Ok(format!("{}.{}({})", pixel_ops, channel.color, pixel))
        }
        (Type::Image, Some(selector), channel) => {
            let image = gen_expression(compiler, &postfix.primary)?;
            let (x, y) = gen_coordinates(compiler, selector)?;
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            let pixel = format!("{}.getRGB({}, {}, {})", image_ops, image, x, y);

            match channel {
                Some(channel) => {
                    let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
                    Ok(format!("{}.{}({})", pixel_ops, channel.color, pixel))
                }
                None => Ok(pixel),
            }
        }
        (Type::Image, None, Some(channel)) => {
            let image = gen_expression(compiler, &postfix.primary)?;
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            Ok(format!(
                "{}.extract{}({})",
                image_ops,
                capitalized(channel.color),
                image
            ))
        }
        (primary, pixel, channel) => Err(Error::new(
            ErrorImpl::UnsupportedSelector {
                primary,
                detail: describe(pixel.as_ref(), channel.as_ref()),
            },
            postfix.span.start,
        )),
    }
}

/// Lowers an assignment whose target carries selectors.
///
/// `variable_type` is the declared type of the variable, not the type of the
/// selected part.
pub fn gen_lvalue_assignment(
    compiler: &mut Compiler,
    lvalue: &LValue,
    variable_type: Type,
    host_name: &str,
    expr: &Expr,
) -> Result<String, Error> {
    match (variable_type, &lvalue.pixel, &lvalue.channel) {
        (Type::Pixel, None, Some(channel)) => {
            let value = gen_expression(compiler, expr)?;
            let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
            Ok(format!(
                "{0} = {1}.set{2}({0}, {3});\n",
                host_name,
                pixel_ops,
                capitalized(channel.color),
                value
            ))
        }
        (Type::Image, Some(selector), None) => {
            let (x, y) = gen_coordinates(compiler, selector)?;
            let value = gen_expression(compiler, expr)?;
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            Ok(format!(
                "{}.setRGB({}, {}, {}, {});\n",
                image_ops, host_name, x, y, value
            ))
        }
        (Type::Image, Some(selector), Some(channel)) => {
            let (x, y) = gen_coordinates(compiler, selector)?;
            let value = gen_expression(compiler, expr)?;
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            let pixel_ops = compiler.runtime(RuntimeClass::PixelOps);
            Ok(format!(
                "{0}.setRGB({1}, {2}, {3}, {4}.set{5}({0}.getRGB({1}, {2}, {3}), {6}));\n",
                image_ops,
                host_name,
                x,
                y,
                pixel_ops,
                capitalized(channel.color),
                value
            ))
        }
        (Type::Image, None, Some(_)) => Err(Error::new(
            ErrorImpl::UnsupportedLValue {
                name: lvalue.name.clone(),
                detail: "a channel selector without coordinates".to_string(),
            },
            lvalue.span.start,
        )),
        (_, pixel, channel) => Err(Error::new(
            ErrorImpl::UnsupportedLValue {
                name: lvalue.name.clone(),
                detail: describe(pixel.as_ref(), channel.as_ref()),
            },
            lvalue.span.start,
        )),
    }
}
