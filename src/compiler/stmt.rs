use log::trace;

use crate::{
    ast::{
        ast::Type,
        expressions::Expr,
        statements::{AssignmentStmt, BlockStmt, Declaration, Dimension, DoStmt, IfStmt, Stmt},
    },
    errors::errors::Error,
};

use super::{
    compiler::Compiler,
    expr::gen_expression,
    operators::in_place_target,
    runtime::RuntimeClass,
    selectors::gen_lvalue_assignment,
};

/// Lowers one statement to one or more complete host lines.
pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<String, Error> {
    match statement {
        Stmt::Declaration(declaration) => {
            trace!("lowering declaration of `{}`", declaration.name_def.name);
            gen_declaration(compiler, declaration)
        }
        Stmt::Assignment(assignment) => {
            trace!("lowering assignment to `{}`", assignment.lvalue.name);
            gen_assignment(compiler, assignment)
        }
        Stmt::Write(write) => {
            trace!("lowering write");
            let value = gen_expression(compiler, &write.expr)?;
            let console = compiler.runtime(RuntimeClass::ConsoleIO);
            let routine = if write.expr.get_type() == Type::Pixel {
                "writePixel"
            } else {
                "write"
            };

            Ok(format!("{}.{}({});\n", console, routine, value))
        }
        Stmt::Return(stmt) => {
            trace!("lowering return");
            let value = gen_expression(compiler, &stmt.expr)?;
            Ok(format!("return {};\n", value))
        }
        Stmt::Block(block) => Ok(format!("{}\n", gen_block(compiler, block)?)),
        Stmt::If(stmt) => gen_if(compiler, stmt),
        Stmt::Do(stmt) => gen_do(compiler, stmt),
    }
}

/// Lowers a nested block, braces included, in a fresh scope.
pub fn gen_block(compiler: &mut Compiler, block: &BlockStmt) -> Result<String, Error> {
    compiler.nested(&block.span, |compiler| {
        let body = gen_block_body(compiler, block)?;
        Ok(format!("{{\n{}}}", body))
    })
}

/// Lowers the statements of a block in a fresh scope, without braces.
pub fn gen_block_body(compiler: &mut Compiler, block: &BlockStmt) -> Result<String, Error> {
    compiler.scopes.enter_scope();
    let body = block
        .body
        .iter()
        .map(|statement| gen_statement(compiler, statement))
        .collect::<Result<Vec<String>, Error>>();
    compiler.scopes.exit_scope();

    Ok(body?.concat())
}

fn gen_dimension(
    compiler: &mut Compiler,
    dimension: &Dimension,
) -> Result<(String, String), Error> {
    let width = gen_expression(compiler, &dimension.width)?;
    let height = gen_expression(compiler, &dimension.height)?;
    Ok((width, height))
}

fn gen_declaration(compiler: &mut Compiler, declaration: &Declaration) -> Result<String, Error> {
    let name_def = &declaration.name_def;

    // The initializer and dimension still see the enclosing binding of the name.
    let initializer = match &declaration.initializer {
        Some(initializer) => Some((
            gen_expression(compiler, initializer)?,
            initializer.get_type(),
        )),
        None => None,
    };
    let dimension = match &name_def.dimension {
        Some(dimension) => Some(gen_dimension(compiler, dimension)?),
        None => None,
    };

    let host_type = compiler.host_type(name_def.type_);
    let host_name = compiler
        .scopes
        .declare(&name_def.name, name_def.type_, &name_def.span)?;

    let value = if name_def.type_ == Type::Image {
        gen_image_value(compiler, initializer, dimension)
    } else {
        initializer.map(|(code, _)| code)
    };

    match value {
        Some(value) => Ok(format!("{} {} = {};\n", host_type, host_name, value)),
        None => Ok(format!("{} {};\n", host_type, host_name)),
    }
}

/// Initial value of an image declaration.
///
/// A STRING initializer is a location to load from; a dimension resizes the
/// initial image or, with no initializer, allocates a blank one.
fn gen_image_value(
    compiler: &mut Compiler,
    initializer: Option<(String, Type)>,
    dimension: Option<(String, String)>,
) -> Option<String> {
    let initializer = initializer.map(|(code, type_)| {
        if type_ == Type::String {
            let file_io = compiler.runtime(RuntimeClass::FileURLIO);
            format!("{}.readImage({})", file_io, code)
        } else {
            code
        }
    });

    match (initializer, dimension) {
        (Some(image), Some((width, height))) => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            Some(format!(
                "{}.copyAndResize({}, {}, {})",
                image_ops, image, width, height
            ))
        }
        (None, Some((width, height))) => {
            let image_ops = compiler.runtime(RuntimeClass::ImageOps);
            Some(format!("{}.makeImage({}, {})", image_ops, width, height))
        }
        (image, None) => image,
    }
}

/// Assignment through a plain variable or a selector.
///
/// `im = im op x` is emitted as the bare in-place call. Any other image
/// target keeps its assignment, so `out = ImageOps.copyInto(.., im)` leaves
/// `out` aliasing `im`.
fn gen_assignment(compiler: &mut Compiler, assignment: &AssignmentStmt) -> Result<String, Error> {
    let lvalue = &assignment.lvalue;
    let binding = compiler.scopes.resolve(&lvalue.name, &lvalue.span)?;
    let host_name = binding.host_name.clone();
    let variable_type = binding.type_;

    if lvalue.pixel.is_some() || lvalue.channel.is_some() {
        return gen_lvalue_assignment(
            compiler,
            lvalue,
            variable_type,
            &host_name,
            &assignment.expr,
        );
    }

    let value = gen_expression(compiler, &assignment.expr)?;

    // `im = im op x` already wrote into `im`.
    if variable_type == Type::Image {
        if let Expr::Binary(binary) = &assignment.expr {
            if in_place_target(compiler, binary)?.as_deref() == Some(host_name.as_str()) {
                return Ok(format!("{};\n", value));
            }
        }
    }

    Ok(format!("{} = {};\n", host_name, value))
}

fn gen_if(compiler: &mut Compiler, stmt: &IfStmt) -> Result<String, Error> {
    if stmt.guarded_blocks.is_empty() {
        return Ok(String::new());
    }

    let mut code = String::new();
    for (index, guarded) in stmt.guarded_blocks.iter().enumerate() {
        let guard = gen_expression(compiler, &guarded.guard)?;
        let block = gen_block(compiler, &guarded.block)?;

        if index == 0 {
            code.push_str(&format!("if ({}) {}", guard, block));
        } else {
            code.push_str(&format!(" else if ({}) {}", guard, block));
        }
    }
    code.push_str(" else {\n}\n");

    Ok(code)
}

/// Each guarded block runs when its guard holds; the loop continues while
/// the last guard holds.
fn gen_do(compiler: &mut Compiler, stmt: &DoStmt) -> Result<String, Error> {
    let Some(last) = stmt.guarded_blocks.last() else {
        return Ok(String::new());
    };

    let mut code = String::from("do {\n");
    for guarded in &stmt.guarded_blocks {
        let guard = gen_expression(compiler, &guarded.guard)?;
        let block = gen_block(compiler, &guarded.block)?;
        code.push_str(&format!("if ({}) {}\n", guard, block));
    }

    let guard = gen_expression(compiler, &last.guard)?;
    code.push_str(&format!("}} while ({});\n", guard));

    Ok(code)
}
