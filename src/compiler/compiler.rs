//! Main compiler module.
//!
//! Holds the `Compiler` state threaded through lowering and assembles the
//! emitted unit around the lowered program body.

use std::collections::BTreeSet;

use log::info;
use serde::Serialize;

use crate::{
    ast::{ast::Type, statements::Program},
    errors::errors::{Error, ErrorImpl},
    scope::resolver::{Declared, ScopeResolver},
    Span,
};

use super::{
    config::CompilerOptions,
    format::format_source,
    runtime::{is_host_identifier, RuntimeClass},
    stmt::gen_block_body,
};

/// State of one compilation.
///
/// A compiler owns a fresh scope resolver, so it must not be reused for a
/// second program.
pub struct Compiler {
    pub options: CompilerOptions,
    /// Source name to host identifier mapping for the open scopes
    pub scopes: ScopeResolver,
    /// Current block plus expression nesting
    depth: usize,
    /// Library classes referenced so far, in import order
    used_runtime: BTreeSet<RuntimeClass>,
}

/// Result of compiling a program.
#[derive(Debug, Clone, Serialize)]
pub struct Compilation {
    pub class_name: String,
    pub source: String,
    /// Every declaration in traversal order, with its host identifier
    pub declarations: Vec<Declared>,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Compiler {
            options,
            scopes: ScopeResolver::new(),
            depth: 0,
            used_runtime: BTreeSet::new(),
        }
    }

    /// Returns the name of a library class and records it for import.
    pub fn runtime(&mut self, class: RuntimeClass) -> &'static str {
        self.used_runtime.insert(class);
        class.name()
    }

    /// Converts a language type to host type text.
    pub fn host_type(&mut self, type_: Type) -> &'static str {
        if type_ == Type::Image {
            self.used_runtime.insert(RuntimeClass::BufferedImage);
        }

        type_.host_type()
    }

    /// Runs `f` one nesting level deeper, failing once the configured bound
    /// is passed.
    pub fn nested<T>(
        &mut self,
        span: &Span,
        f: impl FnOnce(&mut Compiler) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_nesting_depth,
                },
                span.start,
            ));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Lowers the whole program and wraps it in the host class.
    fn compile_program(&mut self, program: &Program) -> Result<String, Error> {
        if !is_host_identifier(&program.name) {
            return Err(Error::new(
                ErrorImpl::InvalidIdentifier {
                    name: program.name.clone(),
                },
                program.span.start,
            ));
        }

        // Parameters live in the outermost frame; the body opens its own.
        self.scopes.enter_scope();
        let mut params = Vec::new();
        for param in &program.params {
            let host_type = self.host_type(param.type_);
            let host_name = self.scopes.declare(&param.name, param.type_, &param.span)?;
            params.push(format!("{} {}", host_type, host_name));
        }

        let body = self.nested(&program.block.span, |compiler| {
            gen_block_body(compiler, &program.block)
        })?;
        self.scopes.exit_scope();

        let return_type = self.host_type(program.type_);

        let mut code = String::new();
        if let Some(package) = &self.options.package {
            code.push_str(&format!("package {};\n\n", package));
        }

        for class in &self.used_runtime {
            code.push_str(&format!(
                "import {};\n",
                class.import_path(&self.options.runtime_package)
            ));
        }
        if !self.used_runtime.is_empty() {
            code.push('\n');
        }

        code.push_str(&format!("public class {} {{\n", program.name));
        code.push_str(&format!(
            "public static {} {}({}) {{\n",
            return_type,
            self.options.entry_point,
            params.join(", ")
        ));
        code.push_str(&body);
        code.push_str("}\n}\n");

        if self.options.pretty {
            Ok(format_source(&code))
        } else {
            Ok(code)
        }
    }
}

/// Compiles a typed program to the source text of one host class.
pub fn compile(program: &Program, options: CompilerOptions) -> Result<Compilation, Error> {
    options.validate()?;

    let mut compiler = Compiler::new(options);
    let source = compiler.compile_program(program)?;

    info!(
        "compiled `{}` ({} declarations, {} library classes)",
        program.name,
        compiler.scopes.declarations().len(),
        compiler.used_runtime.len()
    );

    Ok(Compilation {
        class_name: program.name.clone(),
        source,
        declarations: compiler.scopes.into_declarations(),
    })
}
