use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::{
    ast::ast::Type,
    compiler::runtime::{is_reserved, is_source_identifier},
    errors::errors::{Error, ErrorImpl},
    Span,
};

/// Index into the resolver's declaration table.
pub type DeclId = usize;

/// The binding a source name resolves to while its frame is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub host_name: String,
    pub type_: Type,
    pub decl: DeclId,
}

/// One declaration seen during the traversal, kept after its frame closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declared {
    pub source_name: String,
    pub host_name: String,
    #[serde(rename = "type")]
    pub type_: Type,
    pub span: Span,
    /// Number of frames open when the name was declared (parameters are 1)
    pub depth: usize,
}

#[derive(Debug, Default)]
struct ScopeFrame {
    bindings: HashMap<String, Binding>,
}

impl ScopeFrame {
    fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }
}

/// Stack of open frames, innermost last, plus the per-name counters used to
/// mint shadowing identifiers. One resolver serves exactly one compilation.
#[derive(Debug, Default)]
pub struct ScopeResolver {
    frames: Vec<ScopeFrame>,
    counters: HashMap<String, u32>,
    declarations: Vec<Declared>,
}

impl ScopeResolver {
    pub fn new() -> Self {
        ScopeResolver::default()
    }

    pub fn enter_scope(&mut self) {
        self.frames.push(ScopeFrame::default());
        debug!("entered scope (depth {})", self.frames.len());
    }

    pub fn exit_scope(&mut self) {
        self.frames.pop();
        debug!("exited scope (depth {})", self.frames.len());
    }

    /// Number of frames currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Registers `name` in the innermost frame and returns its host identifier.
    ///
    /// Declaring with no frame open opens the outermost one. Names outside
    /// the source identifier grammar are rejected.
    pub fn declare(&mut self, name: &str, type_: Type, span: &Span) -> Result<String, Error> {
        if !is_source_identifier(name) {
            return Err(Error::new(
                ErrorImpl::InvalidIdentifier {
                    name: name.to_string(),
                },
                span.start,
            ));
        }

        if self.frames.is_empty() {
            self.enter_scope();
        }

        let base = if is_reserved(name) {
            format!("{}$", name)
        } else {
            name.to_string()
        };

        let host_name = if self.is_bound(name) {
            let counter = self.counters.entry(name.to_string()).or_insert(0);
            *counter += 1;
            if base.ends_with('$') {
                format!("{}{}", base, counter)
            } else {
                format!("{}${}", base, counter)
            }
        } else {
            base
        };

        if host_name != name {
            debug!("renamed `{}` to `{}`", name, host_name);
        }

        let decl = self.declarations.len();
        self.declarations.push(Declared {
            source_name: name.to_string(),
            host_name: host_name.clone(),
            type_,
            span: *span,
            depth: self.frames.len(),
        });

        if let Some(frame) = self.frames.last_mut() {
            frame.bindings.insert(
                name.to_string(),
                Binding {
                    host_name: host_name.clone(),
                    type_,
                    decl,
                },
            );
        }

        Ok(host_name)
    }

    /// Looks `name` up innermost-first across the open frames.
    pub fn resolve(&self, name: &str, span: &Span) -> Result<&Binding, Error> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnresolvedReference {
                        name: name.to_string(),
                    },
                    span.start,
                )
            })
    }

    pub fn resolve_host_name(&self, name: &str, span: &Span) -> Result<String, Error> {
        self.resolve(name, span)
            .map(|binding| binding.host_name.clone())
    }

    /// Whether any open frame binds `name`.
    pub fn is_bound(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.get(name).is_some())
    }

    pub fn declarations(&self) -> &[Declared] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<Declared> {
        self.declarations
    }
}
