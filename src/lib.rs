#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod macros;
pub mod scope;

extern crate regex;

/// A line/column location in the source the typed tree was built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position(pub u32, pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0, 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Renders a compilation error the way the driver reports it.
///
/// ```text
/// Error: UnresolvedReference (Name `b` has no enclosing declaration)
/// -> program.json:4:7
/// ```
pub fn format_error(error: &Error, file: &str) -> String {
    let position = error.get_position();

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}:{}", header, file, position)
}

pub fn display_error(error: &Error, file: &str) {
    eprintln!("{}", format_error(error, file));
}
