//! Lowering engine.
//!
//! Walks a typed program once and produces the text of a single host
//! compilation unit. It handles:
//!
//! - Operator selection by (operator, left type, right type)
//! - Pixel and channel selectors on reads and writes
//! - Statements and control flow
//! - Program assembly, imports and re-indentation

pub mod compiler;
pub mod config;
pub mod expr;
pub mod format;
pub mod operators;
pub mod runtime;
pub mod selectors;
pub mod stmt;
