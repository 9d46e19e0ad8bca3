//! Error types and error handling for the code generator.
//!
//! Every failure the generator can hit is a program-correctness defect
//! rather than a transient condition:
//!
//! - Unsupported constructs (operator/type combinations, unary operators,
//!   selector shapes) outside the covered lowering matrix
//! - References with no enclosing declaration
//! - Unknown named constants
//! - Programs nested deeper than the configured bound
//!
//! All of them share one error type carrying the source position.

pub mod errors;

#[cfg(test)]
mod tests;
