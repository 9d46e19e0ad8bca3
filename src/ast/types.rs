//! Host type mapping.
//!
//! Each language type lowers onto exactly one host type. Pixels are packed
//! into a plain `int`; images are the host's buffered raster class, which is
//! the only mapping that needs an import in the emitted unit.

use super::ast::Type;

impl Type {
    /// Returns the host type name used in declarations and signatures.
    pub fn host_type(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Boolean => "boolean",
            Type::String => "String",
            Type::Pixel => "int",
            Type::Image => "BufferedImage",
            Type::Void => "void",
        }
    }
}
