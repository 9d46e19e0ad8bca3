//! Primitive library table.
//!
//! The emitted unit calls into a fixed set of host library classes (pixel
//! packing, image operators, console output, image loading). This module
//! names those classes, the constants the language predefines, and the words
//! a generated local must never be spelled as.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::ast::Type;

lazy_static! {
    /// Host keywords and literals, plus the class names emitted code refers
    /// to unqualified. A local spelled like one of the classes would obscure it.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
            "class", "const", "continue", "default", "do", "double", "else", "enum",
            "extends", "final", "finally", "float", "for", "goto", "if", "implements",
            "import", "instanceof", "int", "interface", "long", "native", "new",
            "package", "private", "protected", "public", "return", "short", "static",
            "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
            "transient", "try", "void", "volatile", "while", "true", "false", "null",
            "_",
        ] {
            set.insert(word);
        }
        for class in RuntimeClass::ALL {
            set.insert(class.name());
        }
        set.insert("Math");
        set.insert("String");
        set
    };

    /// Predefined constants, as the packed value the host sees.
    pub static ref NAMED_CONSTANTS: HashMap<&'static str, NamedConstant> = {
        let mut map = HashMap::new();
        map.insert("Z", NamedConstant { value: 255, type_: Type::Int });
        for (name, red, green, blue) in [
            ("BLACK", 0, 0, 0),
            ("BLUE", 0, 0, 255),
            ("CYAN", 0, 255, 255),
            ("DARK_GRAY", 64, 64, 64),
            ("GRAY", 128, 128, 128),
            ("GREEN", 0, 255, 0),
            ("LIGHT_GRAY", 192, 192, 192),
            ("MAGENTA", 255, 0, 255),
            ("ORANGE", 255, 200, 0),
            ("PINK", 255, 175, 175),
            ("RED", 255, 0, 0),
            ("WHITE", 255, 255, 255),
            ("YELLOW", 255, 255, 0),
        ] {
            map.insert(
                name,
                NamedConstant {
                    value: packed_argb(red, green, blue),
                    type_: Type::Pixel,
                },
            );
        }
        map
    };

    static ref SOURCE_IDENTIFIER: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref HOST_IDENTIFIER: Regex = Regex::new("^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
    static ref HOST_PACKAGE: Regex =
        Regex::new("^[A-Za-z_][A-Za-z0-9_]*(\\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap();
}

/// Library classes the emitted code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeClass {
    ConsoleIO,
    PixelOps,
    ImageOps,
    FileURLIO,
    /// The host raster type images are declared as
    BufferedImage,
}

impl RuntimeClass {
    pub const ALL: [RuntimeClass; 5] = [
        RuntimeClass::ConsoleIO,
        RuntimeClass::PixelOps,
        RuntimeClass::ImageOps,
        RuntimeClass::FileURLIO,
        RuntimeClass::BufferedImage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuntimeClass::ConsoleIO => "ConsoleIO",
            RuntimeClass::PixelOps => "PixelOps",
            RuntimeClass::ImageOps => "ImageOps",
            RuntimeClass::FileURLIO => "FileURLIO",
            RuntimeClass::BufferedImage => "BufferedImage",
        }
    }

    /// Fully qualified import for the class.
    pub fn import_path(&self, runtime_package: &str) -> String {
        match self {
            RuntimeClass::BufferedImage => "java.awt.image.BufferedImage".to_string(),
            _ => format!("{}.{}", runtime_package, self.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedConstant {
    pub value: i32,
    pub type_: Type,
}

/// Packs three channels into an opaque ARGB value.
pub fn packed_argb(red: u8, green: u8, blue: u8) -> i32 {
    let packed = 0xFF00_0000u32 | (red as u32) << 16 | (green as u32) << 8 | blue as u32;
    packed as i32
}

pub fn lookup_constant(name: &str) -> Option<NamedConstant> {
    NAMED_CONSTANTS.get(name).copied()
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Whether `name` is a source-language identifier. Source names never
/// contain `$`, which is left for minted host names.
pub fn is_source_identifier(name: &str) -> bool {
    SOURCE_IDENTIFIER.is_match(name)
}

/// Whether `name` can be written as a host identifier unchanged.
pub fn is_host_identifier(name: &str) -> bool {
    HOST_IDENTIFIER.is_match(name) && !is_reserved(name)
}

pub fn is_host_package(name: &str) -> bool {
    HOST_PACKAGE.is_match(name) && name.split('.').all(|part| !is_reserved(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_colours() {
        assert_eq!(lookup_constant("RED").unwrap().value, -65536);
        assert_eq!(lookup_constant("BLACK").unwrap().value, -16777216);
        assert_eq!(lookup_constant("WHITE").unwrap().value, -1);
        assert_eq!(lookup_constant("BLUE").unwrap().type_, Type::Pixel);
    }

    #[test]
    fn test_saturation_bound() {
        let z = lookup_constant("Z").unwrap();
        assert_eq!(z.value, 255);
        assert_eq!(z.type_, Type::Int);
    }

    #[test]
    fn test_unknown_constant() {
        assert!(lookup_constant("TEAL").is_none());
        assert!(lookup_constant("red").is_none());
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved("class"));
        assert!(is_reserved("null"));
        assert!(is_reserved("PixelOps"));
        assert!(!is_reserved("red"));
    }

    #[test]
    fn test_host_identifiers() {
        assert!(is_host_identifier("Example"));
        assert!(is_host_identifier("apply"));
        assert!(!is_host_identifier("3d"));
        assert!(!is_host_identifier("while"));
        assert!(!is_host_identifier("has space"));
    }

    #[test]
    fn test_host_packages() {
        assert!(is_host_package("edu.ufl.cise.cop4020fa23"));
        assert!(is_host_package("generated"));
        assert!(!is_host_package("bad..package"));
        assert!(!is_host_package("com.new.stuff"));
    }

    #[test]
    fn test_imports() {
        assert_eq!(
            RuntimeClass::PixelOps.import_path("pkg.runtime"),
            "pkg.runtime.PixelOps"
        );
        assert_eq!(
            RuntimeClass::BufferedImage.import_path("pkg.runtime"),
            "java.awt.image.BufferedImage"
        );
    }
}
