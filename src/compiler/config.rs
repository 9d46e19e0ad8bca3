//! Options controlling the shape of the emitted unit.

use serde::{Deserialize, Serialize};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::runtime::{is_host_identifier, is_host_package};

pub const DEFAULT_PACKAGE: &str = "edu.ufl.cise.cop4020fa23";
pub const DEFAULT_RUNTIME_PACKAGE: &str = "edu.ufl.cise.cop4020fa23.runtime";
pub const DEFAULT_ENTRY_POINT: &str = "apply";
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Package clause of the emitted unit, none for the default package
    pub package: Option<String>,
    /// Package the primitive libraries are imported from
    pub runtime_package: String,
    /// Name of the static method wrapping the program body
    pub entry_point: String,
    /// Bound on block plus expression nesting
    pub max_nesting_depth: usize,
    /// Re-indent the emitted unit
    pub pretty: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            package: Some(DEFAULT_PACKAGE.to_string()),
            runtime_package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            pretty: true,
        }
    }
}

impl CompilerOptions {
    /// Parses options from TOML; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Checks every name the options splice into the emitted unit.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(package) = &self.package {
            if !is_host_package(package) {
                return Err(invalid(package));
            }
        }

        if !is_host_package(&self.runtime_package) {
            return Err(invalid(&self.runtime_package));
        }

        if !is_host_identifier(&self.entry_point) {
            return Err(invalid(&self.entry_point));
        }

        Ok(())
    }
}

fn invalid(name: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidIdentifier {
            name: name.to_string(),
        },
        Position::null(),
    )
}
