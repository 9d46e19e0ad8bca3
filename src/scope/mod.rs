//! Scope resolution for the code generator.
//!
//! The source language lets a declaration shadow a same-named declaration
//! at any nesting depth, while the host language rejects a local that
//! shadows another local still in scope. The resolver keeps a stack of
//! frames mirroring the open blocks and hands out host identifiers so that:
//!
//! - A name unused in every open frame keeps its source spelling
//! - A shadowing declaration gets a fresh, per-name numbered identifier
//! - A name colliding with a host reserved word is suffixed
//! - References resolve innermost-first against the frames still open

pub mod resolver;
