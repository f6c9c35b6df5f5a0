//! keycodegen turns the UI Events `code` table source into TypeScript
//! declarations: one string-literal union per table plus a `KeyCode` union
//! referencing all of them.
//!
//! The crate is usable as a library through [`codegen::generate`], which runs
//! the whole pipeline on in-memory text, or as the `keycodegen` CLI.

pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod declaration;
pub mod formatter;
pub mod normalize;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use cli::{CheckArgs, Cli, Commands, GenerateArgs};
pub use codegen::{generate, CodegenError, Generated};
pub use config::Config;
pub use declaration::{build_declarations, Declarations, DeclarationError, TypeAlias, UnionMember};
pub use formatter::{render_declarations, StyleConfig, StyleError};
pub use normalize::normalize_description;
pub use parser::{extract_tables, parse_document, parse_table, ParseError};
pub use types::{CodeEntry, Section};
