//! The full document-to-declarations pipeline, with no I/O.
//!
//! flows:
//!     - parse_document: raw text -> sections
//!     - build_declarations: sections -> declaration tree (normalizes code docs)
//!     - render_declarations: declaration tree -> formatted source text
//!
//! The output depends only on the document and the style, so two runs over the
//! same inputs produce byte-identical text.

use crate::declaration::{build_declarations, DeclarationError};
use crate::formatter::{render_declarations, StyleConfig};
use crate::parser::{parse_document, ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Formatted declaration source
    pub source: String,
    /// Number of section types declared
    pub sections: usize,
    /// Number of code literals across all sections
    pub codes: usize,
}

/// Run the pipeline over `document`.
pub fn generate(document: &str, style: &StyleConfig) -> Result<Generated, CodegenError> {
    let sections = parse_document(document)?;
    let decls = build_declarations(&sections)?;

    Ok(Generated {
        source: render_declarations(&decls, style),
        sections: decls.sections.len(),
        codes: decls.code_count(),
    })
}
