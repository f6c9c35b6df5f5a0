//! Parsing of the code table source document.
//!
//! The document is free text with embedded tables:
//!
//! ```text
//! BEGIN_CODE_TABLE <id> "<description>"
//! CODE <Code> <description...>
//! CODE_OPT <Code> <description...>
//! END_CODE_TABLE
//! ```
//!
//! flows:
//!     - `extract_tables` finds the blocks between the markers
//!     - `parse_table` turns each block into a `Section`
//!     - `parse_document` runs both and keeps document order
//!
//! Any deviation from this shape is fatal. The source is hand-maintained, so a
//! malformed table is a defect to fix upstream rather than something to skip.

mod rows;
mod tables;

use crate::types::Section;
use thiserror::Error;

pub use rows::parse_table;
pub use tables::extract_tables;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No BEGIN_CODE_TABLE/END_CODE_TABLE blocks found in document")]
    NoTables,
    #[error("Malformed header in table #{table}: expected `<id> \"<description>\"`, found `{found}`")]
    MalformedHeader { table: usize, found: String },
    #[error("Malformed row in section `{section}`: expected `<code> <description>`, found `{row}`")]
    MalformedRow { section: String, row: String },
}

/// Parse every code table of the document, in document order.
pub fn parse_document(document: &str) -> Result<Vec<Section>, ParseError> {
    extract_tables(document)?
        .into_iter()
        .enumerate()
        .map(|(i, block)| parse_table(block, i + 1))
        .collect()
}
