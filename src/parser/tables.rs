//! Table extraction: split the raw document into `BEGIN_CODE_TABLE` blocks.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseError;

/// Non-greedy so each block stops at its own end marker.
static TABLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)BEGIN_CODE_TABLE(.*?)END_CODE_TABLE").unwrap());

/// Return the text strictly between each begin/end marker pair, in document order.
///
/// Fails with [`ParseError::NoTables`] when the document holds no complete table.
/// A trailing `BEGIN_CODE_TABLE` without an end marker is ignored.
pub fn extract_tables(document: &str) -> Result<Vec<&str>, ParseError> {
    let tables: Vec<&str> = TABLE_BLOCK
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    if tables.is_empty() {
        return Err(ParseError::NoTables);
    }

    tracing::debug!(count = tables.len(), "extracted code tables");
    Ok(tables)
}
