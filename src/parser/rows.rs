//! Table parsing: turn one extracted block into a [`Section`].
//!
//! A block looks like:
//!
//! ```text
//!  writing-system "Writing system keys"
//! CODE Backquote
//!     `~ on a US keyboard.
//! CODE_OPT IntlBackslash
//! ```
//!
//! The header gives the section id and its quoted description. Every `CODE` or
//! `CODE_OPT` token opens a row that runs until the next marker or the end of
//! the block. Both markers produce the same data.
//!
//! gotchas:
//!     - Markers must be whole whitespace-delimited tokens; `KEYCODE` inside a
//!       description does not open a row
//!     - Text between the header and the first marker is ignored

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseError;
use crate::types::{CodeEntry, Section};

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*([\w-]+)[ \t]+"([^"]+)""#).unwrap());

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

static ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(\w+)(?:\s+(.*))?$").unwrap());

const ROW_MARKERS: &[&str] = &["CODE", "CODE_OPT"];

/// Parse one table block. `index` is the 1-based position of the block in the
/// document and is only used for error reporting.
pub fn parse_table(block: &str, index: usize) -> Result<Section, ParseError> {
    let header = HEADER
        .captures(block)
        .ok_or_else(|| ParseError::MalformedHeader {
            table: index,
            found: first_line(block),
        })?;

    let mut section = Section::new(&header[1], &header[2]);

    let header_end = header.get(0).map_or(0, |m| m.end());
    let body = &block[header_end..];

    for row in split_rows(body) {
        let entry = parse_row(row).ok_or_else(|| ParseError::MalformedRow {
            section: section.id.clone(),
            row: collapse_whitespace(row),
        })?;
        section.codes.push(entry);
    }

    tracing::debug!(
        section = %section.id,
        rows = section.codes.len(),
        "parsed code table"
    );

    Ok(section)
}

/// Slice the table body into row texts, each starting right after its marker.
fn split_rows(body: &str) -> Vec<&str> {
    let markers: Vec<(usize, usize)> = TOKEN
        .find_iter(body)
        .filter(|m| ROW_MARKERS.contains(&m.as_str()))
        .map(|m| (m.start(), m.end()))
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, end))| {
            let next = markers.get(i + 1).map_or(body.len(), |&(start, _)| start);
            &body[end..next]
        })
        .collect()
}

/// Parse `code<whitespace>description`. Returns `None` when the row does not
/// start with a bare code token.
fn parse_row(row: &str) -> Option<CodeEntry> {
    let caps = ROW.captures(row.trim_start())?;
    let code = caps.get(1)?.as_str();

    let description = caps
        .get(2)
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|d| !d.is_empty());

    Some(CodeEntry::new(code, description))
}

/// Collapse whitespace runs (including line breaks) to single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_line(block: &str) -> String {
    block
        .trim_start()
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
