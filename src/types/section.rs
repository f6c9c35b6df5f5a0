//! Core data types produced by the table parser.
//!
//! A [`Section`] mirrors one `BEGIN_CODE_TABLE` ... `END_CODE_TABLE` block of the
//! source document. Sections are built once by the parser and never mutated
//! afterwards; the declaration builder only reads them.
//!
//! invariants:
//!     - `codes` keeps the row order of the source table
//!     - `CodeEntry::description` is never `Some("")`; blank descriptions are `None`

/// One code table of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Slug from the table header (e.g. "writing-system")
    pub id: String,
    /// Quoted header text, used verbatim as the section documentation
    pub description: String,
    /// Rows of the table, in source order
    pub codes: Vec<CodeEntry>,
}

/// One row of a code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    /// Bare code token (e.g. "KeyA")
    pub code: String,
    /// Whitespace-collapsed description, if the row had any text after the code
    pub description: Option<String>,
}

impl Section {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            codes: Vec::new(),
        }
    }

    /// Iterate over the bare code tokens of this section.
    pub fn code_names(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(|c| c.code.as_str())
    }
}

impl CodeEntry {
    pub fn new(code: impl Into<String>, description: Option<String>) -> Self {
        Self {
            code: code.into(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_names_keep_order() {
        let mut section = Section::new("arrow-pad", "Arrow pad keys");
        section.codes.push(CodeEntry::new("ArrowDown", None));
        section.codes.push(CodeEntry::new("ArrowLeft", Some("Left".to_string())));

        let names: Vec<&str> = section.code_names().collect();
        assert_eq!(names, vec!["ArrowDown", "ArrowLeft"]);
    }
}
