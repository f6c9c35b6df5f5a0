//! Declaration tree built from parsed sections.
//!
//! Every node owns its documentation: a [`TypeAlias`] carries the section
//! description and each [`UnionMember::Literal`] carries its comment lines, so
//! rendering never has to look documentation up by name.
//!
//! invariants:
//!     - One alias per section, in section order, followed by the aggregate
//!     - Alias names are valid identifiers and unique (aggregate included)
//!     - The aggregate references every section alias exactly once
//!
//! gotchas:
//!     - Only per-code descriptions are normalized; section descriptions are
//!       used verbatim

mod naming;

use crate::normalize::normalize_description;
use crate::types::Section;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub use naming::{is_valid_identifier, section_type_name, AGGREGATE_NAME, TYPE_SUFFIX};

/// Explicit line-break marker inside descriptions. Each segment keeps its
/// leading whitespace; trailing whitespace is dropped.
pub const LINE_BREAK: &str = "<br/>";

#[derive(Error, Debug)]
pub enum DeclarationError {
    #[error("Section `{section}` derives `{name}`, which is not a valid type identifier")]
    InvalidTypeName { section: String, name: String },
    #[error("Section `{section}` derives `{name}`, which is already declared")]
    DuplicateTypeName { section: String, name: String },
}

/// An exported `type Name = A | B | ...;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    /// Rendered as a block comment above the declaration
    pub doc: Option<String>,
    pub members: Vec<UnionMember>,
}

/// One alternative of a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionMember {
    /// String literal type; `doc` holds one entry per line comment
    Literal { value: String, doc: Vec<String> },
    /// Reference to another declared type
    Reference(String),
}

impl UnionMember {
    pub fn doc(&self) -> &[String] {
        match self {
            UnionMember::Literal { doc, .. } => doc,
            UnionMember::Reference(_) => &[],
        }
    }
}

impl TypeAlias {
    /// Whether any member carries comment lines.
    pub fn has_member_docs(&self) -> bool {
        self.members.iter().any(|m| !m.doc().is_empty())
    }
}

/// The full set of generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations {
    /// Per-section aliases, in document order
    pub sections: Vec<TypeAlias>,
    /// `KeyCode`, referencing every section alias
    pub aggregate: TypeAlias,
}

impl Declarations {
    /// All aliases in output order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeAlias> {
        self.sections.iter().chain(std::iter::once(&self.aggregate))
    }

    /// Look up an alias by name.
    pub fn get(&self, name: &str) -> Option<&TypeAlias> {
        self.iter().find(|alias| alias.name == name)
    }

    /// Total number of code literals across all sections.
    pub fn code_count(&self) -> usize {
        self.sections.iter().map(|s| s.members.len()).sum()
    }
}

/// Map the parsed sections onto the declaration tree.
pub fn build_declarations(sections: &[Section]) -> Result<Declarations, DeclarationError> {
    let mut declared: HashSet<String> = HashSet::from([AGGREGATE_NAME.to_string()]);
    let mut seen_codes: HashMap<&str, &str> = HashMap::new();
    let mut aliases = Vec::with_capacity(sections.len());

    for section in sections {
        let name = section_type_name(&section.id);

        if !is_valid_identifier(&name) {
            return Err(DeclarationError::InvalidTypeName {
                section: section.id.clone(),
                name,
            });
        }
        if !declared.insert(name.clone()) {
            return Err(DeclarationError::DuplicateTypeName {
                section: section.id.clone(),
                name,
            });
        }

        for code in section.code_names() {
            if let Some(previous) = seen_codes.insert(code, &section.id) {
                tracing::warn!(
                    code,
                    first = previous,
                    again = %section.id,
                    "code appears more than once"
                );
            }
        }

        let members = section
            .codes
            .iter()
            .map(|entry| UnionMember::Literal {
                value: entry.code.clone(),
                doc: entry
                    .description
                    .as_deref()
                    .map(comment_lines)
                    .unwrap_or_default(),
            })
            .collect();

        aliases.push(TypeAlias {
            name,
            doc: Some(section.description.clone()),
            members,
        });
    }

    let aggregate = TypeAlias {
        name: AGGREGATE_NAME.to_string(),
        doc: None,
        members: aliases
            .iter()
            .map(|alias| UnionMember::Reference(alias.name.clone()))
            .collect(),
    };

    tracing::debug!(aliases = aliases.len(), "built declarations");

    Ok(Declarations {
        sections: aliases,
        aggregate,
    })
}

/// Normalize a code description and split it into comment lines.
fn comment_lines(description: &str) -> Vec<String> {
    normalize_description(description)
        .split(LINE_BREAK)
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CodeEntry;

    fn section(id: &str, description: &str, codes: &[(&str, Option<&str>)]) -> Section {
        Section {
            id: id.to_string(),
            description: description.to_string(),
            codes: codes
                .iter()
                .map(|(code, desc)| CodeEntry::new(*code, desc.map(str::to_string)))
                .collect(),
        }
    }

    #[test]
    fn test_build_example() {
        let sections = vec![section(
            "example",
            "Example Codes",
            &[("FooBar", Some("The foo key")), ("BazQux", None)],
        )];
        let decls = build_declarations(&sections).unwrap();

        assert_eq!(
            decls.sections,
            vec![TypeAlias {
                name: "ExampleKeyCode".to_string(),
                doc: Some("Example Codes".to_string()),
                members: vec![
                    UnionMember::Literal {
                        value: "FooBar".to_string(),
                        doc: vec!["The foo key".to_string()],
                    },
                    UnionMember::Literal {
                        value: "BazQux".to_string(),
                        doc: vec![],
                    },
                ],
            }]
        );
        assert_eq!(
            decls.aggregate.members,
            vec![UnionMember::Reference("ExampleKeyCode".to_string())]
        );
        assert_eq!(decls.aggregate.doc, None);
    }

    #[test]
    fn test_aggregate_references_every_section_in_order() {
        let sections = vec![
            section("writing-system", "W", &[("KeyA", None)]),
            section("arrow-pad", "A", &[("ArrowUp", None)]),
            section("numpad", "N", &[]),
        ];
        let decls = build_declarations(&sections).unwrap();

        let names: Vec<&str> = decls.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "WritingSystemKeyCode",
                "ArrowPadKeyCode",
                "NumpadKeyCode",
                "KeyCode"
            ]
        );
        assert_eq!(decls.aggregate.members.len(), 3);
        assert!(decls.get("NumpadKeyCode").unwrap().members.is_empty());
    }

    #[test]
    fn test_line_break_splits_comment() {
        let sections = vec![section(
            "a",
            "A",
            &[("IntlRo", Some("Japanese Ro <br/> <br/>Brazilian / ?"))],
        )];
        let decls = build_declarations(&sections).unwrap();
        assert_eq!(
            decls.sections[0].members[0].doc(),
            &["Japanese Ro", "", "Brazilian / ?"]
        );
    }

    #[test]
    fn test_line_break_keeps_leading_space() {
        let sections = vec![section("a", "A", &[("KeyA", Some("a <br/> b"))])];
        let decls = build_declarations(&sections).unwrap();
        assert_eq!(decls.sections[0].members[0].doc(), &["a", " b"]);
    }

    #[test]
    fn test_code_description_is_normalized() {
        let sections = vec![section(
            "a",
            "Section &amp; KEYCAP stays",
            &[("Quote", Some("KEYCAP&apos;&quot; on a US keyboard"))],
        )];
        let decls = build_declarations(&sections).unwrap();

        assert_eq!(decls.sections[0].members[0].doc(), &["'\" on a US keyboard"]);
        assert_eq!(
            decls.sections[0].doc.as_deref(),
            Some("Section &amp; KEYCAP stays")
        );
    }

    #[test]
    fn test_duplicate_type_name() {
        let sections = vec![
            section("arrow-pad", "A", &[]),
            section("arrow_pad", "B", &[]),
        ];
        let err = build_declarations(&sections).unwrap_err();
        match err {
            DeclarationError::DuplicateTypeName { section, name } => {
                assert_eq!(section, "arrow_pad");
                assert_eq!(name, "ArrowPadKeyCode");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_collision_with_aggregate() {
        let sections = vec![section("-", "A", &[])];
        assert!(matches!(
            build_declarations(&sections),
            Err(DeclarationError::DuplicateTypeName { .. })
        ));
    }

    #[test]
    fn test_invalid_type_name() {
        let sections = vec![section("1st-row", "A", &[])];
        assert!(matches!(
            build_declarations(&sections),
            Err(DeclarationError::InvalidTypeName { .. })
        ));
    }

    #[test]
    fn test_repeated_code_is_kept() {
        let sections = vec![
            section("a", "A", &[("Fn", None)]),
            section("b", "B", &[("Fn", None)]),
        ];
        let decls = build_declarations(&sections).unwrap();
        assert_eq!(decls.code_count(), 2);
    }
}
