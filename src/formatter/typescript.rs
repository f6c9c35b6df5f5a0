//! Render the declaration tree as TypeScript source text.
//!
//! Layout follows what prettier produces for a list of union type aliases:
//!
//! ```text
//! /** Arrow pad section */
//! export type ArrowPadKeyCode = "ArrowDown" | "ArrowUp";
//! /** Writing system keys */
//! export type WritingSystemKeyCode =
//!   // `~ on a US keyboard.
//!   | "Backquote"
//!   | "IntlRo";
//! export type KeyCode = ArrowPadKeyCode | WritingSystemKeyCode;
//! ```
//!
//! gotchas:
//!     - A union is broken over several lines when any member has comments or
//!       when the single-line form exceeds `printWidth`
//!     - An empty union renders as `never`

use super::style::StyleConfig;
use crate::declaration::{Declarations, TypeAlias, UnionMember};

/// Render every alias, in output order, as one source file.
pub fn render_declarations(decls: &Declarations, style: &StyleConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    for alias in decls.iter() {
        render_alias(&mut lines, alias, style);
    }

    let newline = style.newline();
    lines.join(newline) + newline
}

fn render_alias(lines: &mut Vec<String>, alias: &TypeAlias, style: &StyleConfig) {
    if let Some(ref doc) = alias.doc {
        lines.push(format!("/** {} */", doc.replace("*/", "*\\/")));
    }

    let head = format!("export type {} =", alias.name);
    let terminator = style.terminator();

    if alias.members.is_empty() {
        lines.push(format!("{} never{}", head, terminator));
        return;
    }

    let members: Vec<String> = alias
        .members
        .iter()
        .map(|m| member_text(m, style))
        .collect();

    let single = format!("{} {}{}", head, members.join(" | "), terminator);
    if !alias.has_member_docs() && single.chars().count() <= style.print_width {
        lines.push(single);
        return;
    }

    lines.push(head);

    let indent = style.indent();
    let prefix = if members.len() > 1 { "| " } else { "" };
    let last = members.len() - 1;

    for (i, (member, text)) in alias.members.iter().zip(&members).enumerate() {
        for comment in member.doc() {
            lines.push(comment_line(&indent, comment));
        }
        let end = if i == last { terminator } else { "" };
        lines.push(format!("{}{}{}{}", indent, prefix, text, end));
    }
}

fn member_text(member: &UnionMember, style: &StyleConfig) -> String {
    match member {
        UnionMember::Literal { value, .. } => quote_literal(value, style.quote()),
        UnionMember::Reference(name) => name.clone(),
    }
}

fn comment_line(indent: &str, text: &str) -> String {
    if text.is_empty() {
        format!("{}//", indent)
    } else {
        format!("{}// {}", indent, text)
    }
}

/// Quote a string literal, escaping backslashes and the chosen quote character.
fn quote_literal(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
