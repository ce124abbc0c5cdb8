//! The per-property statement table.
//!
//! Each recognized key maps to one Java statement template. Keys outside
//! the table — including the synthetic own-kind name entry the parser
//! records on every node — are ignored without diagnostic.

use std::fmt::Write;

use crate::layout::layout_expr;

/// Property keys with an emission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropKey {
    Title,
    Text,
    Bounds,
    Layout,
    Background,
    Action,
    Columns,
    Comment,
    Pack,
}

impl PropKey {
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        match key {
            "TITLE" => Some(Self::Title),
            "TEXT" => Some(Self::Text),
            "BOUNDS" => Some(Self::Bounds),
            "LAYOUT" => Some(Self::Layout),
            "BACKGROUND" => Some(Self::Background),
            "ACTION" => Some(Self::Action),
            "COLUMNS" => Some(Self::Columns),
            "COMMENT" => Some(Self::Comment),
            "PACK" => Some(Self::Pack),
            _ => None,
        }
    }
}

/// Append the statement for one `key [value]` pair on variable `var`.
///
/// Values are opaque strings pasted into the template; an absent value is
/// rendered as the Java literal `null`, matching what the templates produce
/// for an empty declaration.
pub(crate) fn emit_property(
    out: &mut String,
    indent: &str,
    var: &str,
    key: PropKey,
    value: Option<&str>,
) {
    let value = value.unwrap_or("null");
    // Infallible for String targets.
    let _ = match key {
        PropKey::Title => writeln!(out, "{indent}{var}.setTitle({value});"),
        PropKey::Text => writeln!(out, "{indent}{var}.setText({value});"),
        PropKey::Bounds => writeln!(out, "{indent}{var}.setBounds({value});"),
        PropKey::Layout => writeln!(out, "{indent}{var}.setLayout(new {});", layout_expr(value)),
        PropKey::Background => writeln!(out, "{indent}{var}.setBackground({value});"),
        PropKey::Action => writeln!(
            out,
            "{indent}{var}.addActionListener(e -> CommandBus.execute({value}));"
        ),
        PropKey::Columns => writeln!(out, "{indent}{var}.setColumns({value});"),
        PropKey::Comment => writeln!(out, "{indent}{value}"),
        PropKey::Pack => writeln!(out, "{indent}{var}.pack();"),
    };
}
