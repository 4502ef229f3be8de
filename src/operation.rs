//! Edit operations produced by the diff engine: a kind tag paired with the text it covers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side(s) of the diff a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Present only in the new text.
    Insert,
    /// Present only in the old text.
    Delete,
    /// Present in both.
    Equal,
}

impl EditKind {
    /// Prefix used by the `+`/`-` textual rendering; `Equal` has none.
    pub fn marker(self) -> &'static str {
        match self {
            EditKind::Insert => "+",
            EditKind::Delete => "-",
            EditKind::Equal => "",
        }
    }
}

/// A single edit: `kind` applied to `text`.
///
/// Equality is structural, so `Equal("ab")` and two consecutive `Equal("a")`, `Equal("b")`
/// are different sequences even though they render identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum EditOperation {
    Insert(String),
    Delete(String),
    Equal(String),
}

impl EditOperation {
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        let text = text.into();
        match kind {
            EditKind::Insert => EditOperation::Insert(text),
            EditKind::Delete => EditOperation::Delete(text),
            EditKind::Equal => EditOperation::Equal(text),
        }
    }

    pub fn kind(&self) -> EditKind {
        match self {
            EditOperation::Insert(_) => EditKind::Insert,
            EditOperation::Delete(_) => EditKind::Delete,
            EditOperation::Equal(_) => EditKind::Equal,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            EditOperation::Insert(text)
            | EditOperation::Delete(text)
            | EditOperation::Equal(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            EditOperation::Insert(text)
            | EditOperation::Delete(text)
            | EditOperation::Equal(text) => text,
        }
    }

    /// Mutable access used when merging adjacent spans of the same kind.
    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            EditOperation::Insert(text)
            | EditOperation::Delete(text)
            | EditOperation::Equal(text) => text,
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind().marker(), self.text())
    }
}
