//! Presentation helpers over a computed edit script: `+`/`-` rendering, merging runs of the
//! same kind, and rebuilding either side of the diff.

use std::fmt::Write;

use crate::operation::{EditKind, EditOperation};

/// Concatenate operations as `+inserted`, `-deleted`, `equal` with no separators.
pub fn render<'a>(ops: impl IntoIterator<Item = &'a EditOperation>) -> String {
    let mut out = String::new();
    for op in ops {
        // writing into a String cannot fail
        let _ = write!(out, "{op}");
    }
    out
}

/// Merge adjacent operations of the same kind into one span.
pub fn coalesce(ops: impl IntoIterator<Item = EditOperation>) -> Vec<EditOperation> {
    let mut merged: Vec<EditOperation> = Vec::new();
    for op in ops {
        match merged.last_mut() {
            Some(tail) if tail.kind() == op.kind() => tail.text_mut().push_str(op.text()),
            _ => merged.push(op),
        }
    }
    merged
}

/// Text of every `Equal` and `Delete` operation, in order: the old input.
pub fn reconstruct_old<'a>(ops: impl IntoIterator<Item = &'a EditOperation>) -> String {
    collect_text(ops, EditKind::Insert)
}

/// Text of every `Equal` and `Insert` operation, in order: the new input.
pub fn reconstruct_new<'a>(ops: impl IntoIterator<Item = &'a EditOperation>) -> String {
    collect_text(ops, EditKind::Delete)
}

fn collect_text<'a>(ops: impl IntoIterator<Item = &'a EditOperation>, skip: EditKind) -> String {
    ops.into_iter()
        .filter(|op| op.kind() != skip)
        .map(EditOperation::text)
        .collect()
}
