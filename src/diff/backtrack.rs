//! Walks a filled [`EditGraph`] from `(m, n)` back to the origin and emits one operation per unit.

use crate::{diff::graph::EditGraph, errors::DiffError, operation::EditOperation};

/// Turns a tabulated graph into an ordered edit script.
pub struct DiffBacktracker<'a> {
    graph: &'a EditGraph,
    old: &'a [char],
    new: &'a [char],
}

impl<'a> DiffBacktracker<'a> {
    /// The graph must have been tabulated for exactly `old` and `new`.
    pub fn new(graph: &'a EditGraph, old: &'a [char], new: &'a [char]) -> Result<Self, DiffError> {
        if graph.rows() != old.len() + 1 || graph.cols() != new.len() + 1 {
            return Err(DiffError::InvariantViolation(format!(
                "graph is {}x{} but sequences need {}x{}",
                graph.rows(),
                graph.cols(),
                old.len() + 1,
                new.len() + 1
            )));
        }
        Ok(DiffBacktracker { graph, old, new })
    }

    /// Produce the edit script in forward (old-to-new, left-to-right) order.
    ///
    /// At each `(i, j)`, in priority order: a matching unit is `Equal`; otherwise `Delete`
    /// when `score(i-1, j) > score(i, j-1)` or `j == 0`; otherwise `Insert`. Because the
    /// walk runs backwards, preferring `Insert` on a score tie places deletions before
    /// insertions in the forward result.
    pub fn backtrack(&self) -> Result<Vec<EditOperation>, DiffError> {
        let (mut i, mut j) = (self.old.len(), self.new.len());
        let mut ops = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.old[i - 1] == self.new[j - 1] {
                ops.push(EditOperation::Equal(self.old[i - 1].to_string()));
                i -= 1;
                j -= 1;
            } else if i > 0 && (j == 0 || self.graph.get(i - 1, j)? > self.graph.get(i, j - 1)?)
            {
                ops.push(EditOperation::Delete(self.old[i - 1].to_string()));
                i -= 1;
            } else if j > 0 && (i == 0 || self.graph.get(i - 1, j)? <= self.graph.get(i, j - 1)?)
            {
                ops.push(EditOperation::Insert(self.new[j - 1].to_string()));
                j -= 1;
            } else {
                return Err(DiffError::InvariantViolation(format!(
                    "no move available from ({i}, {j})"
                )));
            }
        }

        ops.reverse();
        Ok(ops)
    }
}
