//! Character-level LCS diff: trim shared affixes, tabulate the middle, backtrack an edit script.
//!
//! - `graph`: the `(m+1) x (n+1)` score table.
//! - `affix`: common prefix/suffix trimming.
//! - `tabulate`: O(m·n) table fill.
//! - `backtrack`: table walk producing per-unit operations.

pub mod affix;
pub mod backtrack;
pub mod graph;
pub mod tabulate;

#[cfg(test)]
pub(crate) mod reference;

use std::{iter::FusedIterator, vec};

use crate::{
    config::DiffConfig,
    diff::{affix::AffixTrimmer, backtrack::DiffBacktracker, tabulate::LcsTabulator},
    errors::DiffError,
    operation::EditOperation,
};

/// Entry point for computing diffs; holds only immutable configuration, so one
/// calculator can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct DiffCalculator {
    config: DiffConfig,
}

impl DiffCalculator {
    pub fn new(config: DiffConfig) -> Self {
        DiffCalculator { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the edit script turning `old` into `new`.
    ///
    /// Keeping `Equal` and `Delete` text reconstructs `old`; keeping `Equal` and `Insert`
    /// text reconstructs `new`. Empty or identical inputs short-circuit to a single operation;
    /// the empty-old check comes first, so `("", "")` is a single empty `Insert`.
    pub fn compute(&self, old: &str, new: &str) -> Result<DiffResult, DiffError> {
        if old.is_empty() {
            tracing::trace!("old is empty, single insert");
            return Ok(DiffResult::single(EditOperation::Insert(new.to_owned())));
        }
        if new.is_empty() {
            tracing::trace!("new is empty, single delete");
            return Ok(DiffResult::single(EditOperation::Delete(old.to_owned())));
        }
        if old == new {
            tracing::trace!("inputs identical, single equal");
            return Ok(DiffResult::single(EditOperation::Equal(old.to_owned())));
        }

        let old_units: Vec<char> = old.chars().collect();
        let new_units: Vec<char> = new.chars().collect();

        let affixes = if self.config.trim_affixes {
            AffixTrimmer::trim(&old_units, &new_units)
        } else {
            AffixTrimmer::untrimmed(&old_units, &new_units)
        };

        let (m, n) = (affixes.old_middle.len(), affixes.new_middle.len());
        tracing::debug!(
            "diff old={} new={} units, prefix={}, suffix={}, table {}x{}",
            old_units.len(),
            new_units.len(),
            affixes.prefix.as_ref().map_or(0, |op| op.text().chars().count()),
            affixes.suffix.as_ref().map_or(0, |op| op.text().chars().count()),
            m + 1,
            n + 1
        );

        if let Some(limit) = self.config.max_table_cells {
            let cells = (m + 1).saturating_mul(n + 1);
            if cells > limit {
                tracing::warn!("edit graph of {} cells exceeds limit {}", cells, limit);
                return Err(DiffError::TableTooLarge { cells, limit });
            }
        }

        let graph = LcsTabulator::tabulate(affixes.old_middle, affixes.new_middle)?;
        let middle =
            DiffBacktracker::new(&graph, affixes.old_middle, affixes.new_middle)?.backtrack()?;

        let mut ops = Vec::with_capacity(middle.len() + 2);
        ops.extend(affixes.prefix);
        ops.extend(middle);
        ops.extend(affixes.suffix);
        Ok(DiffResult::from_ops(ops))
    }
}

/// Compute a diff with the default configuration.
pub fn compute_diff(old: &str, new: &str) -> Result<DiffResult, DiffError> {
    DiffCalculator::default().compute(old, new)
}

/// One-shot, in-order sequence of edit operations returned by [`DiffCalculator::compute`].
///
/// Not `Clone`: once drained, recompute to get the operations again.
#[derive(Debug)]
pub struct DiffResult {
    ops: vec::IntoIter<EditOperation>,
}

impl DiffResult {
    fn from_ops(ops: Vec<EditOperation>) -> Self {
        DiffResult {
            ops: ops.into_iter(),
        }
    }

    fn single(op: EditOperation) -> Self {
        Self::from_ops(vec![op])
    }

    /// Operations not yet yielded, without consuming them.
    pub fn as_slice(&self) -> &[EditOperation] {
        self.ops.as_slice()
    }
}

impl Iterator for DiffResult {
    type Item = EditOperation;

    fn next(&mut self) -> Option<Self::Item> {
        self.ops.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ops.size_hint()
    }
}

impl ExactSizeIterator for DiffResult {}

impl FusedIterator for DiffResult {}
