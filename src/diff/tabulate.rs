//! O(m·n) fill of the LCS score table.

use crate::{diff::graph::EditGraph, errors::DiffError};

/// Fills an [`EditGraph`] for a pair of sequences.
pub struct LcsTabulator;

impl LcsTabulator {
    /// Tabulate LCS lengths for every prefix pair of `old` and `new`.
    ///
    /// Row-major order guarantees `(i-1, j)`, `(i, j-1)` and `(i-1, j-1)` are filled
    /// before `(i, j)`.
    pub fn tabulate(old: &[char], new: &[char]) -> Result<EditGraph, DiffError> {
        let mut graph = EditGraph::new(old.len(), new.len());

        for (i, old_unit) in old.iter().enumerate().map(|(idx, c)| (idx + 1, c)) {
            for (j, new_unit) in new.iter().enumerate().map(|(idx, c)| (idx + 1, c)) {
                let score = if old_unit == new_unit {
                    graph.get(i - 1, j - 1)? + 1
                } else {
                    graph.get(i - 1, j)?.max(graph.get(i, j - 1)?)
                };
                graph.set(i, j, score)?;
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::LcsTabulator;
    use crate::diff::reference;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Bottom-right cell holds the LCS length.
    #[test]
    fn final_cell_is_lcs_length() {
        let cases = [
            ("ABCABBA", "CBABAC", 4),
            ("ABCBDAB", "BDCABA", 4),
            ("kitten", "sitting", 4),
            ("abc", "xyz", 0),
            ("", "abc", 0),
            ("same", "same", 4),
        ];
        for (old, new, expected) in cases {
            let (old, new) = (chars(old), chars(new));
            let graph = LcsTabulator::tabulate(&old, &new).unwrap();
            assert_eq!(graph.get(old.len(), new.len()), Ok(expected));
        }
    }

    /// Row 0 and column 0 stay zero; scores never decrease along a row or column
    /// and never exceed the shorter prefix length.
    #[test]
    fn table_invariants_hold() {
        let old = chars("XMJYAUZ");
        let new = chars("MZJAWXU");
        let graph = LcsTabulator::tabulate(&old, &new).unwrap();

        for i in 0..=old.len() {
            for j in 0..=new.len() {
                let score = graph.get(i, j).unwrap();
                if i == 0 || j == 0 {
                    assert_eq!(score, 0);
                    continue;
                }
                assert!(score <= i.min(j));
                assert!(score >= graph.get(i - 1, j).unwrap());
                assert!(score >= graph.get(i, j - 1).unwrap());
            }
        }
        assert_eq!(graph.get(old.len(), new.len()), Ok(4));
    }

    /// Every cell agrees with the naive recursion on its prefix pair.
    #[test]
    fn cells_match_naive_recursion() {
        let old = chars("GAC");
        let new = chars("AGCAT");
        let graph = LcsTabulator::tabulate(&old, &new).unwrap();
        for i in 0..=old.len() {
            for j in 0..=new.len() {
                assert_eq!(
                    graph.get(i, j).unwrap(),
                    reference::naive_lcs_len(&old[..i], &new[..j])
                );
            }
        }
    }
}
