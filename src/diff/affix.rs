//! Common prefix/suffix stripping so that only the differing middle is tabulated.

use crate::operation::EditOperation;

/// Result of trimming: the shared affixes and the two middles left to diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affixes<'a> {
    /// Leading run shared by both sequences, as an `Equal` fragment if non-empty.
    pub prefix: Option<EditOperation>,
    /// Trailing run shared by both sequences, as an `Equal` fragment if non-empty.
    pub suffix: Option<EditOperation>,
    pub old_middle: &'a [char],
    pub new_middle: &'a [char],
}

/// Computes common prefix and suffix lengths for a pair of sequences.
pub struct AffixTrimmer;

impl AffixTrimmer {
    /// Length of the longest run with `old[i] == new[i]` from the start.
    pub fn common_prefix_len(old: &[char], new: &[char]) -> usize {
        old.iter().zip(new).take_while(|(a, b)| a == b).count()
    }

    /// Length of the longest run matching backward from both ends, bounded by the shorter input.
    pub fn common_suffix_len(old: &[char], new: &[char]) -> usize {
        old.iter()
            .rev()
            .zip(new.iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Prefix and suffix lengths to strip, in that order.
    ///
    /// When the prefix content ends with the candidate suffix content the suffix is dropped
    /// for this pass; an empty candidate suffix is unaffected. The suffix is then clamped so
    /// the two never overlap in the shorter sequence.
    pub fn affix_lens(old: &[char], new: &[char]) -> (usize, usize) {
        let prefix = Self::common_prefix_len(old, new);
        let mut suffix = Self::common_suffix_len(old, new);

        if old[..prefix].ends_with(&old[old.len() - suffix..]) {
            suffix = 0;
        }

        let room = old.len().min(new.len()) - prefix;
        (prefix, suffix.min(room))
    }

    /// Split both sequences into shared prefix, differing middles and shared suffix.
    pub fn trim<'a>(old: &'a [char], new: &'a [char]) -> Affixes<'a> {
        let (prefix, suffix) = Self::affix_lens(old, new);

        let fragment = |units: &[char]| {
            (!units.is_empty()).then(|| EditOperation::Equal(units.iter().collect()))
        };

        Affixes {
            prefix: fragment(&old[..prefix]),
            suffix: fragment(&old[old.len() - suffix..]),
            old_middle: &old[prefix..old.len() - suffix],
            new_middle: &new[prefix..new.len() - suffix],
        }
    }

    /// The identity trim: no affixes, the full sequences as middles.
    pub fn untrimmed<'a>(old: &'a [char], new: &'a [char]) -> Affixes<'a> {
        Affixes {
            prefix: None,
            suffix: None,
            old_middle: old,
            new_middle: new,
        }
    }
}
