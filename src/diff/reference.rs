//! Naive exponential LCS algorithms, kept only to cross-check the tabulated engine on tiny inputs.

/// LCS length by plain recursion without memoization.
pub(crate) fn naive_lcs_len(old: &[char], new: &[char]) -> usize {
    match (old.split_last(), new.split_last()) {
        (Some((a, old_rest)), Some((b, new_rest))) => {
            if a == b {
                naive_lcs_len(old_rest, new_rest) + 1
            } else {
                naive_lcs_len(old_rest, new).max(naive_lcs_len(old, new_rest))
            }
        }
        _ => 0,
    }
}

/// One longest common subsequence, rebuilt by the same unmemoized recursion.
pub(crate) fn naive_lcs(old: &[char], new: &[char]) -> String {
    match (old.split_last(), new.split_last()) {
        (Some((a, old_rest)), Some((b, new_rest))) => {
            if a == b {
                let mut lcs = naive_lcs(old_rest, new_rest);
                lcs.push(*a);
                lcs
            } else {
                let drop_old = naive_lcs(old_rest, new);
                let drop_new = naive_lcs(old, new_rest);
                if drop_old.chars().count() >= drop_new.chars().count() {
                    drop_old
                } else {
                    drop_new
                }
            }
        }
        _ => String::new(),
    }
}

/// True if `sub` can be obtained from `seq` by deleting units.
pub(crate) fn is_subsequence(sub: &str, seq: &str) -> bool {
    let mut seq = seq.chars();
    sub.chars().all(|c| seq.any(|s| s == c))
}

#[cfg(test)]
mod tests {
    use super::{is_subsequence, naive_lcs, naive_lcs_len};
    use crate::diff::compute_diff;
    use crate::operation::EditOperation;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Naive recursion gives the textbook LCS lengths.
    #[test]
    fn naive_lengths() {
        assert_eq!(naive_lcs_len(&chars("ABCBDAB"), &chars("BDCABA")), 4);
        assert_eq!(naive_lcs_len(&chars(""), &chars("abc")), 0);
        assert_eq!(naive_lcs_len(&chars("abc"), &chars("abc")), 3);
    }

    /// The reconstructed string is a common subsequence of the reported length.
    #[test]
    fn naive_string_is_common_subsequence() {
        for (old, new) in [("ABCBDAB", "BDCABA"), ("kitten", "sitting"), ("AGGTAB", "GXTXAYB")] {
            let lcs = naive_lcs(&chars(old), &chars(new));
            assert!(is_subsequence(&lcs, old));
            assert!(is_subsequence(&lcs, new));
            assert_eq!(lcs.chars().count(), naive_lcs_len(&chars(old), &chars(new)));
        }
        assert_eq!(naive_lcs(&chars("AGGTAB"), &chars("GXTXAYB")), "GTAB");
    }

    /// The production diff keeps exactly an LCS worth of units as `Equal`.
    #[test]
    fn production_diff_equal_units_form_an_lcs() {
        let cases = [
            ("ABCABBA", "CBABAC"),
            ("AABB", "AABBCDEFBB"),
            ("ABA", "ABXBA"),
            ("kitten", "sitting"),
            ("Hello World", "Hallo Welt"),
            ("ABxB", "AByB"),
        ];
        for (old, new) in cases {
            let kept: String = compute_diff(old, new)
                .unwrap()
                .filter(|op| matches!(op, EditOperation::Equal(_)))
                .map(EditOperation::into_text)
                .collect();
            assert!(is_subsequence(&kept, old), "{old} -> {new}");
            assert!(is_subsequence(&kept, new), "{old} -> {new}");
            assert_eq!(
                kept.chars().count(),
                naive_lcs_len(&chars(old), &chars(new)),
                "{old} -> {new}"
            );
        }
    }
}
