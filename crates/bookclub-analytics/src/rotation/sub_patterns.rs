//! Recurring pairs and triplets within a rotation.

use bookclub_core::MemberId;

use super::types::SubPatterns;

/// Rotations shorter than this have no meaningful sub-patterns.
const MIN_LEN_FOR_PAIRS: usize = 4;
const MIN_LEN_FOR_TRIPLETS: usize = 6;

/// Find ordered pairs (and, for longer rotations, triplets) that recur later
/// in the same rotation without overlapping their first occurrence.
///
/// Each starting position whose window recurs contributes one entry, so a
/// pair seen three times is reported twice.
pub fn detect_sub_patterns(picks: &[MemberId]) -> SubPatterns {
    let n = picks.len();
    if n < MIN_LEN_FOR_PAIRS {
        return SubPatterns::default();
    }

    let pairs = recurring_windows(picks, 2)
        .map(|w| (w[0], w[1]))
        .collect();

    let triplets = if n >= MIN_LEN_FOR_TRIPLETS {
        recurring_windows(picks, 3)
            .map(|w| (w[0], w[1], w[2]))
            .collect()
    } else {
        Vec::new()
    };

    SubPatterns { pairs, triplets }
}

/// Windows of `size` starting at `i` that appear again at some `j >= i + size`.
fn recurring_windows(picks: &[MemberId], size: usize) -> impl Iterator<Item = &[MemberId]> {
    let windows: Vec<&[MemberId]> = picks.windows(size).collect();
    (0..windows.len())
        .filter(move |&i| windows.iter().skip(i + size).any(|w| *w == windows[i]))
        .map(move |i| &picks[i..i + size])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<MemberId> {
        raw.iter().copied().map(MemberId).collect()
    }

    #[test]
    fn short_rotations_have_no_patterns() {
        assert!(detect_sub_patterns(&ids(&[1, 2, 1])).is_empty());
    }

    #[test]
    fn repeated_pair_detected() {
        let found = detect_sub_patterns(&ids(&[1, 2, 3, 1, 2]));
        assert_eq!(found.pairs, vec![(MemberId(1), MemberId(2))]);
        assert!(found.triplets.is_empty(), "length 5 skips triplets");
    }

    #[test]
    fn overlapping_occurrence_does_not_count() {
        // (1,1) at 0 and 1 overlap; the next non-overlapping start is 2.
        let found = detect_sub_patterns(&ids(&[1, 1, 1, 2]));
        assert!(found.pairs.is_empty());
    }

    #[test]
    fn triplets_in_long_rotation() {
        let found = detect_sub_patterns(&ids(&[1, 2, 3, 1, 2, 3]));
        assert_eq!(found.triplets, vec![(MemberId(1), MemberId(2), MemberId(3))]);
        assert_eq!(
            found.pairs,
            vec![(MemberId(1), MemberId(2)), (MemberId(2), MemberId(3))]
        );
    }
}
