//! Participation since eligibility.

use bookclub_core::types::group::{GroupRoster, MemberEligibility};
use bookclub_core::{BookId, FxHashMap, MemberId};

use crate::attribution::PickEvent;

use super::types::ParticipationStat;

/// Resolve each member's eligibility start to an index in the sequence.
///
/// Members without a record, or whose starting book is not in the sequence,
/// are eligible from index 0. Only the first record per member is used.
pub fn eligibility_indexes(
    sequence: &[PickEvent],
    eligibility: &[MemberEligibility],
) -> FxHashMap<MemberId, usize> {
    let book_index: FxHashMap<BookId, usize> = sequence
        .iter()
        .enumerate()
        .map(|(idx, e)| (e.book_id, idx))
        .collect();

    let mut indexes = FxHashMap::default();
    for record in eligibility {
        if indexes.contains_key(&record.member_id) {
            tracing::warn!(
                member_id = %record.member_id,
                starting_book_id = %record.starting_book_id,
                "duplicate eligibility record ignored"
            );
            continue;
        }
        match book_index.get(&record.starting_book_id) {
            Some(&idx) => {
                indexes.insert(record.member_id, idx);
            }
            None => {
                tracing::debug!(
                    member_id = %record.member_id,
                    starting_book_id = %record.starting_book_id,
                    "starting book not in sequence, eligible from start"
                );
                indexes.insert(record.member_id, 0);
            }
        }
    }
    indexes
}

/// Participation stats for every roster member, in roster order.
pub fn compute_participation(
    sequence: &[PickEvent],
    roster: &GroupRoster,
    eligibility: &[MemberEligibility],
) -> Vec<ParticipationStat> {
    let starts = eligibility_indexes(sequence, eligibility);
    let total = sequence.len();

    roster
        .members
        .iter()
        .map(|member| {
            let start = starts.get(&member.id).copied().unwrap_or(0);
            let books_since_eligible = total.saturating_sub(start) as u32;
            let picks_since_eligible = sequence
                .iter()
                .skip(start)
                .filter(|e| e.attribution.member_id() == Some(member.id))
                .count() as u32;
            let participation_rate = if books_since_eligible > 0 {
                picks_since_eligible as f64 / books_since_eligible as f64
            } else {
                0.0
            };

            ParticipationStat {
                member_id: member.id,
                eligible_since_index: start,
                starting_book: sequence.get(start).map(|e| e.book_id),
                books_since_eligible,
                picks_since_eligible,
                participation_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::build_pick_sequence;
    use bookclub_core::types::group::{BookRecord, Member};

    fn setup() -> (Vec<PickEvent>, GroupRoster) {
        let pickers = [1, 2, 1, 2, 3, 1];
        let books: Vec<BookRecord> = pickers
            .iter()
            .enumerate()
            .map(|(i, &p)| BookRecord {
                id: BookId(100 + i as u64),
                display_order: i as i64,
                picked_by: Some(MemberId(p)),
                is_collective_pick: false,
            })
            .collect();
        let roster = GroupRoster::new(
            (1..=3)
                .map(|i| Member { id: MemberId(i), username: format!("m{i}") })
                .collect(),
            vec![],
        );
        (build_pick_sequence(&books), roster)
    }

    #[test]
    fn default_eligibility_is_whole_history() {
        let (seq, roster) = setup();
        let stats = compute_participation(&seq, &roster, &[]);
        assert_eq!(stats[0].eligible_since_index, 0);
        assert_eq!(stats[0].books_since_eligible, 6);
        assert_eq!(stats[0].picks_since_eligible, 3);
        assert!((stats[0].participation_rate - 0.5).abs() < 1e-12);
        assert_eq!(stats[0].starting_book, Some(BookId(100)));
    }

    #[test]
    fn late_joiner_window_starts_at_their_book() {
        let (seq, roster) = setup();
        let elig = [MemberEligibility { member_id: MemberId(3), starting_book_id: BookId(104) }];
        let stats = compute_participation(&seq, &roster, &elig);
        let m3 = &stats[2];
        assert_eq!(m3.eligible_since_index, 4);
        assert_eq!(m3.books_since_eligible, 2);
        assert_eq!(m3.picks_since_eligible, 1);
    }

    #[test]
    fn unknown_starting_book_falls_back_to_zero() {
        let (seq, roster) = setup();
        let elig = [MemberEligibility { member_id: MemberId(2), starting_book_id: BookId(999) }];
        let stats = compute_participation(&seq, &roster, &elig);
        assert_eq!(stats[1].eligible_since_index, 0);
        assert_eq!(stats[1].books_since_eligible, 6);
    }

    #[test]
    fn first_duplicate_record_wins() {
        let (seq, roster) = setup();
        let elig = [
            MemberEligibility { member_id: MemberId(1), starting_book_id: BookId(103) },
            MemberEligibility { member_id: MemberId(1), starting_book_id: BookId(101) },
        ];
        let stats = compute_participation(&seq, &roster, &elig);
        assert_eq!(stats[0].eligible_since_index, 3);
    }

    #[test]
    fn empty_sequence_has_zero_rates() {
        let (_, roster) = setup();
        let stats = compute_participation(&[], &roster, &[]);
        assert!(stats.iter().all(|s| s.books_since_eligible == 0 && s.participation_rate == 0.0));
        assert!(stats.iter().all(|s| s.starting_book.is_none()));
    }
}
