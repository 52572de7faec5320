//! Pick-sequence builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use bookclub_core::types::group::BookRecord;
use bookclub_core::{BookId, MemberId};

/// Who selected a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribution {
    Member(MemberId),
    /// The whole group chose together.
    Collective,
    /// Nobody was recorded.
    Unattributed,
}

impl Attribution {
    /// Attribution of a book record. The collective flag wins over a picker.
    pub fn of(book: &BookRecord) -> Self {
        if book.is_collective_pick {
            Self::Collective
        } else if let Some(id) = book.picked_by {
            Self::Member(id)
        } else {
            Self::Unattributed
        }
    }

    pub fn member_id(self) -> Option<MemberId> {
        match self {
            Self::Member(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_individual(self) -> bool {
        matches!(self, Self::Member(_))
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(id) => write!(f, "member:{id}"),
            Self::Collective => write!(f, "collective"),
            Self::Unattributed => write!(f, "unattributed"),
        }
    }
}

/// One book in the group's history, annotated with its pick streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickEvent {
    pub book_id: BookId,
    pub display_order: i64,
    pub attribution: Attribution,
    /// Length of the run of identical attributions ending here.
    pub streak_count: u32,
}

/// Build the ordered pick sequence from books already in display order.
pub fn build_pick_sequence(books: &[BookRecord]) -> Vec<PickEvent> {
    let mut sequence = Vec::with_capacity(books.len());
    let mut previous: Option<Attribution> = None;
    let mut streak_count = 0u32;

    for book in books {
        let attribution = Attribution::of(book);
        if previous == Some(attribution) {
            streak_count += 1;
        } else {
            streak_count = 1;
            previous = Some(attribution);
        }
        sequence.push(PickEvent {
            book_id: book.id,
            display_order: book.display_order,
            attribution,
            streak_count,
        });
    }

    sequence
}

/// Member IDs of individually attributed picks, in order.
pub fn individual_pickers(sequence: &[PickEvent]) -> Vec<MemberId> {
    sequence
        .iter()
        .filter_map(|e| e.attribution.member_id())
        .collect()
}

/// The member behind the latest individually attributed pick.
pub fn most_recent_picker(sequence: &[PickEvent]) -> Option<MemberId> {
    sequence
        .iter()
        .rev()
        .find_map(|e| e.attribution.member_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u64, picked_by: Option<u64>, collective: bool) -> BookRecord {
        BookRecord {
            id: BookId(id),
            display_order: id as i64,
            picked_by: picked_by.map(MemberId),
            is_collective_pick: collective,
        }
    }

    #[test]
    fn collective_flag_overrides_picker() {
        let b = book(1, Some(5), true);
        assert_eq!(Attribution::of(&b), Attribution::Collective);
    }

    #[test]
    fn streaks_reset_on_change() {
        let books = vec![
            book(1, Some(1), false),
            book(2, Some(1), false),
            book(3, None, false),
            book(4, None, false),
            book(5, None, true),
            book(6, Some(1), false),
        ];
        let streaks: Vec<u32> = build_pick_sequence(&books)
            .iter()
            .map(|e| e.streak_count)
            .collect();
        assert_eq!(streaks, vec![1, 2, 1, 2, 1, 1]);
    }

    #[test]
    fn empty_input_empty_sequence() {
        assert!(build_pick_sequence(&[]).is_empty());
        assert_eq!(most_recent_picker(&[]), None);
    }

    #[test]
    fn most_recent_skips_group_picks() {
        let books = vec![
            book(1, Some(2), false),
            book(2, Some(3), false),
            book(3, None, true),
            book(4, None, false),
        ];
        let seq = build_pick_sequence(&books);
        assert_eq!(most_recent_picker(&seq), Some(MemberId(3)));
        assert_eq!(individual_pickers(&seq), vec![MemberId(2), MemberId(3)]);
    }
}
