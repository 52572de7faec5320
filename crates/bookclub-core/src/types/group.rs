//! Input model supplied by the persistence layer for one group.
//!
//! These records are read-only for the analytics engine. Books must already be
//! ordered by display order, then creation time.

use serde::{Deserialize, Serialize};

use crate::errors::{InputError, InputResult};

use super::identifiers::{BookId, EditionId, MemberId, WagerId};

/// A book added to the group, with its pick attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub display_order: i64,
    #[serde(default)]
    pub picked_by: Option<MemberId>,
    #[serde(default)]
    pub is_collective_pick: bool,
}

/// A group member as shown to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
}

/// Group membership in roster order, plus the admin subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRoster {
    pub members: Vec<Member>,
    pub admins: Vec<MemberId>,
}

impl GroupRoster {
    pub fn new(members: Vec<Member>, admins: Vec<MemberId>) -> Self {
        Self { members, admins }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn is_admin(&self, id: MemberId) -> bool {
        self.admins.contains(&id)
    }

    /// Username for a member, if they are on the roster.
    pub fn username(&self, id: MemberId) -> Option<&str> {
        self.member(id).map(|m| m.username.as_str())
    }
}

/// The first book a member became eligible to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEligibility {
    pub member_id: MemberId,
    pub starting_book_id: BookId,
}

/// A member's rating of a book, 1-5 in half steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub rating: f64,
}

/// Lifecycle of a dollar bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WagerStatus {
    Open,
    Accepted,
    Resolved,
    Cancelled,
}

/// A dollar bet between two members on a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    pub id: WagerId,
    pub book_id: BookId,
    pub proposer: MemberId,
    #[serde(default)]
    pub accepter: Option<MemberId>,
    pub amount: f64,
    pub status: WagerStatus,
    #[serde(default)]
    pub winner: Option<MemberId>,
}

impl Wager {
    /// The (winner, loser) pair for a settled bet. `None` for anything that
    /// is unresolved, unaccepted, or names a winner outside the bet.
    pub fn outcome(&self) -> Option<(MemberId, MemberId)> {
        if self.status != WagerStatus::Resolved {
            return None;
        }
        let accepter = self.accepter?;
        let winner = self.winner?;
        if winner == self.proposer {
            Some((self.proposer, accepter))
        } else if winner == accepter {
            Some((accepter, self.proposer))
        } else {
            None
        }
    }
}

/// Page and audio metadata for one edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionMedia {
    pub edition_id: EditionId,
    pub book_id: BookId,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub audio_seconds: Option<u64>,
}

/// Everything the engine needs to analyze one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSnapshot {
    pub books: Vec<BookRecord>,
    pub roster: GroupRoster,
    pub eligibility: Vec<MemberEligibility>,
    pub ratings: Vec<RatingRecord>,
    pub wagers: Vec<Wager>,
    pub editions: Vec<EditionMedia>,
}

impl GroupSnapshot {
    /// Decode a snapshot from its JSON form.
    pub fn from_json(json: &str) -> InputResult<Self> {
        serde_json::from_str(json).map_err(InputError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wager(status: WagerStatus, accepter: Option<u64>, winner: Option<u64>) -> Wager {
        Wager {
            id: WagerId(1),
            book_id: BookId(1),
            proposer: MemberId(1),
            accepter: accepter.map(MemberId),
            amount: 1.0,
            status,
            winner: winner.map(MemberId),
        }
    }

    #[test]
    fn resolved_wager_reports_winner_and_loser() {
        let w = wager(WagerStatus::Resolved, Some(2), Some(2));
        assert_eq!(w.outcome(), Some((MemberId(2), MemberId(1))));
        let w = wager(WagerStatus::Resolved, Some(2), Some(1));
        assert_eq!(w.outcome(), Some((MemberId(1), MemberId(2))));
    }

    #[test]
    fn malformed_wagers_have_no_outcome() {
        assert!(wager(WagerStatus::Accepted, Some(2), Some(2)).outcome().is_none());
        assert!(wager(WagerStatus::Resolved, None, Some(1)).outcome().is_none());
        assert!(wager(WagerStatus::Resolved, Some(2), None).outcome().is_none());
        assert!(wager(WagerStatus::Resolved, Some(2), Some(9)).outcome().is_none());
    }

    #[test]
    fn roster_lookups() {
        let roster = GroupRoster::new(
            vec![
                Member { id: MemberId(1), username: "ana".into() },
                Member { id: MemberId(2), username: "ben".into() },
            ],
            vec![MemberId(2)],
        );
        assert!(roster.contains(MemberId(1)));
        assert!(!roster.contains(MemberId(3)));
        assert!(roster.is_admin(MemberId(2)));
        assert_eq!(roster.username(MemberId(1)), Some("ana"));
    }
}
