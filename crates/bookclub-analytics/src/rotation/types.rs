//! Core types for rotation analysis.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use bookclub_core::{BookId, MemberId};

/// Picks inside one rotation. Rotations are capped at 10 except when a short
/// tail is merged into the last one.
pub type RotationPicks = SmallVec<[MemberId; 10]>;

/// Window sizes used when segmenting the pick sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationBounds {
    pub min_size: usize,
    pub max_size: usize,
}

impl RotationBounds {
    /// `min = max(3, min(n / 2, 4))`, `max = max(n + 2, min(n * 2, 10))`.
    pub fn for_member_count(member_count: usize) -> Self {
        Self {
            min_size: 3.max((member_count / 2).min(4)),
            max_size: (member_count + 2).max((member_count * 2).min(10)),
        }
    }
}

/// Ordered pairs and triplets that recur within a rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPatterns {
    pub pairs: Vec<(MemberId, MemberId)>,
    pub triplets: Vec<(MemberId, MemberId, MemberId)>,
}

impl SubPatterns {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.triplets.is_empty()
    }
}

/// One detected cycle through (most of) the membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub picks: RotationPicks,
    /// unique members / picks.
    pub balance: f64,
    /// unique members / roster size.
    pub coverage: f64,
    pub sub_patterns: SubPatterns,
    /// Almost no repeats: balance > 0.9.
    pub is_clean: bool,
}

impl Rotation {
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// A member's participation since they became eligible to pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationStat {
    pub member_id: MemberId,
    /// Index into the pick sequence where eligibility starts.
    pub eligible_since_index: usize,
    pub starting_book: Option<BookId>,
    pub books_since_eligible: u32,
    pub picks_since_eligible: u32,
    pub participation_rate: f64,
}

/// Qualitative verdict on the pick history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTier {
    NoBooks,
    InsufficientData,
    Regular,
    FairlyStructured,
    Loose,
    NoPattern,
}

impl PatternTier {
    /// Classify from the averaged balance. Thresholds are business rules.
    pub fn classify(has_pattern: bool, avg_balance: f64) -> Self {
        if has_pattern && avg_balance > 0.9 {
            Self::Regular
        } else if has_pattern && avg_balance > 0.7 {
            Self::FairlyStructured
        } else if has_pattern {
            Self::Loose
        } else {
            Self::NoPattern
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::NoBooks => "No books have been added yet.",
            Self::InsufficientData => {
                "Not enough individually attributed books to analyze rotation pattern."
            }
            Self::Regular => {
                "A regular rotation pattern was detected with members taking turns consistently."
            }
            Self::FairlyStructured => {
                "Book picks follow a fairly structured rotation pattern with occasional repeats."
            }
            Self::Loose => {
                "Book picks follow a loose rotation pattern, with some members picking more frequently than others."
            }
            Self::NoPattern => {
                "No clear rotation pattern was found. Book picks appear to be ad-hoc rather than following a set order."
            }
        }
    }
}

impl fmt::Display for PatternTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBooks => write!(f, "no_books"),
            Self::InsufficientData => write!(f, "insufficient_data"),
            Self::Regular => write!(f, "regular"),
            Self::FairlyStructured => write!(f, "fairly_structured"),
            Self::Loose => write!(f, "loose"),
            Self::NoPattern => write!(f, "no_pattern"),
        }
    }
}

/// Full output of the rotation detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationAnalysis {
    pub has_pattern: bool,
    pub tier: PatternTier,
    pub message: String,
    pub rotations: Vec<Rotation>,
    pub rotation_count: usize,
    pub avg_balance: f64,
    pub avg_coverage: f64,
    /// Roster order.
    pub participation_stats: Vec<ParticipationStat>,
    /// Roster members who appear in no rotation, in roster order.
    pub non_participating: Vec<MemberId>,
    pub bounds: RotationBounds,
}

impl RotationAnalysis {
    /// An analysis with no rotations, for empty or too-sparse histories.
    ///
    /// Nobody appears in a rotation here, so `non_participating` is the whole
    /// roster in roster order.
    pub fn without_rotations(
        tier: PatternTier,
        participation_stats: Vec<ParticipationStat>,
        non_participating: Vec<MemberId>,
        bounds: RotationBounds,
    ) -> Self {
        Self {
            has_pattern: false,
            tier,
            message: tier.message().to_string(),
            rotations: Vec::new(),
            rotation_count: 0,
            avg_balance: 0.0,
            avg_coverage: 0.0,
            participation_stats,
            non_participating,
            bounds,
        }
    }

    /// Participation stat for a member, if they are on the roster.
    pub fn participation_for(&self, id: MemberId) -> Option<&ParticipationStat> {
        self.participation_stats.iter().find(|p| p.member_id == id)
    }
}
