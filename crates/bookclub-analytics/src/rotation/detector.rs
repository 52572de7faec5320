//! Rotation segmentation and scoring.
//!
//! Splits the individually attributed picks into rotations using three
//! closing rules, then scores each rotation for balance and coverage.

use bookclub_core::types::group::{GroupRoster, MemberEligibility};
use bookclub_core::{FxHashSet, MemberId};

use crate::attribution::{individual_pickers, PickEvent};

use super::participation::compute_participation;
use super::sub_patterns::detect_sub_patterns;
use super::types::{PatternTier, Rotation, RotationAnalysis, RotationBounds, RotationPicks};

/// Fewer individual picks than this cannot form a pattern.
pub const MIN_INDIVIDUAL_PICKS: usize = 3;

/// Share of all distinct pickers that closes a rotation once it reaches min size.
const ACTIVE_MEMBER_RATIO: f64 = 0.7;

/// A rotation with balance above this has almost no repeats.
const CLEAN_BALANCE: f64 = 0.9;

/// Average balance a multi-rotation history needs to count as a pattern.
const PATTERN_BALANCE: f64 = 0.6;

/// Analyze the pick sequence for rotation patterns.
pub fn analyze_rotation(
    sequence: &[PickEvent],
    roster: &GroupRoster,
    eligibility: &[MemberEligibility],
) -> RotationAnalysis {
    let participation = compute_participation(sequence, roster, eligibility);
    let bounds = RotationBounds::for_member_count(roster.len());

    if sequence.is_empty() {
        return RotationAnalysis::without_rotations(
            PatternTier::NoBooks,
            participation,
            roster_ids(roster),
            bounds,
        );
    }

    let pickers = individual_pickers(sequence);
    if pickers.len() < MIN_INDIVIDUAL_PICKS {
        tracing::debug!(
            individual_picks = pickers.len(),
            "not enough individual picks for rotation analysis"
        );
        return RotationAnalysis::without_rotations(
            PatternTier::InsufficientData,
            participation,
            roster_ids(roster),
            bounds,
        );
    }

    let rotations: Vec<Rotation> = segment_rotations(&pickers, bounds)
        .into_iter()
        .map(|picks| score_rotation(picks, roster))
        .collect();

    let rotation_count = rotations.len();
    let (avg_balance, avg_coverage) = if rotation_count > 0 {
        let n = rotation_count as f64;
        (
            rotations.iter().map(|r| r.balance).sum::<f64>() / n,
            rotations.iter().map(|r| r.coverage).sum::<f64>() / n,
        )
    } else {
        (0.0, 0.0)
    };

    let has_pattern = rotation_count > 1 && avg_balance > PATTERN_BALANCE;
    let tier = PatternTier::classify(has_pattern, avg_balance);

    let participants: FxHashSet<MemberId> = rotations
        .iter()
        .flat_map(|r| r.picks.iter().copied())
        .collect();
    let non_participating: Vec<MemberId> = roster_ids(roster)
        .into_iter()
        .filter(|id| !participants.contains(id))
        .collect();

    tracing::debug!(
        rotation_count,
        avg_balance,
        avg_coverage,
        %tier,
        "rotation analysis complete"
    );

    RotationAnalysis {
        has_pattern,
        tier,
        message: tier.message().to_string(),
        rotations,
        rotation_count,
        avg_balance,
        avg_coverage,
        participation_stats: participation,
        non_participating,
        bounds,
    }
}

fn roster_ids(roster: &GroupRoster) -> Vec<MemberId> {
    roster.members.iter().map(|m| m.id).collect()
}

/// Split picker IDs into rotations.
///
/// After each pick the current rotation closes when it reaches `max_size`,
/// when it has seen 70% of all distinct pickers and reached `min_size`, or
/// when the pick repeats a member already in it and `min_size` is reached.
/// A trailing rotation shorter than `min_size` is folded into the previous
/// one; with no previous rotation it is dropped.
pub fn segment_rotations(pickers: &[MemberId], bounds: RotationBounds) -> Vec<RotationPicks> {
    let unique_pickers = pickers.iter().collect::<FxHashSet<_>>().len();
    let active_threshold = unique_pickers as f64 * ACTIVE_MEMBER_RATIO;

    let mut rotations: Vec<RotationPicks> = Vec::new();
    let mut current = RotationPicks::new();
    let mut active: FxHashSet<MemberId> = FxHashSet::default();

    for &picker in pickers {
        let repeated = current.contains(&picker);
        current.push(picker);
        active.insert(picker);

        let size = current.len();
        let reached_min = size >= bounds.min_size;
        let should_close = size >= bounds.max_size
            || (active.len() as f64 >= active_threshold && reached_min)
            || (repeated && reached_min);

        if should_close {
            rotations.push(std::mem::take(&mut current));
            active.clear();
        }
    }

    if current.len() >= bounds.min_size {
        rotations.push(current);
    } else if !current.is_empty() {
        match rotations.last_mut() {
            Some(last) => last.extend(current),
            None => tracing::trace!(
                remaining = current.len(),
                "trailing picks below minimum rotation size dropped"
            ),
        }
    }

    rotations
}

fn score_rotation(picks: RotationPicks, roster: &GroupRoster) -> Rotation {
    let unique: FxHashSet<MemberId> = picks.iter().copied().collect();
    let balance = unique.len() as f64 / picks.len() as f64;
    // Former members still count toward balance, but only the current roster
    // counts toward coverage.
    let coverage = if roster.is_empty() {
        0.0
    } else {
        let on_roster = unique.iter().filter(|&&id| roster.contains(id)).count();
        on_roster as f64 / roster.len() as f64
    };
    let sub_patterns = detect_sub_patterns(&picks);

    Rotation {
        picks,
        balance,
        coverage,
        sub_patterns,
        is_clean: balance > CLEAN_BALANCE,
    }
}
