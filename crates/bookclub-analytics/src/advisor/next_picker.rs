//! Least-picks-first next-picker heuristic.
//!
//! Ties break on roster order so the same inputs always give the same answer.

use serde::{Deserialize, Serialize};

use bookclub_core::types::group::{GroupRoster, Member};
use bookclub_core::{FxHashMap, MemberId};

use crate::attribution::{most_recent_picker, PickEvent};

/// Which rule produced the suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    /// No individual picks yet: first admin, else first member.
    NoPicksYet,
    NeverPicked,
    FewestPicks,
    NextTier,
    Fallback,
}

/// Suggest who should pick next. `None` only when the roster is empty.
pub fn suggest_next_picker(sequence: &[PickEvent], roster: &GroupRoster) -> Option<Member> {
    explain_next_picker(sequence, roster).map(|(member, _)| member.clone())
}

/// Like [`suggest_next_picker`], also returning the rule that fired.
pub fn explain_next_picker<'a>(
    sequence: &[PickEvent],
    roster: &'a GroupRoster,
) -> Option<(&'a Member, SuggestionReason)> {
    let first = roster.members.first()?;

    let mut counts: FxHashMap<MemberId, u32> =
        roster.members.iter().map(|m| (m.id, 0)).collect();
    let mut any_individual = false;
    for id in sequence.iter().filter_map(|e| e.attribution.member_id()) {
        any_individual = true;
        if let Some(c) = counts.get_mut(&id) {
            *c += 1;
        }
    }

    if !any_individual {
        let admin = roster
            .admins
            .iter()
            .find_map(|&id| roster.member(id))
            .unwrap_or(first);
        return Some((admin, SuggestionReason::NoPicksYet));
    }

    let count_of = |id: MemberId| counts.get(&id).copied().unwrap_or(0);

    if let Some(fresh) = roster.members.iter().find(|m| count_of(m.id) == 0) {
        return Some((fresh, SuggestionReason::NeverPicked));
    }

    let most_recent = most_recent_picker(sequence);
    let min_picks = roster.members.iter().map(|m| count_of(m.id)).min().unwrap_or(0);

    let tied: Vec<&Member> = roster
        .members
        .iter()
        .filter(|m| count_of(m.id) == min_picks && Some(m.id) != most_recent)
        .collect();

    if !tied.is_empty() {
        // The latest tied picker hands over to another tied member.
        let latest_tied = sequence
            .iter()
            .rev()
            .filter_map(|e| e.attribution.member_id())
            .find(|id| tied.iter().any(|m| m.id == *id));
        if let Some(latest) = latest_tied {
            let pick = tied
                .iter()
                .find(|m| m.id != latest)
                .copied()
                .unwrap_or(tied[0]);
            return Some((pick, SuggestionReason::FewestPicks));
        }
    }

    let next_min = roster
        .members
        .iter()
        .filter(|m| Some(m.id) != most_recent)
        .map(|m| count_of(m.id))
        .filter(|&c| c > min_picks)
        .min();
    if let Some(next_min) = next_min {
        if let Some(m) = roster
            .members
            .iter()
            .find(|m| count_of(m.id) == next_min && Some(m.id) != most_recent)
        {
            return Some((m, SuggestionReason::NextTier));
        }
    }

    let fallback = roster
        .members
        .iter()
        .find(|m| Some(m.id) != most_recent)
        .unwrap_or(first);
    Some((fallback, SuggestionReason::Fallback))
}
