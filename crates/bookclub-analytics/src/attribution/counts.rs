//! Attribution counts per member.

use serde::{Deserialize, Serialize};

use bookclub_core::types::group::GroupRoster;
use bookclub_core::{FxHashMap, MemberId};

use super::sequence::{Attribution, PickEvent};

/// Tallies of who picked what across the whole sequence.
#[derive(Debug, Clone, Default)]
pub struct AttributionCounts {
    /// Individual picks per member, including pickers who left the roster.
    by_member: FxHashMap<MemberId, u32>,
    pub collective_count: u32,
    pub unattributed_count: u32,
    pub total_books: u32,
}

impl AttributionCounts {
    pub fn from_sequence(sequence: &[PickEvent]) -> Self {
        let mut counts = Self::default();
        for event in sequence {
            counts.total_books += 1;
            match event.attribution {
                Attribution::Member(id) => *counts.by_member.entry(id).or_insert(0) += 1,
                Attribution::Collective => counts.collective_count += 1,
                Attribution::Unattributed => counts.unattributed_count += 1,
            }
        }
        counts
    }

    /// Picks attributed to a member (0 if they never picked).
    pub fn count_for(&self, id: MemberId) -> u32 {
        self.by_member.get(&id).copied().unwrap_or(0)
    }

    /// Sum of all individually attributed picks.
    pub fn total_individual(&self) -> u32 {
        self.by_member.values().sum()
    }

    /// One row per roster member, most picks first, then by username.
    pub fn member_stats(&self, roster: &GroupRoster) -> Vec<MemberAttribution> {
        let mut stats: Vec<MemberAttribution> = roster
            .members
            .iter()
            .map(|m| MemberAttribution {
                member_id: m.id,
                username: m.username.clone(),
                count: self.count_for(m.id),
                is_admin: roster.is_admin(m.id),
            })
            .collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.username.cmp(&b.username)));
        stats
    }
}

/// A roster member's attribution row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAttribution {
    pub member_id: MemberId,
    pub username: String,
    pub count: u32,
    pub is_admin: bool,
}
