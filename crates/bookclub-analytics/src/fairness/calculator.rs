//! Fair-share calculation.
//!
//! A member's fair share is the group's total individual picks, split in
//! proportion to how many books each member has been eligible for.

use bookclub_core::types::group::GroupRoster;
use bookclub_core::{FxHashMap, MemberId};

use crate::attribution::AttributionCounts;
use crate::rotation::ParticipationStat;

use super::types::{FairnessMetric, Recommendation};

/// Floor on the fair share when turning a deviation into a percentage.
const MIN_SHARE_FOR_PERCENT: f64 = 0.1;

/// Expected picks per member.
///
/// Every member gets 0 when no one has an eligibility window.
pub fn calculate_fair_shares(
    total_picks: u32,
    participation: &[ParticipationStat],
) -> FxHashMap<MemberId, f64> {
    let total_eligible: u64 = participation
        .iter()
        .map(|p| p.books_since_eligible as u64)
        .sum();

    participation
        .iter()
        .map(|p| {
            let share = if total_eligible > 0 {
                total_picks as f64 * (p.books_since_eligible as f64 / total_eligible as f64)
            } else {
                0.0
            };
            (p.member_id, share)
        })
        .collect()
}

/// Percentage deviation, 0 when the fair share is 0.
pub fn deviation_percent(deviation: f64, fair_share: f64) -> f64 {
    if fair_share > 0.0 {
        deviation / fair_share.max(MIN_SHARE_FOR_PERCENT) * 100.0
    } else {
        0.0
    }
}

/// Fairness metrics for every roster member, largest absolute deviation first.
pub fn compute_fairness_metrics(
    counts: &AttributionCounts,
    participation: &[ParticipationStat],
    roster: &GroupRoster,
) -> Vec<FairnessMetric> {
    let fair_shares = calculate_fair_shares(counts.total_individual(), participation);

    let mut metrics: Vec<FairnessMetric> = roster
        .members
        .iter()
        .map(|member| {
            let count = counts.count_for(member.id);
            let fair_share = fair_shares.get(&member.id).copied().unwrap_or(0.0);
            let deviation = count as f64 - fair_share;
            let deviation_percent = deviation_percent(deviation, fair_share);
            let recommendation = Recommendation::from_deviation(deviation, deviation_percent);

            FairnessMetric {
                member_id: member.id,
                username: member.username.clone(),
                count,
                fair_share,
                deviation,
                deviation_percent,
                recommendation: recommendation.text().to_string(),
                status: recommendation.status(),
            }
        })
        .collect();

    // Stable, so equal deviations keep roster order.
    metrics.sort_by(|a, b| {
        b.deviation
            .abs()
            .partial_cmp(&a.deviation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    metrics
}
