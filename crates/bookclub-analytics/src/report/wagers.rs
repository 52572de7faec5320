//! Dollar-bet tallies and head-to-head rivalries.

use serde::{Deserialize, Serialize};

use bookclub_core::types::group::{GroupRoster, Wager};
use bookclub_core::{FxHashMap, MemberId};

/// A member's settled-bet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerTally {
    pub member_id: MemberId,
    pub username: String,
    pub wins: u32,
    pub losses: u32,
    /// Amount won minus amount lost.
    pub net: f64,
}

/// A member's most costly and most profitable opponents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
    pub member_id: MemberId,
    pub username: String,
    /// Opponent who took the most net money from this member.
    pub nemesis: Option<MemberId>,
    pub nemesis_username: Option<String>,
    pub nemesis_loss: f64,
    /// Opponent who gave this member the most net money.
    pub cash_cow: Option<MemberId>,
    pub cash_cow_username: Option<String>,
    pub cash_cow_gain: f64,
}

/// Wager section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerSummary {
    pub resolved_count: u32,
    /// Bets left out: open, cancelled, unaccepted, or without a valid winner.
    pub excluded_count: u32,
    /// Highest net first, then by username.
    pub tallies: Vec<WagerTally>,
    /// Roster order, only members with at least one settled bet.
    pub rivalries: Vec<Rivalry>,
}

/// Tally settled wagers for the roster.
pub fn summarize_wagers(wagers: &[Wager], roster: &GroupRoster) -> WagerSummary {
    let mut wins: FxHashMap<MemberId, u32> = FxHashMap::default();
    let mut losses: FxHashMap<MemberId, u32> = FxHashMap::default();
    let mut net: FxHashMap<MemberId, f64> = FxHashMap::default();
    // (member, opponent) -> money member gained from opponent, net.
    let mut ledger: FxHashMap<(MemberId, MemberId), f64> = FxHashMap::default();
    let mut resolved_count = 0u32;
    let mut excluded_count = 0u32;

    for wager in wagers {
        let Some((winner, loser)) = wager.outcome() else {
            excluded_count += 1;
            continue;
        };
        resolved_count += 1;
        *wins.entry(winner).or_insert(0) += 1;
        *losses.entry(loser).or_insert(0) += 1;
        *net.entry(winner).or_insert(0.0) += wager.amount;
        *net.entry(loser).or_insert(0.0) -= wager.amount;
        *ledger.entry((winner, loser)).or_insert(0.0) += wager.amount;
        *ledger.entry((loser, winner)).or_insert(0.0) -= wager.amount;
    }

    tracing::debug!(resolved_count, excluded_count, "wagers tallied");

    let mut tallies: Vec<WagerTally> = roster
        .members
        .iter()
        .map(|m| WagerTally {
            member_id: m.id,
            username: m.username.clone(),
            wins: wins.get(&m.id).copied().unwrap_or(0),
            losses: losses.get(&m.id).copied().unwrap_or(0),
            net: net.get(&m.id).copied().unwrap_or(0.0),
        })
        .collect();
    tallies.sort_by(|a, b| {
        b.net
            .partial_cmp(&a.net)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.username.cmp(&b.username))
    });

    let rivalries = roster
        .members
        .iter()
        .filter(|m| wins.contains_key(&m.id) || losses.contains_key(&m.id))
        .map(|m| {
            let mut nemesis: Option<(MemberId, f64)> = None;
            let mut cash_cow: Option<(MemberId, f64)> = None;
            for opponent in roster.members.iter().filter(|o| o.id != m.id) {
                let gained = ledger.get(&(m.id, opponent.id)).copied().unwrap_or(0.0);
                if gained < 0.0 && nemesis.map_or(true, |(_, loss)| -gained > loss) {
                    nemesis = Some((opponent.id, -gained));
                }
                if gained > 0.0 && cash_cow.map_or(true, |(_, gain)| gained > gain) {
                    cash_cow = Some((opponent.id, gained));
                }
            }
            let name = |id: Option<MemberId>| id.and_then(|id| roster.username(id)).map(str::to_string);
            Rivalry {
                member_id: m.id,
                username: m.username.clone(),
                nemesis: nemesis.map(|(id, _)| id),
                nemesis_username: name(nemesis.map(|(id, _)| id)),
                nemesis_loss: nemesis.map_or(0.0, |(_, loss)| loss),
                cash_cow: cash_cow.map(|(id, _)| id),
                cash_cow_username: name(cash_cow.map(|(id, _)| id)),
                cash_cow_gain: cash_cow.map_or(0.0, |(_, gain)| gain),
            }
        })
        .collect();

    WagerSummary {
        resolved_count,
        excluded_count,
        tallies,
        rivalries,
    }
}
