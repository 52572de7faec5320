//! Report section toggles.

use serde::{Deserialize, Serialize};

/// Which optional report sections a group has enabled.
///
/// None of these change the attribution math; they only gate whether the
/// rating, wager, and media aggregations run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Include rating statistics. Default: true.
    pub ratings_enabled: Option<bool>,
    /// Include dollar-bet tallies and rivalries. Default: false.
    pub dollar_bets_enabled: Option<bool>,
    /// Include page/audio aggregates. Default: true.
    pub media_stats_enabled: Option<bool>,
}

impl ReportConfig {
    pub fn effective_ratings_enabled(&self) -> bool {
        self.ratings_enabled.unwrap_or(true)
    }

    pub fn effective_dollar_bets_enabled(&self) -> bool {
        self.dollar_bets_enabled.unwrap_or(false)
    }

    pub fn effective_media_stats_enabled(&self) -> bool {
        self.media_stats_enabled.unwrap_or(true)
    }

    /// Resolve into the explicit flags the report pipeline takes.
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            include_ratings: self.effective_ratings_enabled(),
            include_wagers: self.effective_dollar_bets_enabled(),
            include_media: self.effective_media_stats_enabled(),
        }
    }
}

/// Capability flags passed into report assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub include_ratings: bool,
    pub include_wagers: bool,
    pub include_media: bool,
}

impl ReportOptions {
    /// Every optional section enabled.
    pub fn all() -> Self {
        Self {
            include_ratings: true,
            include_wagers: true,
            include_media: true,
        }
    }

    /// Attribution analytics only.
    pub fn attribution_only() -> Self {
        Self {
            include_ratings: false,
            include_wagers: false,
            include_media: false,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportConfig::default().options()
    }
}
