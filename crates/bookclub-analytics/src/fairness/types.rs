//! Core types for fairness metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use bookclub_core::MemberId;

/// Whether a member is ahead of, behind, or at their fair share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessStatus {
    Over,
    Under,
    Balanced,
}

impl fmt::Display for FairnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => write!(f, "over"),
            Self::Under => write!(f, "under"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

/// Advice attached to a fairness metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    SlowDown,
    CatchUp,
    ConsiderFewer,
    ConsiderMore,
    OnPace,
}

impl Recommendation {
    /// |deviation_percent| > 30 is strong, > 15 is soft, otherwise on pace.
    pub fn from_deviation(deviation: f64, deviation_percent: f64) -> Self {
        let magnitude = deviation_percent.abs();
        let over = deviation > 0.0;
        if magnitude > 30.0 {
            if over {
                Self::SlowDown
            } else {
                Self::CatchUp
            }
        } else if magnitude > 15.0 {
            if over {
                Self::ConsiderFewer
            } else {
                Self::ConsiderMore
            }
        } else {
            Self::OnPace
        }
    }

    pub fn status(self) -> FairnessStatus {
        match self {
            Self::SlowDown | Self::ConsiderFewer => FairnessStatus::Over,
            Self::CatchUp | Self::ConsiderMore => FairnessStatus::Under,
            Self::OnPace => FairnessStatus::Balanced,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::SlowDown => "Slow down on book picks",
            Self::CatchUp => "Pick more books to catch up",
            Self::ConsiderFewer => "Consider picking fewer books",
            Self::ConsiderMore => "Consider picking more books",
            Self::OnPace => "Current pace looks good",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A member's actual picks against their eligibility-weighted fair share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetric {
    pub member_id: MemberId,
    pub username: String,
    pub count: u32,
    pub fair_share: f64,
    /// count - fair_share.
    pub deviation: f64,
    pub deviation_percent: f64,
    /// Human-readable advice, e.g. "Current pace looks good".
    pub recommendation: String,
    pub status: FairnessStatus,
}
