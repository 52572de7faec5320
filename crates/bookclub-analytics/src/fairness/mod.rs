//! Eligibility-weighted fairness of pick counts.

pub mod calculator;
pub mod types;

pub use calculator::{calculate_fair_shares, compute_fairness_metrics};
pub use types::{FairnessMetric, FairnessStatus, Recommendation};
