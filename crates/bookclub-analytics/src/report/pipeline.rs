//! ReportPipeline: end-to-end orchestrator.
//!
//! Chains the analytics over one group snapshot:
//! (1) pick sequence and attribution counts
//! (2) rotation analysis with participation
//! (3) fairness metrics
//! (4) next-picker suggestion
//! (5) optional rating, wager, and media sections

use serde::{Deserialize, Serialize};

use bookclub_core::config::ReportOptions;
use bookclub_core::types::group::{GroupSnapshot, Member};

use crate::advisor::suggest_next_picker;
use crate::attribution::{build_pick_sequence, AttributionCounts, MemberAttribution, PickEvent};
use crate::fairness::{compute_fairness_metrics, FairnessMetric};
use crate::rotation::{analyze_rotation, RotationAnalysis};

use super::media::{media_stats, MediaStats};
use super::ratings::{picker_ratings, rating_stats, PickerRating, RatingStats};
use super::wagers::{summarize_wagers, WagerSummary};

/// The full attribution report. Field names are bound by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionReport {
    pub member_stats: Vec<MemberAttribution>,
    pub collective_count: u32,
    pub unattributed_count: u32,
    pub total_books: u32,
    pub pick_sequence: Vec<PickEvent>,
    pub rotation_analysis: RotationAnalysis,
    pub fairness_metrics: Vec<FairnessMetric>,
    pub next_picker: Option<Member>,
    pub rating_stats: Option<RatingStats>,
    pub picker_ratings: Option<Vec<PickerRating>>,
    pub wagers: Option<WagerSummary>,
    pub media: Option<MediaStats>,
}

impl AttributionReport {
    /// Render as JSON for the template layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Builds [`AttributionReport`]s with a fixed set of enabled sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPipeline {
    options: ReportOptions,
}

impl ReportPipeline {
    /// Create with the default section toggles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with explicit section toggles.
    pub fn with_options(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ReportOptions {
        self.options
    }

    /// Run every analysis over the snapshot.
    pub fn run(&self, snapshot: &GroupSnapshot) -> AttributionReport {
        let span = tracing::debug_span!(
            "attribution_report",
            books = snapshot.books.len(),
            members = snapshot.roster.len()
        );
        let _guard = span.enter();

        let roster = &snapshot.roster;

        // Step 1: Pick sequence
        let pick_sequence = build_pick_sequence(&snapshot.books);
        let counts = AttributionCounts::from_sequence(&pick_sequence);

        // Step 2: Rotation analysis
        let rotation_analysis = analyze_rotation(&pick_sequence, roster, &snapshot.eligibility);

        // Step 3: Fairness
        let fairness_metrics =
            compute_fairness_metrics(&counts, &rotation_analysis.participation_stats, roster);

        // Step 4: Next picker
        let next_picker = suggest_next_picker(&pick_sequence, roster);

        // Step 5: Optional sections
        let (rating_stats, picker_ratings) = if self.options.include_ratings {
            (
                Some(rating_stats(&snapshot.ratings)),
                Some(picker_ratings(&pick_sequence, &snapshot.ratings, roster)),
            )
        } else {
            (None, None)
        };
        let wagers = self
            .options
            .include_wagers
            .then(|| summarize_wagers(&snapshot.wagers, roster));
        let media = self
            .options
            .include_media
            .then(|| media_stats(&snapshot.editions));

        tracing::debug!(
            has_pattern = rotation_analysis.has_pattern,
            next_picker = ?next_picker.as_ref().map(|m| m.id),
            "attribution report built"
        );

        AttributionReport {
            member_stats: counts.member_stats(roster),
            collective_count: counts.collective_count,
            unattributed_count: counts.unattributed_count,
            total_books: counts.total_books,
            pick_sequence,
            rotation_analysis,
            fairness_metrics,
            next_picker,
            rating_stats,
            picker_ratings,
            wagers,
            media,
        }
    }
}
