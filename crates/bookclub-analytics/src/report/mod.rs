//! Aggregate reporting: everything the attribution page renders.

pub mod media;
pub mod pipeline;
pub mod ratings;
pub mod wagers;

pub use media::{media_stats, MediaStats};
pub use pipeline::{AttributionReport, ReportPipeline};
pub use ratings::{picker_ratings, rating_stats, PickerRating, RatingBucket, RatingStats};
pub use wagers::{summarize_wagers, Rivalry, WagerSummary, WagerTally};
