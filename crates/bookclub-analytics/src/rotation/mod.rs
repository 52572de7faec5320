//! Rotation detection: segmenting the pick history into turns around the group.

pub mod detector;
pub mod participation;
pub mod sub_patterns;
pub mod types;

pub use detector::{analyze_rotation, segment_rotations};
pub use participation::compute_participation;
pub use types::{
    ParticipationStat, PatternTier, Rotation, RotationAnalysis, RotationBounds, SubPatterns,
};
