//! Pick attribution: the streak-annotated pick sequence and per-member counts.

pub mod counts;
pub mod sequence;

pub use counts::{AttributionCounts, MemberAttribution};
pub use sequence::{build_pick_sequence, individual_pickers, most_recent_picker, Attribution, PickEvent};
