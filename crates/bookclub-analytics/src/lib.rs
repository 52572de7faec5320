//! # bookclub-analytics
//!
//! Attribution analytics for book-club groups: who picked which book, whether
//! the group follows a rotation, how fair the picks are given each member's
//! eligibility window, and who should pick next.
//!
//! Every entry point is a pure function of its inputs.

pub mod advisor;
pub mod attribution;
pub mod fairness;
pub mod report;
pub mod rotation;

pub use advisor::suggest_next_picker;
pub use attribution::{build_pick_sequence, Attribution, PickEvent};
pub use report::{AttributionReport, ReportPipeline};
