//! Next-picker advice.

pub mod next_picker;

pub use next_picker::{explain_next_picker, suggest_next_picker, SuggestionReason};
