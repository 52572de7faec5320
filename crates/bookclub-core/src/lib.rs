//! # bookclub-core
//!
//! Foundation crate for the book-club attribution analytics engine.
//! Defines identifiers, the group input model, errors, config, and tracing.
//! The analytics crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BookclubConfig;
pub use errors::error_code::BookclubErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{BookId, EditionId, MemberId, WagerId};
