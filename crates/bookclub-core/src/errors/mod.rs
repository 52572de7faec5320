//! Error types for the fallible edges of the engine.
//!
//! The analytics themselves never fail; only configuration loading and
//! input decoding can.

mod config_error;
pub mod error_code;
mod input_error;

pub use config_error::{ConfigError, ConfigResult};
pub use error_code::BookclubErrorCode;
pub use input_error::{InputError, InputResult};
