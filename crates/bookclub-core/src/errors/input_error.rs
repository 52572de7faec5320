//! Input decoding errors.

use super::error_code::{self, BookclubErrorCode};

/// Errors raised when caller-supplied data has the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to decode group snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BookclubErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => error_code::INPUT_DECODE,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
