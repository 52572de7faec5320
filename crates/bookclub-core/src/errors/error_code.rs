//! Stable error codes surfaced to callers.

/// Maps an error onto a stable, machine-readable code.
pub trait BookclubErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const INPUT_DECODE: &str = "INPUT_DECODE";
