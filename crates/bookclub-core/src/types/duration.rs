//! Audio durations in the `"Nh Mm"` form used throughout the UI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A listening duration, stored as whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioDuration(pub u64);

impl AudioDuration {
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> u64 {
        self.0
    }

    pub fn hours(self) -> u64 {
        self.0 / 3600
    }

    /// Minutes past the hour. Leftover seconds are truncated.
    pub fn minutes(self) -> u64 {
        (self.0 % 3600) / 60
    }
}

impl fmt::Display for AudioDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(AudioDuration(0).to_string(), "0h 0m");
        assert_eq!(AudioDuration(9_000).to_string(), "2h 30m");
        assert_eq!(AudioDuration(3_659).to_string(), "1h 0m");
    }

    #[test]
    fn splits_into_hours_and_minutes() {
        let d = AudioDuration::from_seconds(4 * 3600 + 5 * 60 + 59);
        assert_eq!((d.hours(), d.minutes()), (4, 5));
        assert_eq!(d.seconds(), 14_759);
    }
}
