// Countdown model
// Normalised breakdown of the time left until launch

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::date::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Days/hours/minutes/seconds remaining, always normalised so that
/// `hours < 24`, `minutes < 60` and `seconds < 60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Greedy decomposition of a second count. Negative input yields zero.
    pub fn from_total_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::ZERO;
        }
        let days = total / SECONDS_PER_DAY;
        let rest = total % SECONDS_PER_DAY;
        Self {
            days: days as u64,
            hours: (rest / SECONDS_PER_HOUR) as u32,
            minutes: ((rest % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (rest % SECONDS_PER_MINUTE) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY as u64
            + u64::from(self.hours) * SECONDS_PER_HOUR as u64
            + u64::from(self.minutes) * SECONDS_PER_MINUTE as u64
            + u64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} days {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
