// Civil timestamp model
// A timezone-naive wall-clock reading split into calendar fields

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{days_in_month, seconds_of_day};

/// A wall-clock reading without timezone information.
///
/// Ordering is field-by-field (year, month, day, hour, minute, second), which
/// matches chronological order for every valid reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTimestamp {
    #[error("month {0} is outside 1-12")]
    Month(u32),
    #[error("day {day} does not exist in {year}-{month:02}")]
    Day { year: i32, month: u32, day: u32 },
    #[error("time {hour:02}:{minute:02}:{second:02} is outside 00:00:00-23:59:59")]
    Time { hour: u32, minute: u32, second: u32 },
}

impl CivilTimestamp {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, InvalidTimestamp> {
        let timestamp = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        timestamp.validate()?;
        Ok(timestamp)
    }

    pub fn validate(&self) -> Result<(), InvalidTimestamp> {
        if !(1..=12).contains(&self.month) {
            return Err(InvalidTimestamp::Month(self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(InvalidTimestamp::Day {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            return Err(InvalidTimestamp::Time {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn seconds_of_day(&self) -> i64 {
        seconds_of_day(self.hour, self.minute, self.second)
    }

    pub fn date_fields(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

impl From<NaiveDateTime> for CivilTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }
}

impl fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
