// Date utility functions
// Plain Gregorian calendar arithmetic on year/month/day fields

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// 1-based day of the year. Month is clamped into 1..=12.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i64 {
    let month_index = month.clamp(1, 12) as usize - 1;
    let mut ordinal = DAYS_BEFORE_MONTH[month_index] + i64::from(day);
    if month_index >= 2 && is_leap_year(year) {
        ordinal += 1;
    }
    ordinal
}

/// Days elapsed from 0001-01-01 (day 0) to the given date.
pub fn days_since_epoch(year: i32, month: u32, day: u32) -> i64 {
    let prior_years = i64::from(year) - 1;
    let leap_days = prior_years.div_euclid(4) - prior_years.div_euclid(100) + prior_years.div_euclid(400);
    prior_years * 365 + leap_days + day_of_year(year, month, day) - 1
}

/// Signed count of whole days from the first date to the second.
pub fn days_between(from: (i32, u32, u32), to: (i32, u32, u32)) -> i64 {
    days_since_epoch(to.0, to.1, to.2) - days_since_epoch(from.0, from.1, from.2)
}

pub fn seconds_of_day(hour: u32, minute: u32, second: u32) -> i64 {
    i64::from(hour) * SECONDS_PER_HOUR + i64::from(minute) * SECONDS_PER_MINUTE + i64::from(second)
}
