use crate::models::countdown::RemainingDuration;
use crate::models::timestamp::CivilTimestamp;
use crate::utils::date::{days_between, SECONDS_PER_DAY};

/// Time left from `now` until `target`, recomputed from scratch.
///
/// Returns zero when `now` is at or past `target`. Whole days are counted
/// on the calendar dates, then the difference in time of day is applied,
/// borrowing a day when the target's time of day is earlier than now's.
pub fn remaining(now: CivilTimestamp, target: CivilTimestamp) -> RemainingDuration {
    if now >= target {
        return RemainingDuration::ZERO;
    }

    let mut days = days_between(now.date_fields(), target.date_fields());
    let mut intraday = target.seconds_of_day() - now.seconds_of_day();
    if intraday < 0 {
        days -= 1;
        intraday += SECONDS_PER_DAY;
    }

    RemainingDuration::from_total_seconds(days * SECONDS_PER_DAY + intraday)
}
