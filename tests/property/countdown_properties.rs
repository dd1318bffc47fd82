// Property-based tests for the countdown arithmetic
// Checks normalisation and agreement with chrono across random timestamps

use chrono::NaiveDate;
use launch_screen::models::timestamp::CivilTimestamp;
use launch_screen::services::countdown::remaining;
use launch_screen::utils::date::days_in_month;
use proptest::prelude::*;

fn civil_timestamp() -> impl Strategy<Value = CivilTimestamp> {
    (1990..2100i32, 1..=12u32)
        .prop_flat_map(|(year, month)| {
            (
                Just(year),
                Just(month),
                1..=days_in_month(year, month),
                0..24u32,
                0..60u32,
                0..60u32,
            )
        })
        .prop_map(|(year, month, day, hour, minute, second)| CivilTimestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
}

fn chrono_seconds_between(now: CivilTimestamp, target: CivilTimestamp) -> i64 {
    let to_naive = |t: CivilTimestamp| {
        NaiveDate::from_ymd_opt(t.year, t.month, t.day)
            .unwrap()
            .and_hms_opt(t.hour, t.minute, t.second)
            .unwrap()
    };
    (to_naive(target) - to_naive(now)).num_seconds()
}

proptest! {
    /// Property: fields are always normalised
    #[test]
    fn prop_remaining_is_normalised(now in civil_timestamp(), target in civil_timestamp()) {
        let value = remaining(now, target);
        prop_assert!(value.hours < 24);
        prop_assert!(value.minutes < 60);
        prop_assert!(value.seconds < 60);
    }

    /// Property: the total matches chrono's own difference when the target is ahead
    #[test]
    fn prop_remaining_matches_chrono(now in civil_timestamp(), target in civil_timestamp()) {
        let expected = chrono_seconds_between(now, target).max(0) as u64;
        prop_assert_eq!(remaining(now, target).total_seconds(), expected);
    }

    /// Property: zero at or after the target
    #[test]
    fn prop_zero_once_reached(a in civil_timestamp(), b in civil_timestamp()) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(remaining(later, earlier).is_zero());
        prop_assert!(remaining(later, later).is_zero());
    }

    /// Property: strictly earlier readings always leave time on the clock
    #[test]
    fn prop_positive_before_target(a in civil_timestamp(), b in civil_timestamp()) {
        prop_assume!(a != b);
        let (earlier, later) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(!remaining(earlier, later).is_zero());
    }
}
